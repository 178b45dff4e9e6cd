//! TLS configuration for listener and sender endpoints.
//!
//! The configuration loader hands over store locations and passwords as
//! [`StoreCredentials`] together with a list of raw [`Parameter`]s. The two entry points
//! validate them for the role of the endpoint and return an immutable [`SslConfig`]:
//!
//! - [`ssl_config_for_listener`]: key store mandatory, trust store optional (mutual TLS),
//!   recognizes the `SERVER_*` parameters and `SSL_VERIFY_CLIENT`
//! - [`ssl_config_for_sender`]: trust store mandatory, key store optional (client
//!   certificate), recognizes the `CLIENT_*` parameters, always in client mode
//!
//! Building touches the filesystem only to check that the referenced store files exist;
//! their content is left to the TLS engine.
//!
//! # Example
//!
//! ```no_run
//! use transport_http::ssl::{ssl_config_for_listener, Parameter, StoreCredentials};
//!
//! let stores = StoreCredentials {
//!     key_store_file: Some("conf/server.jks".into()),
//!     key_store_pass: Some("secret".into()),
//!     ..Default::default()
//! };
//! let parameters = [Parameter::new("SSL_VERIFY_CLIENT", "false")];
//!
//! let config = ssl_config_for_listener(stores, &parameters)?;
//! assert_eq!(config.cert_pass(), Some("secret"));
//! # Ok::<(), transport_http::ssl::ConfigError>(())
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

mod config;
pub use config::SslConfig;
pub use config::SslConfigBuilder;

pub mod parameter;
pub use parameter::EndpointRole;
pub use parameter::Parameter;

mod error;
pub use error::ConfigError;

/// Store locations and passwords of one endpoint, as found in its configuration.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoreCredentials {
    /// Password of the private key entry; the key store password when unset.
    pub cert_pass: Option<String>,
    pub key_store_pass: Option<String>,
    pub key_store_file: Option<PathBuf>,
    pub trust_store_file: Option<PathBuf>,
    pub trust_store_pass: Option<String>,
}

impl std::fmt::Debug for StoreCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreCredentials")
            .field("key_store_file", &self.key_store_file)
            .field("trust_store_file", &self.trust_store_file)
            .finish_non_exhaustive()
    }
}

impl StoreCredentials {
    fn into_builder(self, role: EndpointRole) -> SslConfigBuilder {
        SslConfig::builder(role)
            .cert_pass(self.cert_pass)
            .key_store(self.key_store_file)
            .key_store_pass(self.key_store_pass)
            .trust_store(self.trust_store_file)
            .trust_store_pass(self.trust_store_pass)
    }
}

/// Builds the TLS configuration of a listening endpoint.
///
/// # Errors
///
/// - [`ConfigError::MissingKeyStore`] when the key store file or password is missing
/// - [`ConfigError::KeyStoreNotFound`] when the key store file does not exist
/// - [`ConfigError::MissingTrustStorePass`] when a trust store is given without password
/// - [`ConfigError::TrustStoreNotFound`] when the given trust store file does not exist
pub fn ssl_config_for_listener(stores: StoreCredentials, parameters: &[Parameter]) -> Result<SslConfig, ConfigError> {
    stores.into_builder(EndpointRole::Listener).parameters(parameters).build()
}

/// Builds the TLS configuration of a sending endpoint.
///
/// # Errors
///
/// - [`ConfigError::MissingTrustStore`] when the trust store file or password is missing
/// - [`ConfigError::KeyStoreNotFound`] when a key store is given but does not exist
/// - [`ConfigError::TrustStoreNotFound`] when the trust store file does not exist
pub fn ssl_config_for_sender(stores: StoreCredentials, parameters: &[Parameter]) -> Result<SslConfig, ConfigError> {
    stores.into_builder(EndpointRole::Sender).parameters(parameters).build()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use indoc::formatdoc;
    use tempfile::{NamedTempFile, TempDir};
    use tracing::Level;

    use super::parameter::*;
    use super::*;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt().with_max_level(Level::TRACE).with_test_writer().try_init();
    }

    fn store_file() -> NamedTempFile {
        NamedTempFile::new().unwrap()
    }

    fn listener_stores(key_store: &Path) -> StoreCredentials {
        StoreCredentials {
            key_store_file: Some(key_store.to_path_buf()),
            key_store_pass: Some("changeit".into()),
            ..Default::default()
        }
    }

    fn sender_stores(trust_store: &Path) -> StoreCredentials {
        StoreCredentials {
            trust_store_file: Some(trust_store.to_path_buf()),
            trust_store_pass: Some("trust".into()),
            ..Default::default()
        }
    }

    fn missing_path() -> PathBuf {
        TempDir::new().unwrap().path().join("missing.jks")
    }

    #[test]
    fn listener_minimal() {
        let key_store = store_file();

        let config = ssl_config_for_listener(listener_stores(key_store.path()), &[]).unwrap();

        assert_eq!(config.role(), EndpointRole::Listener);
        assert_eq!(config.key_store(), Some(key_store.path()));
        assert_eq!(config.key_store_pass(), Some("changeit"));
        assert_eq!(config.cert_pass(), Some("changeit"));
        assert_eq!(config.trust_store(), None);
        assert_eq!(config.trust_store_pass(), None);
        assert!(config.enable_session_creation());
        assert!(!config.need_client_auth());
        assert!(!config.client_mode());
        assert!(!config.is_mutual());
    }

    #[test]
    fn listener_cert_pass_defaults_to_key_store_pass() {
        let key_store = store_file();
        let stores = StoreCredentials { key_store_pass: Some("p".into()), ..listener_stores(key_store.path()) };

        let config = ssl_config_for_listener(stores, &[]).unwrap();
        assert_eq!(config.cert_pass(), Some("p"));
    }

    #[test]
    fn listener_explicit_cert_pass_is_kept() {
        let key_store = store_file();
        let stores = StoreCredentials { cert_pass: Some("key-entry".into()), ..listener_stores(key_store.path()) };

        let config = ssl_config_for_listener(stores, &[]).unwrap();
        assert_eq!(config.cert_pass(), Some("key-entry"));
        assert_eq!(config.key_store_pass(), Some("changeit"));
    }

    #[test]
    fn listener_requires_key_store() {
        let stores = StoreCredentials { key_store_pass: Some("p".into()), ..Default::default() };
        assert_eq!(ssl_config_for_listener(stores, &[]).unwrap_err(), ConfigError::MissingKeyStore);

        let key_store = store_file();
        let stores = StoreCredentials { key_store_pass: None, ..listener_stores(key_store.path()) };
        assert_eq!(ssl_config_for_listener(stores, &[]).unwrap_err(), ConfigError::MissingKeyStore);

        let stores = StoreCredentials { key_store_pass: Some(String::new()), ..listener_stores(key_store.path()) };
        assert_eq!(ssl_config_for_listener(stores, &[]).unwrap_err(), ConfigError::MissingKeyStore);
    }

    #[test]
    fn listener_missing_credentials_reported_before_missing_file() {
        let stores = StoreCredentials { key_store_file: Some(missing_path()), ..Default::default() };
        assert_eq!(ssl_config_for_listener(stores, &[]).unwrap_err(), ConfigError::MissingKeyStore);
    }

    #[test]
    fn listener_key_store_must_exist() {
        let path = missing_path();
        let err = ssl_config_for_listener(listener_stores(&path), &[]).unwrap_err();
        assert_eq!(err, ConfigError::key_store_not_found(&path));
    }

    #[test]
    fn listener_key_store_must_be_a_file() {
        let dir = TempDir::new().unwrap();
        let err = ssl_config_for_listener(listener_stores(dir.path()), &[]).unwrap_err();
        assert!(matches!(err, ConfigError::KeyStoreNotFound { .. }));
    }

    #[test]
    fn listener_trust_store_requires_password() {
        let key_store = store_file();
        let trust_store = store_file();
        let stores = StoreCredentials {
            trust_store_file: Some(trust_store.path().to_path_buf()),
            ..listener_stores(key_store.path())
        };

        assert_eq!(ssl_config_for_listener(stores, &[]).unwrap_err(), ConfigError::MissingTrustStorePass);
    }

    #[test]
    fn listener_trust_store_password_checked_before_existence() {
        let key_store = store_file();
        let stores =
            StoreCredentials { trust_store_file: Some(missing_path()), ..listener_stores(key_store.path()) };

        assert_eq!(ssl_config_for_listener(stores, &[]).unwrap_err(), ConfigError::MissingTrustStorePass);
    }

    #[test]
    fn listener_trust_store_must_exist() {
        init_tracing();
        let key_store = store_file();
        let path = missing_path();
        let stores = StoreCredentials {
            trust_store_file: Some(path.clone()),
            trust_store_pass: Some("trust".into()),
            ..listener_stores(key_store.path())
        };

        assert_eq!(ssl_config_for_listener(stores, &[]).unwrap_err(), ConfigError::trust_store_not_found(&path));
    }

    #[test]
    fn listener_mutual_tls() {
        let key_store = store_file();
        let trust_store = store_file();
        let stores = StoreCredentials {
            trust_store_file: Some(trust_store.path().to_path_buf()),
            trust_store_pass: Some("trust".into()),
            ..listener_stores(key_store.path())
        };

        let config = ssl_config_for_listener(stores, &[Parameter::new(SSL_VERIFY_CLIENT, "true")]).unwrap();

        assert_eq!(config.trust_store(), Some(trust_store.path()));
        assert_eq!(config.trust_store_pass(), Some("trust"));
        assert!(config.need_client_auth());
        assert!(config.is_mutual());
    }

    #[test]
    fn listener_trust_store_pass_without_file_is_dropped() {
        let key_store = store_file();
        let stores = StoreCredentials { trust_store_pass: Some("trust".into()), ..listener_stores(key_store.path()) };

        let config = ssl_config_for_listener(stores, &[]).unwrap();
        assert_eq!(config.trust_store_pass(), None);
    }

    #[test]
    fn listener_parameters() {
        init_tracing();
        let key_store = store_file();
        let parameters = [
            Parameter::new(SERVER_SUPPORT_CIPHERS, "TLS_AES_128_GCM_SHA256,TLS_CHACHA20_POLY1305_SHA256"),
            Parameter::new(SERVER_SUPPORT_HTTPS_PROTOCOLS, "TLSv1.2, TLSv1.3"),
            Parameter::new(SERVER_SUPPORTED_SNIMATCHERS, "www.example.com"),
            Parameter::new(SERVER_SUPPORTED_SERVER_NAMES, "example.com,api.example.com"),
            Parameter::new(SERVER_ENABLE_SESSION_CREATION, "false"),
            Parameter::new(SSL_VERIFY_CLIENT, "TRUE"),
        ];

        let config = ssl_config_for_listener(listener_stores(key_store.path()), &parameters).unwrap();

        assert_eq!(config.cipher_suites(), ["TLS_AES_128_GCM_SHA256", "TLS_CHACHA20_POLY1305_SHA256"]);
        assert_eq!(config.enabled_protocols(), ["TLSv1.2", "TLSv1.3"]);
        assert_eq!(config.sni_matchers(), ["www.example.com"]);
        assert_eq!(config.server_names(), ["example.com", "api.example.com"]);
        assert!(!config.enable_session_creation());
        assert!(config.need_client_auth());
    }

    #[test]
    fn padded_boolean_parameters_read_as_false() {
        let key_store = store_file();
        let parameters = [
            Parameter::new(SSL_VERIFY_CLIENT, " true"),
            Parameter::new(SERVER_ENABLE_SESSION_CREATION, "true "),
        ];

        let config = ssl_config_for_listener(listener_stores(key_store.path()), &parameters).unwrap();

        assert!(!config.need_client_auth());
        assert!(!config.enable_session_creation());
    }

    #[test]
    fn last_recognized_write_wins() {
        let key_store = store_file();
        let parameters = [
            Parameter::new(SERVER_SUPPORT_HTTPS_PROTOCOLS, "TLSv1.1"),
            Parameter::new(SSL_VERIFY_CLIENT, "true"),
            Parameter::new(SERVER_SUPPORT_HTTPS_PROTOCOLS, "TLSv1.3"),
            Parameter::new(SSL_VERIFY_CLIENT, "false"),
        ];

        let config = ssl_config_for_listener(listener_stores(key_store.path()), &parameters).unwrap();

        assert_eq!(config.enabled_protocols(), ["TLSv1.3"]);
        assert!(!config.need_client_auth());
    }

    #[test]
    fn unrecognized_parameters_change_nothing() {
        init_tracing();
        let key_store = store_file();
        let baseline = ssl_config_for_listener(listener_stores(key_store.path()), &[]).unwrap();

        let parameters = [
            Parameter::new("FOO", "bar"),
            Parameter::new(CLIENT_SUPPORT_CIPHERS, "TLS_AES_128_GCM_SHA256"),
            Parameter::new(CLIENT_ENABLE_SESSION_CREATION, "false"),
        ];
        let config = ssl_config_for_listener(listener_stores(key_store.path()), &parameters).unwrap();

        assert_eq!(config, baseline);
    }

    #[test]
    fn sender_minimal() {
        let trust_store = store_file();

        let config = ssl_config_for_sender(sender_stores(trust_store.path()), &[]).unwrap();

        assert_eq!(config.role(), EndpointRole::Sender);
        assert!(config.client_mode());
        assert_eq!(config.trust_store(), Some(trust_store.path()));
        assert_eq!(config.trust_store_pass(), Some("trust"));
        assert_eq!(config.key_store(), None);
        assert_eq!(config.key_store_pass(), None);
        assert_eq!(config.cert_pass(), None);
        assert!(config.enable_session_creation());
    }

    #[test]
    fn sender_without_key_store_drops_identity_passwords() {
        let trust_store = store_file();
        let stores = StoreCredentials {
            key_store_pass: Some("ks".into()),
            cert_pass: Some("cert".into()),
            ..sender_stores(trust_store.path())
        };

        let config = ssl_config_for_sender(stores, &[]).unwrap();
        assert_eq!(config.key_store_pass(), None);
        assert_eq!(config.cert_pass(), None);
    }

    #[test]
    fn sender_requires_trust_store_even_with_key_store() {
        let key_store = store_file();
        let stores = StoreCredentials {
            cert_pass: Some("cert".into()),
            trust_store_pass: Some("trust".into()),
            ..listener_stores(key_store.path())
        };
        assert_eq!(ssl_config_for_sender(stores, &[]).unwrap_err(), ConfigError::MissingTrustStore);

        let trust_store = store_file();
        let stores = StoreCredentials { trust_store_pass: None, ..sender_stores(trust_store.path()) };
        assert_eq!(ssl_config_for_sender(stores, &[]).unwrap_err(), ConfigError::MissingTrustStore);
    }

    #[test]
    fn sender_trust_store_must_exist() {
        let path = missing_path();
        let err = ssl_config_for_sender(sender_stores(&path), &[]).unwrap_err();
        assert_eq!(err, ConfigError::trust_store_not_found(&path));
    }

    #[test]
    fn sender_key_store_checked_before_trust_store() {
        let key_path = missing_path();
        let stores = StoreCredentials {
            key_store_file: Some(key_path.clone()),
            key_store_pass: Some("ks".into()),
            ..sender_stores(&missing_path())
        };

        assert_eq!(ssl_config_for_sender(stores, &[]).unwrap_err(), ConfigError::key_store_not_found(&key_path));
    }

    #[test]
    fn sender_with_client_certificate() {
        let key_store = store_file();
        let trust_store = store_file();
        let stores = StoreCredentials {
            key_store_file: Some(key_store.path().to_path_buf()),
            key_store_pass: Some("ks".into()),
            ..sender_stores(trust_store.path())
        };

        let config = ssl_config_for_sender(stores, &[]).unwrap();

        assert_eq!(config.key_store(), Some(key_store.path()));
        assert_eq!(config.key_store_pass(), Some("ks"));
        assert_eq!(config.cert_pass(), Some("ks"));
        assert!(config.client_mode());
        assert!(config.is_mutual());
    }

    #[test]
    fn sender_parameters() {
        init_tracing();
        let trust_store = store_file();
        let parameters = [
            Parameter::new(CLIENT_SUPPORT_CIPHERS, "TLS_AES_256_GCM_SHA384"),
            Parameter::new(CLIENT_SUPPORT_HTTPS_PROTOCOLS, "TLSv1.3"),
            Parameter::new(CLIENT_ENABLE_SESSION_CREATION, "false"),
            Parameter::new(SSL_VERIFY_CLIENT, "true"),
            Parameter::new(SERVER_SUPPORTED_SERVER_NAMES, "example.com"),
        ];

        let config = ssl_config_for_sender(sender_stores(trust_store.path()), &parameters).unwrap();

        assert_eq!(config.cipher_suites(), ["TLS_AES_256_GCM_SHA384"]);
        assert_eq!(config.enabled_protocols(), ["TLSv1.3"]);
        assert!(!config.enable_session_creation());
        assert!(!config.need_client_auth());
        assert!(config.server_names().is_empty());
    }

    #[test]
    fn credentials_from_json() {
        let key_store = store_file();
        let json = formatdoc! {r#"
            {{
                "keyStoreFile": {key_store:?},
                "keyStorePass": "changeit",
                "parameters": [
                    {{ "name": "SERVER_SUPPORT_HTTPS_PROTOCOLS", "value": "TLSv1.2" }},
                    {{ "name": "FOO", "value": "bar" }}
                ]
            }}
            "#,
            key_store = key_store.path().to_str().unwrap()
        };

        #[derive(Deserialize)]
        struct ListenerSection {
            #[serde(flatten)]
            stores: StoreCredentials,
            parameters: Vec<Parameter>,
        }

        let section: ListenerSection = serde_json::from_str(&json).unwrap();
        assert_eq!(section.stores.cert_pass, None);
        assert_eq!(section.stores.trust_store_file, None);

        let config = ssl_config_for_listener(section.stores, &section.parameters).unwrap();
        assert_eq!(config.cert_pass(), Some("changeit"));
        assert_eq!(config.enabled_protocols(), ["TLSv1.2"]);
    }

    #[test]
    fn debug_output_hides_passwords() {
        let key_store = store_file();
        let stores = listener_stores(key_store.path());
        assert!(!format!("{stores:?}").contains("changeit"));

        let config = ssl_config_for_listener(stores, &[]).unwrap();
        assert!(!format!("{config:?}").contains("changeit"));
    }
}
