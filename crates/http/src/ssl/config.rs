//! Validated TLS configuration and its builder.
//!
//! [`SslConfigBuilder`] accumulates identity material, trust material and negotiation
//! options, then validates everything once in [`SslConfigBuilder::build`]. Validation
//! follows the role of the endpoint:
//!
//! - a listener must carry a key store and its password; a trust store is optional and
//!   turns on mutual TLS, in which case its password is mandatory
//! - a sender must carry a trust store and its password; a key store is optional and
//!   turns on client authentication. Without a key store no identity material is kept
//!
//! In both roles every store file must exist when the configuration is built, and the
//! certificate password falls back to the key store password.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, error, trace};

use crate::ensure;
use crate::ssl::parameter::{EndpointRole, Parameter};
use crate::ssl::ConfigError;

/// Immutable TLS configuration of one endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct SslConfig {
    role: EndpointRole,
    key_store: Option<PathBuf>,
    key_store_pass: Option<String>,
    cert_pass: Option<String>,
    trust_store: Option<PathBuf>,
    trust_store_pass: Option<String>,
    cipher_suites: Vec<String>,
    enabled_protocols: Vec<String>,
    sni_matchers: Vec<String>,
    server_names: Vec<String>,
    enable_session_creation: bool,
    need_client_auth: bool,
    client_mode: bool,
}

impl SslConfig {
    pub fn builder(role: EndpointRole) -> SslConfigBuilder {
        SslConfigBuilder::new(role)
    }

    pub fn role(&self) -> EndpointRole {
        self.role
    }

    pub fn key_store(&self) -> Option<&Path> {
        self.key_store.as_deref()
    }

    pub fn key_store_pass(&self) -> Option<&str> {
        self.key_store_pass.as_deref()
    }

    pub fn cert_pass(&self) -> Option<&str> {
        self.cert_pass.as_deref()
    }

    pub fn trust_store(&self) -> Option<&Path> {
        self.trust_store.as_deref()
    }

    pub fn trust_store_pass(&self) -> Option<&str> {
        self.trust_store_pass.as_deref()
    }

    /// Cipher suites to enable; empty means the engine defaults.
    pub fn cipher_suites(&self) -> &[String] {
        &self.cipher_suites
    }

    /// Protocol versions to enable; empty means the engine defaults.
    pub fn enabled_protocols(&self) -> &[String] {
        &self.enabled_protocols
    }

    pub fn sni_matchers(&self) -> &[String] {
        &self.sni_matchers
    }

    pub fn server_names(&self) -> &[String] {
        &self.server_names
    }

    pub fn enable_session_creation(&self) -> bool {
        self.enable_session_creation
    }

    /// Whether a listener requires clients to present a certificate.
    pub fn need_client_auth(&self) -> bool {
        self.need_client_auth
    }

    pub fn client_mode(&self) -> bool {
        self.client_mode
    }

    /// Whether both peers present certificates.
    pub fn is_mutual(&self) -> bool {
        self.key_store.is_some() && self.trust_store.is_some()
    }
}

/// Passwords never end up in logs.
impl fmt::Debug for SslConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SslConfig")
            .field("role", &self.role)
            .field("key_store", &self.key_store)
            .field("key_store_pass", &redact(self.key_store_pass.as_deref()))
            .field("cert_pass", &redact(self.cert_pass.as_deref()))
            .field("trust_store", &self.trust_store)
            .field("trust_store_pass", &redact(self.trust_store_pass.as_deref()))
            .field("cipher_suites", &self.cipher_suites)
            .field("enabled_protocols", &self.enabled_protocols)
            .field("sni_matchers", &self.sni_matchers)
            .field("server_names", &self.server_names)
            .field("enable_session_creation", &self.enable_session_creation)
            .field("need_client_auth", &self.need_client_auth)
            .field("client_mode", &self.client_mode)
            .finish()
    }
}

fn redact(secret: Option<&str>) -> Option<&'static str> {
    secret.map(|_| "***")
}

/// Accumulates the fields of an [`SslConfig`].
///
/// SNI matchers, server names and client-auth only apply to listeners; a sender build
/// drops them.
#[derive(Clone)]
pub struct SslConfigBuilder {
    role: EndpointRole,
    key_store: Option<PathBuf>,
    key_store_pass: Option<String>,
    cert_pass: Option<String>,
    trust_store: Option<PathBuf>,
    trust_store_pass: Option<String>,
    cipher_suites: Vec<String>,
    enabled_protocols: Vec<String>,
    sni_matchers: Vec<String>,
    server_names: Vec<String>,
    enable_session_creation: bool,
    need_client_auth: bool,
}

impl fmt::Debug for SslConfigBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SslConfigBuilder")
            .field("role", &self.role)
            .field("key_store", &self.key_store)
            .field("trust_store", &self.trust_store)
            .finish_non_exhaustive()
    }
}

impl SslConfigBuilder {
    fn new(role: EndpointRole) -> Self {
        Self {
            role,
            key_store: None,
            key_store_pass: None,
            cert_pass: None,
            trust_store: None,
            trust_store_pass: None,
            cipher_suites: Vec::new(),
            enabled_protocols: Vec::new(),
            sni_matchers: Vec::new(),
            server_names: Vec::new(),
            enable_session_creation: true,
            need_client_auth: false,
        }
    }

    pub fn key_store(mut self, path: Option<PathBuf>) -> Self {
        self.key_store = path;
        self
    }

    pub fn key_store_pass(mut self, pass: Option<String>) -> Self {
        self.key_store_pass = pass;
        self
    }

    /// Password of the private key entry; defaults to the key store password.
    pub fn cert_pass(mut self, pass: Option<String>) -> Self {
        self.cert_pass = pass;
        self
    }

    pub fn trust_store(mut self, path: Option<PathBuf>) -> Self {
        self.trust_store = path;
        self
    }

    pub fn trust_store_pass(mut self, pass: Option<String>) -> Self {
        self.trust_store_pass = pass;
        self
    }

    pub fn cipher_suites(mut self, cipher_suites: Vec<String>) -> Self {
        self.cipher_suites = cipher_suites;
        self
    }

    pub fn enabled_protocols(mut self, protocols: Vec<String>) -> Self {
        self.enabled_protocols = protocols;
        self
    }

    pub fn sni_matchers(mut self, matchers: Vec<String>) -> Self {
        self.sni_matchers = matchers;
        self
    }

    pub fn server_names(mut self, server_names: Vec<String>) -> Self {
        self.server_names = server_names;
        self
    }

    pub fn enable_session_creation(mut self, enable: bool) -> Self {
        self.enable_session_creation = enable;
        self
    }

    pub fn need_client_auth(mut self, need: bool) -> Self {
        self.need_client_auth = need;
        self
    }

    /// Applies `parameters` in order through the setter table of the builder's role.
    ///
    /// Unrecognized names are skipped. When a name repeats, the last value wins.
    pub fn parameters(self, parameters: &[Parameter]) -> Self {
        let role = self.role;
        parameters.iter().fold(self, |builder, parameter| match role.setter(parameter.name()) {
            Some(set) => {
                trace!(%role, name = parameter.name(), value = parameter.value(), "apply ssl parameter");
                set(builder, parameter.value())
            }
            None => {
                debug!(%role, name = parameter.name(), "ignore unrecognized ssl parameter");
                builder
            }
        })
    }

    /// Validates the accumulated fields and freezes them into an [`SslConfig`].
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when mandatory credentials of the role are missing or a
    /// referenced store file does not exist.
    pub fn build(self) -> Result<SslConfig, ConfigError> {
        let role = self.role;
        let result = match role {
            EndpointRole::Listener => self.build_listener(),
            EndpointRole::Sender => self.build_sender(),
        };

        match &result {
            Ok(config) => debug!(
                %role,
                key_store = ?config.key_store,
                trust_store = ?config.trust_store,
                need_client_auth = config.need_client_auth,
                "ssl config built"
            ),
            Err(e) => error!(%role, cause = %e, "invalid ssl config"),
        }
        result
    }

    fn build_listener(mut self) -> Result<SslConfig, ConfigError> {
        let cert_pass = self.default_cert_pass();

        let (Some(key_store), Some(key_store_pass)) =
            (present(self.key_store.take()), present(self.key_store_pass.take()))
        else {
            return Err(ConfigError::MissingKeyStore);
        };
        ensure!(key_store.is_file(), ConfigError::key_store_not_found(&key_store));

        let (trust_store, trust_store_pass) = match present(self.trust_store.take()) {
            Some(trust_store) => {
                let Some(trust_store_pass) = present(self.trust_store_pass.take()) else {
                    return Err(ConfigError::MissingTrustStorePass);
                };
                ensure!(trust_store.is_file(), ConfigError::trust_store_not_found(&trust_store));
                (Some(trust_store), Some(trust_store_pass))
            }
            None => (None, None),
        };

        Ok(self.finish(Some(key_store), Some(key_store_pass), cert_pass, trust_store, trust_store_pass))
    }

    fn build_sender(mut self) -> Result<SslConfig, ConfigError> {
        let cert_pass = self.default_cert_pass();
        self.drop_listener_fields();

        let (Some(trust_store), Some(trust_store_pass)) =
            (present(self.trust_store.take()), present(self.trust_store_pass.take()))
        else {
            return Err(ConfigError::MissingTrustStore);
        };

        let (key_store, key_store_pass, cert_pass) = match present(self.key_store.take()) {
            Some(key_store) => {
                ensure!(key_store.is_file(), ConfigError::key_store_not_found(&key_store));
                (Some(key_store), present(self.key_store_pass.take()), cert_pass)
            }
            None => (None, None, None),
        };

        ensure!(trust_store.is_file(), ConfigError::trust_store_not_found(&trust_store));

        Ok(self.finish(key_store, key_store_pass, cert_pass, Some(trust_store), Some(trust_store_pass)))
    }

    fn default_cert_pass(&mut self) -> Option<String> {
        present(self.cert_pass.take()).or_else(|| present(self.key_store_pass.clone()))
    }

    fn drop_listener_fields(&mut self) {
        if !self.sni_matchers.is_empty() || !self.server_names.is_empty() || self.need_client_auth {
            debug!(role = %self.role, "ignoring listener-only ssl settings");
        }
        self.sni_matchers.clear();
        self.server_names.clear();
        self.need_client_auth = false;
    }

    fn finish(
        self,
        key_store: Option<PathBuf>,
        key_store_pass: Option<String>,
        cert_pass: Option<String>,
        trust_store: Option<PathBuf>,
        trust_store_pass: Option<String>,
    ) -> SslConfig {
        SslConfig {
            role: self.role,
            key_store,
            key_store_pass,
            cert_pass,
            trust_store,
            trust_store_pass,
            cipher_suites: self.cipher_suites,
            enabled_protocols: self.enabled_protocols,
            sni_matchers: self.sni_matchers,
            server_names: self.server_names,
            enable_session_creation: self.enable_session_creation,
            need_client_auth: self.need_client_auth,
            client_mode: self.role.is_client(),
        }
    }
}

/// Treats empty values like absent ones.
fn present<T: AsRef<std::ffi::OsStr>>(value: Option<T>) -> Option<T> {
    value.filter(|v| !v.as_ref().is_empty())
}
