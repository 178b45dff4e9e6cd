//! Raw TLS parameters and the per-role parameter tables.
//!
//! A parameter is a `(name, value)` pair handed over by the configuration loader. Each
//! endpoint role recognizes a fixed set of names, mapped to a setter on
//! [`SslConfigBuilder`]. Names a role does not recognize are skipped.
//!
//! Value conventions:
//!
//! - list values (cipher suites, protocols, SNI matchers, server names) are comma
//!   separated; entries are trimmed and empty entries dropped
//! - boolean values are `true` when they equal `"true"` ignoring ASCII case, `false`
//!   otherwise

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::ssl::SslConfigBuilder;

pub const SERVER_SUPPORT_CIPHERS: &str = "SERVER_SUPPORT_CIPHERS";
pub const SERVER_SUPPORT_HTTPS_PROTOCOLS: &str = "SERVER_SUPPORT_HTTPS_PROTOCOLS";
pub const SERVER_SUPPORTED_SNIMATCHERS: &str = "SERVER_SUPPORTED_SNIMATCHERS";
pub const SERVER_SUPPORTED_SERVER_NAMES: &str = "SERVER_SUPPORTED_SERVER_NAMES";
pub const SERVER_ENABLE_SESSION_CREATION: &str = "SERVER_ENABLE_SESSION_CREATION";
pub const SSL_VERIFY_CLIENT: &str = "SSL_VERIFY_CLIENT";

pub const CLIENT_SUPPORT_CIPHERS: &str = "CLIENT_SUPPORT_CIPHERS";
pub const CLIENT_SUPPORT_HTTPS_PROTOCOLS: &str = "CLIENT_SUPPORT_HTTPS_PROTOCOLS";
pub const CLIENT_ENABLE_SESSION_CREATION: &str = "CLIENT_ENABLE_SESSION_CREATION";

/// A raw `(name, value)` configuration entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parameter {
    name: String,
    value: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// The side of a connection a TLS configuration is built for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EndpointRole {
    /// Accepts inbound connections.
    Listener,
    /// Initiates outbound connections.
    Sender,
}

impl fmt::Display for EndpointRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndpointRole::Listener => f.write_str("listener"),
            EndpointRole::Sender => f.write_str("sender"),
        }
    }
}

pub(crate) type Setter = fn(SslConfigBuilder, &str) -> SslConfigBuilder;

static LISTENER_PARAMETERS: Lazy<HashMap<&'static str, Setter>> = Lazy::new(|| {
    let table: [(&'static str, Setter); 6] = [
        (SERVER_SUPPORT_CIPHERS, |b, v| b.cipher_suites(parse_list(v))),
        (SERVER_SUPPORT_HTTPS_PROTOCOLS, |b, v| b.enabled_protocols(parse_list(v))),
        (SERVER_SUPPORTED_SNIMATCHERS, |b, v| b.sni_matchers(parse_list(v))),
        (SERVER_SUPPORTED_SERVER_NAMES, |b, v| b.server_names(parse_list(v))),
        (SERVER_ENABLE_SESSION_CREATION, |b, v| b.enable_session_creation(parse_bool(v))),
        (SSL_VERIFY_CLIENT, |b, v| b.need_client_auth(parse_bool(v))),
    ];
    HashMap::from(table)
});

static SENDER_PARAMETERS: Lazy<HashMap<&'static str, Setter>> = Lazy::new(|| {
    let table: [(&'static str, Setter); 3] = [
        (CLIENT_SUPPORT_CIPHERS, |b, v| b.cipher_suites(parse_list(v))),
        (CLIENT_SUPPORT_HTTPS_PROTOCOLS, |b, v| b.enabled_protocols(parse_list(v))),
        (CLIENT_ENABLE_SESSION_CREATION, |b, v| b.enable_session_creation(parse_bool(v))),
    ];
    HashMap::from(table)
});

impl EndpointRole {
    fn parameters(self) -> &'static HashMap<&'static str, Setter> {
        match self {
            EndpointRole::Listener => &LISTENER_PARAMETERS,
            EndpointRole::Sender => &SENDER_PARAMETERS,
        }
    }

    pub(crate) fn setter(self, name: &str) -> Option<Setter> {
        self.parameters().get(name).copied()
    }

    /// Returns true if `name` configures something for this role.
    pub fn recognizes(self, name: &str) -> bool {
        self.parameters().contains_key(name)
    }

    /// The client mode flag of configurations built for this role.
    pub fn is_client(self) -> bool {
        matches!(self, EndpointRole::Sender)
    }
}

pub(crate) fn parse_list(value: &str) -> Vec<String> {
    value.split(',').map(str::trim).filter(|item| !item.is_empty()).map(str::to_owned).collect()
}

pub(crate) fn parse_bool(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}
