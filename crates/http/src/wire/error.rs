use thiserror::Error;

use crate::protocol::PropertyError;

#[derive(Debug, Error)]
pub enum WireError {
    #[error("property error: {source}")]
    Property {
        #[from]
        source: PropertyError,
    },

    #[error("invalid http method: {method}")]
    InvalidMethod { method: String },

    #[error("invalid http version: {version}")]
    InvalidVersion { version: String },

    #[error("invalid http status code: {code}")]
    InvalidStatus { code: i64 },

    #[error("invalid request target: {target}")]
    InvalidUri { target: String },

    #[error("header cannot be put on the wire: {reason}")]
    InvalidHeader { reason: String },

    #[error("http error: {source}")]
    Http {
        #[from]
        source: http::Error,
    },
}

impl WireError {
    pub fn invalid_method<S: ToString>(method: S) -> Self {
        Self::InvalidMethod { method: method.to_string() }
    }

    pub fn invalid_version<S: ToString>(version: S) -> Self {
        Self::InvalidVersion { version: version.to_string() }
    }

    pub fn invalid_status(code: i64) -> Self {
        Self::InvalidStatus { code }
    }

    pub fn invalid_uri<S: ToString>(target: S) -> Self {
        Self::InvalidUri { target: target.to_string() }
    }

    pub fn invalid_header<S: ToString>(reason: S) -> Self {
        Self::InvalidHeader { reason: reason.to_string() }
    }
}
