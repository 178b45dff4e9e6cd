use thiserror::Error;

use crate::protocol::PropertyKind;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PropertyError {
    #[error("property {key} holds a {found} value, expected {expected}")]
    TypeMismatch { key: String, expected: PropertyKind, found: PropertyKind },
}

impl PropertyError {
    pub fn type_mismatch<S: ToString>(key: S, expected: PropertyKind, found: PropertyKind) -> Self {
        Self::TypeMismatch { key: key.to_string(), expected, found }
    }
}
