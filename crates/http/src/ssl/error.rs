use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("keyStoreFile or keyStorePass not defined for HTTPS scheme")]
    MissingKeyStore,

    #[error("trustStoreFile or trustStorePass not defined for HTTPS scheme")]
    MissingTrustStore,

    #[error("trustStorePass is not defined for HTTPS scheme")]
    MissingTrustStorePass,

    #[error("key store file {} not found", .path.display())]
    KeyStoreNotFound { path: PathBuf },

    #[error("trust store file {} not found", .path.display())]
    TrustStoreNotFound { path: PathBuf },
}

impl ConfigError {
    pub fn key_store_not_found<P: AsRef<Path>>(path: P) -> Self {
        Self::KeyStoreNotFound { path: path.as_ref().to_path_buf() }
    }

    pub fn trust_store_not_found<P: AsRef<Path>>(path: P) -> Self {
        Self::TrustStoreNotFound { path: path.as_ref().to_path_buf() }
    }
}
