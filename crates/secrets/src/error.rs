use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading a secret from disk.
#[derive(Debug, Error)]
pub enum SecretError {
    /// The secret file exists but could not be read.
    #[error("failed to read secret at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for secret loading operations.
pub type Result<T> = std::result::Result<T, SecretError>;
