//! File-based secret loading.
//!
//! Secrets are mounted as plain files (e.g. under `/run/secrets`) and read
//! fresh on every call so a rotated secret takes effect without a restart.

pub mod error;

use std::fs;
use std::io;
use std::path::Path;

pub use error::{Result, SecretError};

/// Loads the secret stored at `path`, trimmed of surrounding whitespace.
///
/// An absent file is not an error: it yields an empty string, and callers
/// decide whether an empty secret is fatal. Any other I/O failure is
/// surfaced as [`SecretError::Io`].
pub fn load(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(contents) => Ok(contents.trim().to_string()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "secret file not found");
            Ok(String::new())
        }
        Err(source) => Err(SecretError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Returns whether the secret at `path` loaded to a non-empty value.
pub fn is_loaded(path: impl AsRef<Path>) -> Result<bool> {
    Ok(!load(path)?.is_empty())
}
