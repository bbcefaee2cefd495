//! Shared-secret write gate.

use crate::{AuthError, Result};

/// Checks a write request's `X-Token` header value against the loaded
/// secret.
///
/// An empty server-side secret is a deployment fault; a missing or
/// mismatched header rejects the request as unauthorized. The comparison
/// is an exact string match.
pub fn verify_shared_secret(provided: Option<&str>, secret: &str) -> Result<()> {
    if secret.is_empty() {
        return Err(AuthError::MissingSecret);
    }

    match provided {
        Some(value) if value == secret => Ok(()),
        Some(_) => Err(AuthError::InvalidCredential("invalid X-Token".to_string())),
        None => Err(AuthError::InvalidCredential("missing X-Token header".to_string())),
    }
}
