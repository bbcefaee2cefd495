use thiserror::Error;

/// Errors produced by the write-auth gate.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The server-side secret is absent or empty. This is a deployment
    /// fault, distinct from a client presenting a bad credential.
    #[error("write-auth secret is missing or empty")]
    MissingSecret,

    /// The client's credential was missing, malformed, or failed
    /// verification.
    #[error("invalid credential: {0}")]
    InvalidCredential(String),

    /// Token signing failed.
    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

/// Result type for auth gate operations.
pub type Result<T> = std::result::Result<T, AuthError>;
