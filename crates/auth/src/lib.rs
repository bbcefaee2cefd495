//! Write-auth gate for the item demo service.
//!
//! Two mutually exclusive variants, selected by server configuration:
//! an exact shared-secret header match, or HS256 JWT verification keyed
//! by the same secret. The gate is request-scoped pass/fail; no state
//! survives between requests.

pub mod error;
pub mod shared;
pub mod token;

pub use error::{AuthError, Result};
pub use shared::verify_shared_secret;
pub use token::{mint, verify, verify_bearer, Claims, SUBJECT, TOKEN_TTL_SECS};
