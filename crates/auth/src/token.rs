//! Signed-token issuance and verification.
//!
//! Tokens are HS256 JWTs signed with the write-auth secret. Each mint
//! produces a fresh one-hour token bound to the current time; there is no
//! persistence, revocation, or refresh.

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{AuthError, Result};

/// Token lifetime in seconds.
pub const TOKEN_TTL_SECS: i64 = 3600;

/// Fixed demo identity carried in the `sub` claim.
pub const SUBJECT: &str = "demo";

/// Authorization scheme expected on write requests.
const BEARER_PREFIX: &str = "Bearer ";

/// Claim set carried by issued tokens.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (fixed demo identity).
    pub sub: String,
    /// Environment tag the token was minted in.
    pub env: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

/// Mints a fresh token signed with `secret`, valid for one hour.
pub fn mint(secret: &str, env: &str) -> Result<String> {
    if secret.is_empty() {
        return Err(AuthError::MissingSecret);
    }

    let iat = Utc::now().timestamp();
    let claims = Claims {
        sub: SUBJECT.to_string(),
        env: env.to_string(),
        iat,
        exp: iat + TOKEN_TTL_SECS,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(AuthError::Signing)
}

/// Verifies a raw token's signature and expiry against `secret`.
pub fn verify(token: &str, secret: &str) -> Result<Claims> {
    if secret.is_empty() {
        return Err(AuthError::MissingSecret);
    }

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| AuthError::InvalidCredential(e.to_string()))
}

/// Verifies the `Authorization` header of a write request.
///
/// The header must be present, carry the `Bearer` scheme, and wrap a
/// non-empty token that verifies against `secret`.
pub fn verify_bearer(header: Option<&str>, secret: &str) -> Result<Claims> {
    if secret.is_empty() {
        return Err(AuthError::MissingSecret);
    }

    let header = header
        .ok_or_else(|| AuthError::InvalidCredential("missing authorization header".to_string()))?;

    let token = header.strip_prefix(BEARER_PREFIX).ok_or_else(|| {
        AuthError::InvalidCredential("authorization scheme must be Bearer".to_string())
    })?;

    let token = token.trim();
    if token.is_empty() {
        return Err(AuthError::InvalidCredential("empty bearer token".to_string()));
    }

    verify(token, secret)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-signing-secret";

    #[test]
    fn mint_and_verify_roundtrip() {
        let token = mint(SECRET, "dev").unwrap();
        let claims = verify(&token, SECRET).unwrap();

        assert_eq!(claims.sub, SUBJECT);
        assert_eq!(claims.env, "dev");
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECS);

        let now = Utc::now().timestamp();
        assert!(claims.iat <= now + 5);
        assert!(claims.exp > now);
    }

    #[test]
    fn verify_rejects_wrong_secret() {
        let token = mint(SECRET, "dev").unwrap();
        let result = verify(&token, "some-other-secret");
        assert!(matches!(result, Err(AuthError::InvalidCredential(_))));
    }

    #[test]
    fn verify_rejects_expired_token() {
        // Validly signed, but expired beyond the default validation leeway.
        let iat = Utc::now().timestamp() - 2 * TOKEN_TTL_SECS;
        let claims = Claims {
            sub: SUBJECT.to_string(),
            env: "dev".to_string(),
            iat,
            exp: iat + TOKEN_TTL_SECS,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        let result = verify(&token, SECRET);
        assert!(matches!(result, Err(AuthError::InvalidCredential(_))));
    }

    #[test]
    fn verify_rejects_garbage_token() {
        let result = verify("not-a-jwt", SECRET);
        assert!(matches!(result, Err(AuthError::InvalidCredential(_))));
    }

    #[test]
    fn mint_requires_secret() {
        assert!(matches!(mint("", "dev"), Err(AuthError::MissingSecret)));
    }

    #[test]
    fn verify_bearer_accepts_fresh_token() {
        let token = mint(SECRET, "dev").unwrap();
        let header = format!("Bearer {token}");
        let claims = verify_bearer(Some(&header), SECRET).unwrap();
        assert_eq!(claims.sub, SUBJECT);
    }

    #[test]
    fn verify_bearer_rejects_missing_header() {
        let result = verify_bearer(None, SECRET);
        assert!(matches!(result, Err(AuthError::InvalidCredential(_))));
    }

    #[test]
    fn verify_bearer_rejects_wrong_scheme() {
        let token = mint(SECRET, "dev").unwrap();
        let result = verify_bearer(Some(&format!("Basic {token}")), SECRET);
        assert!(matches!(result, Err(AuthError::InvalidCredential(_))));
    }

    #[test]
    fn verify_bearer_rejects_empty_token() {
        let result = verify_bearer(Some("Bearer "), SECRET);
        assert!(matches!(result, Err(AuthError::InvalidCredential(_))));
    }

    #[test]
    fn verify_bearer_requires_secret() {
        let token = mint(SECRET, "dev").unwrap();
        let result = verify_bearer(Some(&format!("Bearer {token}")), "");
        assert!(matches!(result, Err(AuthError::MissingSecret)));
    }
}
