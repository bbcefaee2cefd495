//! Token issuance endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::config::AuthMode;
use crate::error::ApiError;
use crate::AppState;

#[derive(Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// GET /api/token — hands the caller a write credential.
///
/// In shared-secret mode this returns the raw secret itself so the demo
/// frontend can store it; the endpoint is unauthenticated, so anyone who
/// can reach it can write. In jwt mode each call mints a fresh one-hour
/// token instead.
#[tracing::instrument(skip(state))]
pub async fn issue(State(state): State<Arc<AppState>>) -> Result<Json<TokenResponse>, ApiError> {
    let secret = secrets::load(&state.config.secret_path)?;
    if secret.is_empty() {
        return Err(ApiError::Config("API token secret missing".to_string()));
    }

    let token = match state.config.auth_mode {
        AuthMode::SharedSecret => secret,
        AuthMode::Jwt => auth::mint(&secret, &state.config.env)?,
    };

    metrics::counter!("tokens_issued_total").increment(1);
    Ok(Json(TokenResponse { token }))
}
