//! Config inspection endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::ApiError;
use crate::AppState;

#[derive(Serialize)]
pub struct ConfigResponse {
    pub env: String,
    pub log_level: String,
    /// Present only when a database-password secret path is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_password_loaded: Option<bool>,
}

/// GET /api/config — non-sensitive configuration for the frontend.
#[tracing::instrument(skip(state))]
pub async fn show(State(state): State<Arc<AppState>>) -> Result<Json<ConfigResponse>, ApiError> {
    let db_password_loaded = match &state.config.db_password_secret_path {
        Some(path) => Some(secrets::is_loaded(path)?),
        None => None,
    };

    Ok(Json(ConfigResponse {
        env: state.config.env.clone(),
        log_level: state.config.log_level.clone(),
        db_password_loaded,
    }))
}
