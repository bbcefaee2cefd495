//! Health check endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::ApiError;
use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub env: String,
    pub db: &'static str,
}

/// GET /api/health — reports liveness plus a trivial database check.
#[tracing::instrument(skip(state))]
pub async fn check(State(state): State<Arc<AppState>>) -> Result<Json<HealthResponse>, ApiError> {
    state.store.ping().await?;

    Ok(Json(HealthResponse {
        status: "ok",
        env: state.config.env.clone(),
        db: "ok",
    }))
}
