//! Item list and create endpoints.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::Json;
use common::Item;
use serde::Deserialize;

use crate::config::AuthMode;
use crate::error::ApiError;
use crate::AppState;

#[derive(Deserialize)]
pub struct CreateItemRequest {
    #[serde(default)]
    pub name: Option<String>,
}

/// GET /api/items — all items, newest first.
#[tracing::instrument(skip(state))]
pub async fn list(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Item>>, ApiError> {
    let items = state.store.list_items().await?;
    metrics::counter!("items_listed_total").increment(1);
    Ok(Json(items))
}

/// POST /api/items — create an item after the write gate passes.
#[tracing::instrument(skip(state, headers, req))]
pub async fn create(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<CreateItemRequest>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    authorize_write(&state, &headers)?;

    let name = req.name.as_deref().unwrap_or("").trim();
    if name.is_empty() {
        return Err(ApiError::BadRequest("name required".to_string()));
    }

    let id = state.store.insert_item(name).await?;
    metrics::counter!("items_created_total").increment(1);

    Ok((
        StatusCode::CREATED,
        Json(Item {
            id,
            name: name.to_string(),
        }),
    ))
}

/// Runs the configured write gate against the request headers.
///
/// The secret is read from disk on every request so a rotated secret
/// takes effect without a restart.
fn authorize_write(state: &AppState, headers: &HeaderMap) -> Result<(), ApiError> {
    let secret = secrets::load(&state.config.secret_path)?;

    match state.config.auth_mode {
        AuthMode::SharedSecret => {
            let provided = headers.get("x-token").and_then(|v| v.to_str().ok());
            auth::verify_shared_secret(provided, &secret)?;
        }
        AuthMode::Jwt => {
            let bearer = headers
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok());
            auth::verify_bearer(bearer, &secret)?;
        }
    }

    Ok(())
}
