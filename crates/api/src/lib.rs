//! HTTP API server for the item demo service.
//!
//! Routes health, config, token-issuance and item endpoints to the
//! secret loader, auth gate and SQLite store, with structured logging
//! (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::http::{header, HeaderName, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use item_store::SqliteItemStore;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;

/// Shared application state accessible from all handlers.
///
/// Configuration is resolved once at startup; the store wraps the one
/// shared connection pool.
pub struct AppState {
    pub config: Config,
    pub store: SqliteItemStore,
}

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let cors = cors_layer(&state.config);

    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::render))
        .with_state(metrics_handle);

    Router::new()
        .route("/api/health", get(routes::health::check))
        .route("/api/items", get(routes::items::list))
        .route("/api/items", post(routes::items::create))
        .route("/api/config", get(routes::config::show))
        .route("/api/token", get(routes::token::issue))
        .with_state(state)
        .merge(metrics_router)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Builds the CORS layer from the configured origin list.
///
/// An empty list yields a layer that emits no CORS headers at all.
/// With explicit origins, credentials are allowed, so methods and
/// headers must be explicit lists rather than wildcards.
fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_origins.is_empty() {
        return CorsLayer::new();
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-token"),
        ])
}
