//! The full application router: health, JSON API, HTML pages and assets.
//!
//! # Route Structure
//!
//! - `GET  /health`       - Health check: store connectivity
//! - `/api/*`             - JSON API
//! - `/`, `/document/*`, `/edit/*`, `/search` - HTML pages
//! - `/static/*`          - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// The router served by [`crate::server::run`], with trailing slashes trimmed
/// before routing so `/search/` and `/search` hit the same handler.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// All routes with tracing, before trailing-slash normalization.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .merge(web::routes::routes())
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer())
}
