//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorten`            - Allocate a short code
//! - `GET  /urls/{code}`        - Redirect (counts a hit)
//! - `GET  /urls/{code}/stats`  - Hit statistics
//! - `GET  /health`             - Store connectivity
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes, state and tracing attached.
pub fn api_router(state: AppState) -> Router {
    api::routes::routes()
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service served by the binary.
///
/// Same as [`api_router`], with trailing slashes trimmed before routing so
/// `/urls/aB3xY9/` resolves like `/urls/aB3xY9`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(api_router(state))
}
