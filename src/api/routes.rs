//! API route configuration.

use crate::api::handlers::{
    fallback_handler, health_handler, redirect_handler, shorten_handler, stats_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Mapping endpoints plus the health check.
///
/// # Endpoints
///
/// - `POST /shorten`             - Allocate (or look up) a short code
/// - `GET  /urls/{code}`         - Redirect and count the visit
/// - `GET  /urls/{code}/stats`   - Visit statistics
/// - `GET  /health`              - Store connectivity check
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/urls/{code}", get(redirect_handler))
        .route("/urls/{code}/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .fallback(fallback_handler)
}
