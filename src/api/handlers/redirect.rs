//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Response,
};
use tracing::debug;

use crate::api::dto::location::LocationResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL and counts the visit.
///
/// # Endpoint
///
/// `GET /urls/{code}`
///
/// # Response
///
/// 307 Temporary Redirect with the target both in the `Location` header and
/// in the body:
///
/// ```json
/// { "Location": "https://example.com/foo/bar" }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 500 Internal Server Error if the store is unavailable.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let record = state.mapping_service.resolve(&code).await?;

    debug!("Redirecting {} -> {}", code, record.long_url);

    Ok(LocationResponse::new(record.long_url).redirect())
}
