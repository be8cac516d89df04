//! Handler for the link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Response,
};
use validator::Validate;

use crate::api::dto::location::LocationResponse;
use crate::api::dto::shorten::ShortenRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Maps a long URL to a short code.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/foo/bar" }
/// ```
///
/// # Response
///
/// ```json
/// { "Location": "/urls/aB3xY9" }
/// ```
///
/// - **201 Created** - a new short code was allocated
/// - **303 See Other** - the URL was already mapped; the existing code is returned
///
/// # Errors
///
/// Returns 400 Bad Request if `url` is missing or empty, or the body is not JSON.
/// Returns 500 Internal Server Error if the store is unavailable.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let long_url = payload.url.ok_or_else(AppError::missing_input)?;

    let allocation = state.mapping_service.allocate_or_find(&long_url).await?;

    let status = if allocation.is_new {
        StatusCode::CREATED
    } else {
        StatusCode::SEE_OTHER
    };

    Ok(LocationResponse::new(allocation.record.location()).with_status(status))
}
