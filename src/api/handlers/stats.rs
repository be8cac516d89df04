//! Handler for short code statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns visit statistics for a short code without counting a visit.
///
/// # Endpoint
///
/// `GET /urls/{code}/stats`
///
/// # Response
///
/// ```json
/// {
///   "hits": 3,
///   "url": "https://example.com/foo/bar",
///   "created_on": "2024-01-15T10:30:00.123456Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let record = state.mapping_service.stats(&code).await?;

    Ok(Json(record.into()))
}
