//! Catch-all for unknown routes.

use crate::error::AppError;

/// Answers any unmatched route with the JSON 404 body.
pub async fn fallback_handler() -> AppError {
    AppError::not_found()
}
