//! Application error type and its HTTP representation.
//!
//! Every failure leaves the service as a JSON object with two keys:
//!
//! ```json
//! { "Error": "Short URL not found", "Message": "The short URL was not found ..." }
//! ```
//!
//! `Error` is a short, stable tag per error kind; `Message` is human readable.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use validator::ValidationErrors;

/// Serialized error body.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorInfo {
    #[serde(rename = "Error")]
    pub error: String,
    #[serde(rename = "Message")]
    pub message: String,
}

/// Errors surfaced by the mapping service and the HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request carried no usable `url`.
    #[error("{message}")]
    MissingInput { message: String },

    /// The request body could not be parsed as the expected JSON document.
    #[error("{message}")]
    MalformedBody { message: String },

    /// No mapping exists for the requested short code.
    #[error("{message}")]
    NotFound { message: String },

    /// The store could not be reached or the statement failed.
    #[error("{message}")]
    StoreUnavailable {
        message: String,
        #[source]
        source: Option<sqlx::Error>,
    },

    /// Short code allocation exhausted its attempt budget.
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn missing_input() -> Self {
        Self::MissingInput {
            message: "URL is required, please make sure there is an element called 'url' in the JSON you're passing".to_string(),
        }
    }

    pub fn malformed_body(message: impl Into<String>) -> Self {
        Self::MalformedBody {
            message: message.into(),
        }
    }

    pub fn not_found() -> Self {
        Self::NotFound {
            message: "The short URL was not found in the database, please check if it's correct"
                .to_string(),
        }
    }

    pub fn store_unavailable(source: Option<sqlx::Error>) -> Self {
        Self::StoreUnavailable {
            message: "Sorry, there was a problem connecting to the database. Please ensure that the database is available and try again.".to_string(),
            source,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingInput { .. } | AppError::MalformedBody { .. } => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::StoreUnavailable { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn tag(&self) -> &'static str {
        match self {
            AppError::MissingInput { .. } => "No URL found",
            AppError::MalformedBody { .. } => "Malformed request body",
            AppError::NotFound { .. } => "Short URL not found",
            AppError::StoreUnavailable { .. } => "A database connection error occurred",
            AppError::Internal { .. } => "Internal server error",
        }
    }

    /// Converts the error into its serializable `{ Error, Message }` form.
    pub fn to_error_info(&self) -> ErrorInfo {
        ErrorInfo {
            error: self.tag().to_string(),
            message: self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(self.to_error_info())).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = %e, "Store operation failed");
        AppError::store_unavailable(Some(e))
    }
}

impl From<ValidationErrors> for AppError {
    fn from(e: ValidationErrors) -> Self {
        tracing::debug!(errors = %e, "Request validation failed");
        AppError::missing_input()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::malformed_body(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_maps_to_bad_request() {
        let err = AppError::missing_input();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let info = err.to_error_info();
        assert_eq!(info.error, "No URL found");
        assert!(info.message.contains("'url'"));
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err = AppError::not_found();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_error_info().error, "Short URL not found");
    }

    #[test]
    fn test_sqlx_error_becomes_store_unavailable() {
        let err: AppError = sqlx::Error::PoolTimedOut.into();

        assert!(matches!(err, AppError::StoreUnavailable { .. }));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.to_error_info().error,
            "A database connection error occurred"
        );
    }

    #[test]
    fn test_error_info_uses_capitalised_keys() {
        let body = serde_json::to_value(AppError::not_found().to_error_info()).unwrap();

        assert!(body.get("Error").is_some());
        assert!(body.get("Message").is_some());
        assert_eq!(body.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_internal_keeps_message() {
        let err = AppError::internal("Failed to generate unique code");
        assert_eq!(err.to_string(), "Failed to generate unique code");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
