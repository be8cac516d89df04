//! `{"Location": ...}` response body shared by shorten and redirect.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LocationResponse {
    #[serde(rename = "Location")]
    pub location: String,
}

impl LocationResponse {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }

    /// Builds a response with `status` and this body only.
    ///
    /// No `Location` header is set, so a client that follows 303s never
    /// resolves (and counts a hit on) the code it was just given.
    pub fn with_status(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }

    /// Builds a 307 response with this body and a matching `Location` header.
    ///
    /// The header is left out when the target contains bytes that are not
    /// allowed in a header value; the JSON body is always present.
    pub fn redirect(self) -> Response {
        let header_value = HeaderValue::from_bytes(self.location.as_bytes()).ok();
        let mut response = self.with_status(StatusCode::TEMPORARY_REDIRECT);

        if let Some(value) = header_value {
            response.headers_mut().insert(header::LOCATION, value);
        }

        response
    }
}
