//! DTOs for the link shortening endpoint.

use serde::Deserialize;
use validator::Validate;

/// Request to shorten a URL.
///
/// `url` is optional at the serde level so that a missing field reaches
/// validation (and becomes a 400 with the usual error body) instead of
/// failing deserialization.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The URL to shorten. Stored exactly as given.
    #[validate(required, length(min = 1, message = "URL must not be empty"))]
    pub url: Option<String>,
}
