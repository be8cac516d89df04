//! DTOs for short code statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::UrlRecord;

/// Visit statistics for a single short code.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub hits: i64,
    pub url: String,
    /// Serialized as an RFC 3339 / ISO-8601 timestamp.
    pub created_on: DateTime<Utc>,
}

impl From<UrlRecord> for StatsResponse {
    fn from(record: UrlRecord) -> Self {
        Self {
            hits: record.hit_count,
            url: record.long_url,
            created_on: record.created_on,
        }
    }
}
