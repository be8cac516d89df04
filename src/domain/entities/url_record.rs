//! UrlRecord entity: one short code mapped to one long URL.

use chrono::{DateTime, Utc};

/// A persisted short code to long URL mapping with its visit counter.
///
/// `short_code`, `long_url` and `created_on` never change once the record
/// exists; only `hit_count` grows, by one per successful resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: i64,
    pub short_code: String,
    pub long_url: String,
    pub created_on: DateTime<Utc>,
    pub hit_count: i64,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(
        id: i64,
        short_code: String,
        long_url: String,
        created_on: DateTime<Utc>,
        hit_count: i64,
    ) -> Self {
        Self {
            id,
            short_code,
            long_url,
            created_on,
            hit_count,
        }
    }

    /// Path under which the record is served, e.g. `/urls/aB3xY9`.
    pub fn location(&self) -> String {
        format!("/urls/{}", self.short_code)
    }
}

/// Input data for inserting a new mapping.
#[derive(Debug, Clone)]
pub struct NewUrlRecord {
    pub short_code: String,
    pub long_url: String,
    pub created_on: DateTime<Utc>,
}

impl NewUrlRecord {
    /// Stamps a candidate mapping with the current time.
    pub fn now(short_code: String, long_url: String) -> Self {
        Self {
            short_code,
            long_url,
            created_on: Utc::now(),
        }
    }
}
