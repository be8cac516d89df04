//! Repository trait for short code mappings.

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Result of an atomic insert-if-absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The candidate was stored as a new record.
    Created(UrlRecord),
    /// Another record already owns the long URL; that record is returned
    /// untouched.
    LongUrlExists(UrlRecord),
    /// The candidate short code is already in use by a different URL.
    ShortCodeTaken,
}

/// Repository interface for the mapping store.
///
/// Both `short_code` and `long_url` are unique keys. Implementations must
/// enforce that atomically in the store, not by a separate read.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_url.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts the candidate unless its short code or long URL already exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn insert_if_absent(&self, new_record: NewUrlRecord) -> Result<InsertOutcome, AppError>;

    /// Finds a record by its short code without touching the counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Finds a record by its long URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Adds one to the hit counter and returns the updated record, in a
    /// single atomic statement.
    ///
    /// Returns `Ok(None)` if no record has this short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn increment_hits(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Lists the most recently created records, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn list_recent(&self, limit: i64) -> Result<Vec<UrlRecord>, AppError>;

    /// Counts all records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Round-trips a trivial query to confirm the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if the store does not answer.
    async fn ping(&self) -> Result<(), AppError>;
}
