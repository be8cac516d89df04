//! Short code allocation, resolution and statistics.

use std::sync::Arc;

use crate::config::DEFAULT_ALLOCATION_ATTEMPTS;
use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::{InsertOutcome, UrlRepository};
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use tracing::{debug, info, warn};

/// Outcome of [`MappingService::allocate_or_find`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    pub record: UrlRecord,
    /// `true` if this call created the mapping, `false` if it already existed.
    pub is_new: bool,
}

impl Allocation {
    fn created(record: UrlRecord) -> Self {
        Self {
            record,
            is_new: true,
        }
    }

    fn existing(record: UrlRecord) -> Self {
        Self {
            record,
            is_new: false,
        }
    }

    pub fn short_code(&self) -> &str {
        &self.record.short_code
    }
}

/// Service mapping long URLs to short codes and back.
///
/// Holds no state besides the repository handle. Uniqueness and counter
/// atomicity are delegated to the store, so any number of requests may call
/// into one instance concurrently.
pub struct MappingService<R: UrlRepository> {
    repository: Arc<R>,
    max_attempts: u32,
}

impl<R: UrlRepository> MappingService<R> {
    /// Creates a new mapping service with the default attempt budget.
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_max_attempts(repository, DEFAULT_ALLOCATION_ATTEMPTS)
    }

    /// Creates a new mapping service drawing at most `max_attempts` codes per
    /// allocation.
    pub fn with_max_attempts(repository: Arc<R>, max_attempts: u32) -> Self {
        Self {
            repository,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Returns the short code for `long_url`, creating the mapping if needed.
    ///
    /// # Idempotence
    ///
    /// A URL that is already mapped returns its existing record with
    /// `is_new = false`. This includes the case where a concurrent caller
    /// inserted the same URL between our lookup and our insert.
    ///
    /// # Code Generation
    ///
    /// Draws a random 6-character code and hands it to the store's atomic
    /// insert-if-absent. A short code collision draws again, up to the
    /// configured attempt budget.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::MissingInput`] if `long_url` is empty; the store
    /// is not touched in that case.
    /// Returns [`AppError::Internal`] if every drawn code collided.
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    pub async fn allocate_or_find(&self, long_url: &str) -> Result<Allocation, AppError> {
        if long_url.is_empty() {
            return Err(AppError::missing_input());
        }

        if let Some(existing) = self.repository.find_by_long_url(long_url).await? {
            debug!(code = %existing.short_code, "URL already mapped");
            return Ok(Allocation::existing(existing));
        }

        for attempt in 1..=self.max_attempts {
            let candidate = NewUrlRecord::now(generate_code(), long_url.to_owned());

            match self.repository.insert_if_absent(candidate).await? {
                InsertOutcome::Created(record) => {
                    info!(code = %record.short_code, attempt, "Short code allocated");
                    return Ok(Allocation::created(record));
                }
                InsertOutcome::LongUrlExists(record) => {
                    debug!(code = %record.short_code, "URL mapped concurrently, reusing");
                    return Ok(Allocation::existing(record));
                }
                InsertOutcome::ShortCodeTaken => {
                    debug!(attempt, "Short code collision, drawing again");
                }
            }
        }

        warn!(attempts = self.max_attempts, "Short code allocation exhausted");
        Err(AppError::internal(format!(
            "Failed to generate a unique short code after {} attempts",
            self.max_attempts
        )))
    }

    /// Resolves a short code for a redirect, counting the visit.
    ///
    /// The increment and the read happen in one atomic store operation, so
    /// concurrent resolves of the same code never lose a hit. The returned
    /// record carries the post-increment counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping has this code.
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    pub async fn resolve(&self, short_code: &str) -> Result<UrlRecord, AppError> {
        let record = self
            .repository
            .increment_hits(short_code)
            .await?
            .ok_or_else(AppError::not_found)?;

        debug!(code = %short_code, hits = record.hit_count, "Short code resolved");
        Ok(record)
    }

    /// Returns the current statistics for a short code without counting a
    /// visit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping has this code.
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    pub async fn stats(&self, short_code: &str) -> Result<UrlRecord, AppError> {
        self.repository
            .find_by_short_code(short_code)
            .await?
            .ok_or_else(AppError::not_found)
    }

    /// Most recently created mappings, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    pub async fn recent(&self, limit: i64) -> Result<Vec<UrlRecord>, AppError> {
        self.repository.list_recent(limit.max(0)).await
    }

    /// Total number of mappings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// Confirms the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if it is not.
    pub async fn check_store(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
