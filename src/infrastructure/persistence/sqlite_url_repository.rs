//! SQLite implementation of the mapping repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::{InsertOutcome, UrlRepository};
use crate::error::AppError;

/// Row shape shared by every query that returns a full record.
#[derive(Debug, sqlx::FromRow)]
struct UrlRecordRow {
    id: i64,
    short_code: String,
    long_url: String,
    created_on: DateTime<Utc>,
    hit_count: i64,
}

impl From<UrlRecordRow> for UrlRecord {
    fn from(r: UrlRecordRow) -> Self {
        UrlRecord::new(r.id, r.short_code, r.long_url, r.created_on, r.hit_count)
    }
}

/// SQLite repository for short code mappings.
///
/// Uniqueness of `short_code` and `long_url` is enforced by table
/// constraints; inserts use `ON CONFLICT DO NOTHING` and counter updates use
/// a single `UPDATE ... RETURNING`, so neither path has a read-then-write gap.
pub struct SqliteUrlRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn insert_if_absent(&self, new_record: NewUrlRecord) -> Result<InsertOutcome, AppError> {
        let inserted = sqlx::query_as::<_, UrlRecordRow>(
            r#"
            INSERT INTO url_mappings (short_code, long_url, created_on, hit_count)
            VALUES (?1, ?2, ?3, 0)
            ON CONFLICT DO NOTHING
            RETURNING id, short_code, long_url, created_on, hit_count
            "#,
        )
        .bind(&new_record.short_code)
        .bind(&new_record.long_url)
        .bind(new_record.created_on)
        .fetch_optional(self.pool.as_ref())
        .await?;

        if let Some(row) = inserted {
            return Ok(InsertOutcome::Created(row.into()));
        }

        // Rows are never deleted, so whichever key blocked the insert is
        // still present.
        match self.find_by_long_url(&new_record.long_url).await? {
            Some(existing) => Ok(InsertOutcome::LongUrlExists(existing)),
            None => Ok(InsertOutcome::ShortCodeTaken),
        }
    }

    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError> {
        let row = sqlx::query_as::<_, UrlRecordRow>(
            r#"
            SELECT id, short_code, long_url, created_on, hit_count
            FROM url_mappings
            WHERE short_code = ?1
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlRecord::from))
    }

    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<UrlRecord>, AppError> {
        let row = sqlx::query_as::<_, UrlRecordRow>(
            r#"
            SELECT id, short_code, long_url, created_on, hit_count
            FROM url_mappings
            WHERE long_url = ?1
            "#,
        )
        .bind(long_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlRecord::from))
    }

    async fn increment_hits(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError> {
        let row = sqlx::query_as::<_, UrlRecordRow>(
            r#"
            UPDATE url_mappings
            SET hit_count = hit_count + 1
            WHERE short_code = ?1
            RETURNING id, short_code, long_url, created_on, hit_count
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlRecord::from))
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<UrlRecord>, AppError> {
        let rows = sqlx::query_as::<_, UrlRecordRow>(
            r#"
            SELECT id, short_code, long_url, created_on, hit_count
            FROM url_mappings
            ORDER BY id DESC
            LIMIT ?1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(UrlRecord::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url_mappings")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
