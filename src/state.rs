//! Shared state injected into every handler.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::application::services::MappingService;
use crate::infrastructure::persistence::SqliteUrlRepository;

/// Mapping service backed by the SQLite repository.
pub type SqliteMappingService = MappingService<SqliteUrlRepository>;

#[derive(Clone)]
pub struct AppState {
    pub mapping_service: Arc<SqliteMappingService>,
}

impl AppState {
    /// Wires the repository and service around an existing pool.
    pub fn new(pool: Arc<SqlitePool>, max_allocation_attempts: u32) -> Self {
        let repository = Arc::new(SqliteUrlRepository::new(pool));
        let mapping_service = Arc::new(MappingService::with_max_attempts(
            repository,
            max_allocation_attempts,
        ));

        Self { mapping_service }
    }
}
