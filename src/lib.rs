//! # URL Shortener
//!
//! Maps long URLs to 6-character short codes and redirects visitors back,
//! counting every visit. Built with Axum and SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The `UrlRecord` entity and the repository trait
//! - **Application Layer** ([`application`]) - `MappingService`: allocate, resolve, stats
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite pool, migrations and repository
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Guarantees
//!
//! - Submitting the same long URL twice returns the same short code
//! - Short codes are unique; collisions are resolved by the store's atomic insert
//! - Hit counters are incremented atomically, one per redirect
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://url_database.db"  # Optional, this is the default
//! cargo run
//!
//! curl -X POST localhost:3000/shorten -H 'content-type: application/json' \
//!      -d '{"url": "https://example.com/a"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{Allocation, MappingService};
    pub use crate::domain::entities::{NewUrlRecord, UrlRecord};
    pub use crate::domain::repositories::{InsertOutcome, UrlRepository};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::SqliteUrlRepository;
    pub use crate::state::AppState;
}
