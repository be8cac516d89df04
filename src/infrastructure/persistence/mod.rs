//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! bound parameters.
//!
//! # Repositories
//!
//! - [`SqliteUrlRepository`] - Mapping storage, lookup and hit counting

pub mod sqlite_url_repository;

pub use sqlite_url_repository::SqliteUrlRepository;
