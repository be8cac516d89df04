//! Repository trait definitions for the domain layer.
//!
//! The domain talks to storage only through [`UrlRepository`]. The concrete
//! implementation lives in `crate::infrastructure::persistence`; unit tests
//! use the `mockall` generated `MockUrlRepository`.
//!
//! # Testing
//!
//! See integration tests in `tests/repository_url.rs` for usage examples.

pub mod url_repository;

pub use url_repository::{InsertOutcome, UrlRepository};

#[cfg(test)]
pub use url_repository::MockUrlRepository;
