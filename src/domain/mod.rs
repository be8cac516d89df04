//! Domain layer: the mapping entity and the storage contract.
//!
//! - [`entities`] - [`entities::UrlRecord`] and its insert form
//! - [`repositories`] - [`repositories::UrlRepository`], implemented by the infrastructure layer
//!
//! The domain layer has no dependencies on infrastructure or presentation.

pub mod entities;
pub mod repositories;
