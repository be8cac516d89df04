//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give HTTP handlers and the admin
//! CLI a small API to call.
//!
//! # Available Services
//!
//! - [`services::mapping_service::MappingService`] - Short code allocation, redirects and hit statistics

pub mod services;
