//! Core domain entities.
//!
//! [`UrlRecord`] is the only persisted entity. Creation goes through the
//! separate [`NewUrlRecord`] input type; the store assigns the id and the
//! counter starts at zero.

pub mod url_record;

pub use url_record::{NewUrlRecord, UrlRecord};
