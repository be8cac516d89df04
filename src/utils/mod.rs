//! Utility functions shared across layers.
//!
//! - [`code_generator`] - Short code generation and format checks

pub mod code_generator;
