//! Shared types for VeloShare server
//!
//! This crate provides common functionality used across all server modules:
//! - Error response structures and error codes

pub mod errors;

// Re-export commonly used items at crate root
pub use errors::{error_codes, ErrorResponse};
