//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the VeloShare
//! application. It provides concrete implementations for the repository
//! ports defined in `vs_core` and for the credential verification seam.
//!
//! ## Architecture
//!
//! - **Memory**: in-memory repository adapters backed by `tokio::sync::RwLock`,
//!   suitable for tests, demos, and single-process deployments
//! - **Credentials**: bcrypt-backed credential hashing and verification

// Re-export core error types for convenience
pub use vs_core::errors::*;

/// Credential hashing implementations
pub mod credentials;

/// In-memory repository adapters
pub mod memory;
