//! User management service module
//!
//! This module provides user account handling:
//! - Registration with duplicate-email rejection
//! - Lookup and removal (blocked while a rent is open)
//! - Credential checks behind a pluggable verifier

mod credentials;
mod service;

#[cfg(test)]
mod tests;

pub use credentials::{CredentialVerifier, ExactMatchVerifier};
pub use service::UserService;
