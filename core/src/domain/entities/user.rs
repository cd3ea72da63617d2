//! User entity representing a registered rider in the VeloShare system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User entity representing a registered rider.
///
/// The email address is the unique key for a user; no surrogate id exists.
/// The password is an opaque credential string compared by a
/// [`CredentialVerifier`](crate::services::user::CredentialVerifier) -
/// the entity itself makes no assumption about hashing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Display name
    pub name: String,

    /// Email address, unique within the system
    pub email: String,

    /// Opaque credential string
    pub password: String,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            created_at: Utc::now(),
        }
    }
}
