//! In-memory implementation of the UserRepository port

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use vs_core::domain::entities::user::User;
use vs_core::errors::DomainError;
use vs_core::repositories::UserRepository;

/// In-memory user store keyed by email
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    /// Create a new, empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if users.contains_key(&user.email) {
            return Err(DomainError::Validation {
                message: format!("Email already registered: {}", user.email),
            });
        }

        debug!(email = %user.email, "storing user");
        users.insert(user.email.clone(), user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(email).cloned())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let users = self.users.read().await;
        Ok(users.contains_key(email))
    }

    async fn delete(&self, email: &str) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;
        Ok(users.remove(email).is_some())
    }
}
