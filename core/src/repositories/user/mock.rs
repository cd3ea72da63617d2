//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

use super::trait_::UserRepository;

/// Mock user repository for testing, keyed by email
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if users.contains_key(&user.email) {
            return Err(DomainError::Validation {
                message: "Email already registered".to_string(),
            });
        }

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

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_repository_create_and_find() {
        let repo = MockUserRepository::new();
        let user = User::new("Maria Souza", "maria@example.com", "secret123");

        let created = repo.create(user.clone()).await.unwrap();
        assert_eq!(created.email, user.email);

        let found = repo.find_by_email("maria@example.com").await.unwrap();
        assert_eq!(found, Some(user));
    }

    #[tokio::test]
    async fn test_mock_repository_exists() {
        let repo = MockUserRepository::new();
        assert!(!repo.exists_by_email("maria@example.com").await.unwrap());

        repo.create(User::new("Maria Souza", "maria@example.com", "secret123"))
            .await
            .unwrap();
        assert!(repo.exists_by_email("maria@example.com").await.unwrap());
    }

    #[tokio::test]
    async fn test_mock_repository_delete() {
        let repo = MockUserRepository::new();
        repo.create(User::new("Maria Souza", "maria@example.com", "secret123"))
            .await
            .unwrap();

        assert!(repo.delete("maria@example.com").await.unwrap());
        assert!(!repo.delete("maria@example.com").await.unwrap());
        assert!(repo
            .find_by_email("maria@example.com")
            .await
            .unwrap()
            .is_none());
    }
}
