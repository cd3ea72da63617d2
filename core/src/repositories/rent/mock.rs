//! Mock implementation of RentRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::rent::Rent;
use crate::errors::DomainError;

use super::trait_::RentRepository;

/// Mock rent repository for testing
pub struct MockRentRepository {
    rents: Arc<RwLock<HashMap<Uuid, Rent>>>,
}

impl MockRentRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            rents: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a mock repository pre-populated with one rent
    pub fn with_existing_rent(rent: Rent) -> Self {
        let repo = Self::new();
        // Uncontended at construction time
        repo.rents
            .try_write()
            .expect("freshly created lock")
            .insert(rent.id, rent);
        repo
    }
}

impl Default for MockRentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RentRepository for MockRentRepository {
    async fn create(&self, rent: Rent) -> Result<Rent, DomainError> {
        let mut rents = self.rents.write().await;
        rents.insert(rent.id, rent.clone());
        Ok(rent)
    }

    async fn find_open_by_bike_and_user(
        &self,
        bike_id: &str,
        email: &str,
    ) -> Result<Option<Rent>, DomainError> {
        let rents = self.rents.read().await;
        Ok(rents
            .values()
            .find(|r| r.is_open() && r.bike_id == bike_id && r.user_email == email)
            .cloned())
    }

    async fn find_open_by_user(&self, email: &str) -> Result<Option<Rent>, DomainError> {
        let rents = self.rents.read().await;
        Ok(rents
            .values()
            .find(|r| r.is_open() && r.user_email == email)
            .cloned())
    }

    async fn update(&self, rent: Rent) -> Result<Rent, DomainError> {
        let mut rents = self.rents.write().await;

        if !rents.contains_key(&rent.id) {
            return Err(DomainError::Internal {
                message: format!("Rent not stored: {}", rent.id),
            });
        }

        rents.insert(rent.id, rent.clone());
        Ok(rent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_lookup_matches_pair() {
        let repo = MockRentRepository::new();
        let rent = Rent::open("bike-1", "maria@example.com");
        repo.create(rent.clone()).await.unwrap();

        let found = repo
            .find_open_by_bike_and_user("bike-1", "maria@example.com")
            .await
            .unwrap();
        assert_eq!(found, Some(rent));

        let miss = repo
            .find_open_by_bike_and_user("bike-2", "maria@example.com")
            .await
            .unwrap();
        assert!(miss.is_none());
    }

    #[tokio::test]
    async fn test_closed_rent_no_longer_matches_open_lookups() {
        let repo = MockRentRepository::new();
        let mut rent = Rent::open("bike-1", "maria@example.com");
        repo.create(rent.clone()).await.unwrap();

        rent.close();
        repo.update(rent).await.unwrap();

        assert!(repo
            .find_open_by_bike_and_user("bike-1", "maria@example.com")
            .await
            .unwrap()
            .is_none());
        assert!(repo
            .find_open_by_user("maria@example.com")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_find_open_by_user_any_bike() {
        let repo = MockRentRepository::new();
        repo.create(Rent::open("bike-3", "maria@example.com"))
            .await
            .unwrap();

        let found = repo.find_open_by_user("maria@example.com").await.unwrap();
        assert_eq!(found.unwrap().bike_id, "bike-3");
    }
}
