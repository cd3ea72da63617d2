//! In-memory implementation of the RentRepository port

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use vs_core::domain::entities::rent::Rent;
use vs_core::errors::DomainError;
use vs_core::repositories::RentRepository;

/// In-memory rent store keyed by rent id; closed rents are kept for history
#[derive(Default)]
pub struct InMemoryRentRepository {
    rents: Arc<RwLock<HashMap<Uuid, Rent>>>,
}

impl InMemoryRentRepository {
    /// Create a new, empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RentRepository for InMemoryRentRepository {
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
