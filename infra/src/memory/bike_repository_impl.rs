//! In-memory implementation of the BikeRepository port

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use vs_core::domain::entities::bike::Bike;
use vs_core::errors::DomainError;
use vs_core::repositories::BikeRepository;

/// In-memory bike store; assigns UUIDv4 string ids on create
#[derive(Default)]
pub struct InMemoryBikeRepository {
    bikes: Arc<RwLock<HashMap<String, Bike>>>,
}

impl InMemoryBikeRepository {
    /// Create a new, empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BikeRepository for InMemoryBikeRepository {
    async fn create(&self, mut bike: Bike) -> Result<Bike, DomainError> {
        let mut bikes = self.bikes.write().await;

        let id = Uuid::new_v4().to_string();
        bike.assign_id(id.clone());
        debug!(bike_id = %id, name = %bike.name, "storing bike");
        bikes.insert(id, bike.clone());
        Ok(bike)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Bike>, DomainError> {
        let bikes = self.bikes.read().await;
        Ok(bikes.get(id).cloned())
    }

    async fn update(&self, bike: Bike) -> Result<Bike, DomainError> {
        let mut bikes = self.bikes.write().await;

        let id = bike.id.clone().ok_or_else(|| DomainError::Validation {
            message: "Cannot update a bike without an id".to_string(),
        })?;

        if !bikes.contains_key(&id) {
            return Err(DomainError::Internal {
                message: format!("Bike not stored: {}", id),
            });
        }

        bikes.insert(id, bike.clone());
        Ok(bike)
    }
}
