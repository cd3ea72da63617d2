//! Mock implementation of BikeRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::bike::Bike;
use crate::errors::DomainError;

use super::trait_::BikeRepository;

/// Mock bike repository for testing; assigns UUIDv4 string ids on create
pub struct MockBikeRepository {
    bikes: Arc<RwLock<HashMap<String, Bike>>>,
}

impl MockBikeRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            bikes: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockBikeRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BikeRepository for MockBikeRepository {
    async fn create(&self, mut bike: Bike) -> Result<Bike, DomainError> {
        let mut bikes = self.bikes.write().await;

        let id = Uuid::new_v4().to_string();
        bike.assign_id(id.clone());
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Location;

    fn sample_bike() -> Bike {
        Bike::new(
            "City Cruiser",
            "Step-through frame",
            1042,
            77,
            10.0,
            "",
            60,
            vec![],
            Location::new(52.5200, 13.4050),
        )
    }

    #[tokio::test]
    async fn test_create_assigns_id() {
        let repo = MockBikeRepository::new();
        let created = repo.create(sample_bike()).await.unwrap();

        let id = created.id.clone().expect("id should be assigned");
        let found = repo.find_by_id(&id).await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn test_create_assigns_distinct_ids() {
        let repo = MockBikeRepository::new();
        let a = repo.create(sample_bike()).await.unwrap();
        let b = repo.create(sample_bike()).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_update_round_trips_changes() {
        let repo = MockBikeRepository::new();
        let mut bike = repo.create(sample_bike()).await.unwrap();

        bike.mark_rented();
        repo.update(bike.clone()).await.unwrap();

        let id = bike.id.clone().unwrap();
        let found = repo.find_by_id(&id).await.unwrap().unwrap();
        assert!(!found.is_available());
    }

    #[tokio::test]
    async fn test_update_without_id_fails() {
        let repo = MockBikeRepository::new();
        let result = repo.update(sample_bike()).await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }
}
