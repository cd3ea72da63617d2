//! Bike management service implementation

use std::sync::Arc;
use tracing::info;

use crate::domain::entities::bike::Bike;
use crate::domain::value_objects::Location;
use crate::errors::{BikeError, DomainResult};
use crate::repositories::BikeRepository;

/// Service for managing the bike fleet
pub struct BikeService<B>
where
    B: BikeRepository,
{
    /// Bike repository for fleet persistence
    bike_repository: Arc<B>,
}

impl<B> BikeService<B>
where
    B: BikeRepository,
{
    /// Create a new bike service
    pub fn new(bike_repository: Arc<B>) -> Self {
        Self { bike_repository }
    }

    /// Register a new bike
    ///
    /// The repository assigns a fresh unique id; the returned bike carries
    /// it and subsequent lookups by that id resolve. Unlike users, bikes
    /// have no duplicate check.
    pub async fn register_bike(&self, bike: Bike) -> DomainResult<Bike> {
        let bike = self.bike_repository.create(bike).await?;
        info!(bike_id = ?bike.id, name = %bike.name, "bike registered");
        Ok(bike)
    }

    /// Move a bike to a new location
    ///
    /// Relocation is independent of availability: a rented bike may be
    /// moved (GPS position updates while on the road).
    ///
    /// # Returns
    /// * `Ok(Bike)` - The updated bike
    /// * `Err(BikeError::BikeNotFound)` - No bike with this id
    pub async fn move_bike_to(&self, bike_id: &str, location: Location) -> DomainResult<Bike> {
        let mut bike = self
            .bike_repository
            .find_by_id(bike_id)
            .await?
            .ok_or_else(|| BikeError::BikeNotFound {
                id: bike_id.to_string(),
            })?;

        bike.relocate(location);
        let bike = self.bike_repository.update(bike).await?;
        Ok(bike)
    }
}
