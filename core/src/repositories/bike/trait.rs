//! Bike repository trait defining the interface for bike data persistence.

use async_trait::async_trait;

use crate::domain::entities::bike::Bike;
use crate::errors::DomainError;

/// Repository trait for Bike entity persistence operations
///
/// Identifier generation is the adapter's concern: `create` receives a bike
/// without an id and returns an id-bearing copy that all subsequent
/// `find_by_id` lookups resolve.
#[async_trait]
pub trait BikeRepository: Send + Sync {
    /// Persist a new bike, assigning it a fresh unique identifier
    ///
    /// # Returns
    /// * `Ok(Bike)` - The persisted bike with its assigned id
    /// * `Err(DomainError)` - Storage error occurred
    async fn create(&self, bike: Bike) -> Result<Bike, DomainError>;

    /// Find a bike by its identifier
    ///
    /// # Returns
    /// * `Ok(Some(Bike))` - Bike found
    /// * `Ok(None)` - No bike with that id
    /// * `Err(DomainError)` - Storage error occurred
    async fn find_by_id(&self, id: &str) -> Result<Option<Bike>, DomainError>;

    /// Update an existing bike (availability and location changes)
    ///
    /// # Returns
    /// * `Ok(Bike)` - The updated bike
    /// * `Err(DomainError)` - Update failed (e.g. bike not found)
    async fn update(&self, bike: Bike) -> Result<Bike, DomainError>;
}
