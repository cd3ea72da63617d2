//! Rent repository trait defining the interface for rent data persistence.

use async_trait::async_trait;

use crate::domain::entities::rent::Rent;
use crate::errors::DomainError;

/// Repository trait for Rent entity persistence operations
///
/// "Open" lookups match only rents whose end timestamp is absent; closed
/// rents stay stored for billing history but never match them.
#[async_trait]
pub trait RentRepository: Send + Sync {
    /// Persist a new rent record
    async fn create(&self, rent: Rent) -> Result<Rent, DomainError>;

    /// Find the open rent for a given bike and user, if any
    ///
    /// # Returns
    /// * `Ok(Some(Rent))` - An open rent matches both the bike and the user
    /// * `Ok(None)` - No matching open rent (never rented, or already returned)
    /// * `Err(DomainError)` - Storage error occurred
    async fn find_open_by_bike_and_user(
        &self,
        bike_id: &str,
        email: &str,
    ) -> Result<Option<Rent>, DomainError>;

    /// Find any open rent held by the given user
    async fn find_open_by_user(&self, email: &str) -> Result<Option<Rent>, DomainError>;

    /// Update an existing rent (closing it on return)
    async fn update(&self, rent: Rent) -> Result<Rent, DomainError>;
}
