//! Rental lifecycle service implementation

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::entities::rent::Rent;
use crate::errors::{BikeError, DomainResult, RentError, UserError};
use crate::repositories::{BikeRepository, RentRepository, UserRepository};

use super::locks::BikeLockRegistry;

/// Service for the rental state machine: Available -> Rented -> Available
///
/// Orchestrates the three repositories and computes billing on return. Each
/// operation runs under the bike's lock (see [`BikeLockRegistry`]) so the
/// "at most one open rent per bike" invariant holds even with concurrent
/// callers; the repositories themselves need no locking.
pub struct RentalService<B, U, R>
where
    B: BikeRepository,
    U: UserRepository,
    R: RentRepository,
{
    /// Bike repository for availability and lookups
    bike_repository: Arc<B>,
    /// User repository for renter resolution
    user_repository: Arc<U>,
    /// Rent repository for open-rent tracking
    rent_repository: Arc<R>,
    /// Per-bike locks serialising rent/return on one bike
    bike_locks: BikeLockRegistry,
}

impl<B, U, R> RentalService<B, U, R>
where
    B: BikeRepository,
    U: UserRepository,
    R: RentRepository,
{
    /// Create a new rental service
    pub fn new(
        bike_repository: Arc<B>,
        user_repository: Arc<U>,
        rent_repository: Arc<R>,
    ) -> Self {
        Self {
            bike_repository,
            user_repository,
            rent_repository,
            bike_locks: BikeLockRegistry::new(),
        }
    }

    /// Start a rental
    ///
    /// This method:
    /// 1. Resolves the bike by id
    /// 2. Resolves the user by email
    /// 3. Rejects the rental if the bike is not available
    /// 4. Marks the bike unavailable and opens a rent starting now
    ///
    /// No mutation happens before all checks pass.
    ///
    /// # Returns
    /// * `Ok(())` - The rental started
    /// * `Err(BikeError::BikeNotFound)` - Unknown bike id
    /// * `Err(UserError::UserNotFound)` - Unknown email
    /// * `Err(BikeError::UnavailableBike)` - The bike is already rented
    pub async fn rent_bike(&self, bike_id: &str, email: &str) -> DomainResult<()> {
        let _guard = self.bike_locks.acquire(bike_id).await;

        let mut bike = self
            .bike_repository
            .find_by_id(bike_id)
            .await?
            .ok_or_else(|| BikeError::BikeNotFound {
                id: bike_id.to_string(),
            })?;

        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| UserError::UserNotFound {
                email: email.to_string(),
            })?;

        if !bike.is_available() {
            warn!(bike_id, email, "rental rejected: bike unavailable");
            return Err(BikeError::UnavailableBike {
                id: bike_id.to_string(),
            }
            .into());
        }

        bike.mark_rented();
        self.bike_repository.update(bike).await?;

        let rent = Rent::open(bike_id, user.email);
        self.rent_repository.create(rent).await?;

        info!(bike_id, email, "rental started");
        Ok(())
    }

    /// Return a rented bike and compute the billed amount
    ///
    /// This method:
    /// 1. Resolves the bike and the user (same errors as `rent_bike`)
    /// 2. Looks up the open rent for this bike/user pair
    /// 3. Closes the rent (end = now), then frees the bike
    /// 4. Bills `elapsed_hours * hourly_rate`, fractional hours included
    ///
    /// A zero-duration rent bills `0`; there is no minimum charge.
    ///
    /// # Returns
    /// * `Ok(f64)` - The billed amount
    /// * `Err(BikeError::BikeNotFound)` / `Err(UserError::UserNotFound)`
    /// * `Err(RentError::RentNotFound)` - No open rent for this pair
    ///   (never rented, or already returned)
    pub async fn return_bike(&self, bike_id: &str, email: &str) -> DomainResult<f64> {
        let _guard = self.bike_locks.acquire(bike_id).await;

        let mut bike = self
            .bike_repository
            .find_by_id(bike_id)
            .await?
            .ok_or_else(|| BikeError::BikeNotFound {
                id: bike_id.to_string(),
            })?;

        self.user_repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| UserError::UserNotFound {
                email: email.to_string(),
            })?;

        let mut rent = self
            .rent_repository
            .find_open_by_bike_and_user(bike_id, email)
            .await?
            .ok_or_else(|| RentError::RentNotFound {
                bike_id: bike_id.to_string(),
                email: email.to_string(),
            })?;

        // Billed time ends here: close the rent before freeing the bike
        rent.close();
        let rent = self.rent_repository.update(rent).await?;

        bike.mark_returned();
        let bike = self.bike_repository.update(bike).await?;

        let hours = rent.duration_hours().unwrap_or(0.0);
        let amount = hours * bike.hourly_rate;

        info!(bike_id, email, amount, "rental closed");
        Ok(amount)
    }
}
