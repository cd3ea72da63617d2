//! User management service implementation

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::entities::user::User;
use crate::errors::{DomainResult, UserError};
use crate::repositories::{RentRepository, UserRepository};

use super::credentials::{CredentialVerifier, ExactMatchVerifier};

/// Service for managing user accounts
///
/// Holds no state of its own; all records live in the injected repositories.
/// The rent repository is consulted only to block removal of a user with an
/// open rent.
pub struct UserService<U, R, V = ExactMatchVerifier>
where
    U: UserRepository,
    R: RentRepository,
    V: CredentialVerifier,
{
    /// User repository for account persistence
    user_repository: Arc<U>,
    /// Rent repository for the open-rent removal check
    rent_repository: Arc<R>,
    /// Credential verifier used by `authenticate`
    credential_verifier: Arc<V>,
}

impl<U, R> UserService<U, R>
where
    U: UserRepository,
    R: RentRepository,
{
    /// Create a new user service with the default exact-match verifier
    pub fn new(user_repository: Arc<U>, rent_repository: Arc<R>) -> Self {
        Self {
            user_repository,
            rent_repository,
            credential_verifier: Arc::new(ExactMatchVerifier),
        }
    }
}

impl<U, R, V> UserService<U, R, V>
where
    U: UserRepository,
    R: RentRepository,
    V: CredentialVerifier,
{
    /// Create a new user service with a custom credential verifier
    pub fn with_verifier(
        user_repository: Arc<U>,
        rent_repository: Arc<R>,
        credential_verifier: Arc<V>,
    ) -> Self {
        Self {
            user_repository,
            rent_repository,
            credential_verifier,
        }
    }

    /// Register a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The persisted user
    /// * `Err(UserError::DuplicateUser)` - A user with this email already exists
    pub async fn register_user(&self, user: User) -> DomainResult<User> {
        if self.user_repository.exists_by_email(&user.email).await? {
            return Err(UserError::DuplicateUser {
                email: user.email.clone(),
            }
            .into());
        }

        let user = self.user_repository.create(user).await?;
        info!(email = %user.email, "user registered");
        Ok(user)
    }

    /// Look up a user by email
    ///
    /// # Returns
    /// * `Ok(User)` - The stored user; value equality with the registered
    ///   record holds for callers
    /// * `Err(UserError::UserNotFound)` - No user with this email
    pub async fn find_user(&self, email: &str) -> DomainResult<User> {
        self.user_repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| {
                UserError::UserNotFound {
                    email: email.to_string(),
                }
                .into()
            })
    }

    /// Remove a user account
    ///
    /// Existence is checked before the open-rent status, so an unknown email
    /// reports `UserNotFound` even though it trivially has no rents.
    ///
    /// # Returns
    /// * `Ok(())` - The account was deleted
    /// * `Err(UserError::UserNotFound)` - No user with this email
    /// * `Err(UserError::OpenRent)` - The user still holds an open rent
    pub async fn remove_user(&self, email: &str) -> DomainResult<()> {
        if self.user_repository.find_by_email(email).await?.is_none() {
            return Err(UserError::UserNotFound {
                email: email.to_string(),
            }
            .into());
        }

        if let Some(rent) = self.rent_repository.find_open_by_user(email).await? {
            warn!(email, bike_id = %rent.bike_id, "removal rejected: open rent");
            return Err(UserError::OpenRent {
                email: email.to_string(),
            }
            .into());
        }

        self.user_repository.delete(email).await?;
        info!(email, "user removed");
        Ok(())
    }

    /// Check a user's credentials
    ///
    /// A wrong password is a regular `Ok(false)`, not an error; only an
    /// unknown email fails.
    pub async fn authenticate(&self, email: &str, password: &str) -> DomainResult<bool> {
        let user = self.find_user(email).await?;
        Ok(self.credential_verifier.verify(password, &user.password))
    }
}
