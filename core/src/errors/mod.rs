//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{BikeError, RentError, UserError};

use thiserror::Error;
use vs_shared::errors::{error_codes, ErrorResponse};

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    User(#[from] UserError),

    #[error(transparent)]
    Bike(#[from] BikeError),

    #[error(transparent)]
    Rent(#[from] RentError),
}

pub type DomainResult<T> = Result<T, DomainError>;

/// Convert DomainError to ErrorResponse, delegating to the specific
/// conversions for bridged variants
impl From<DomainError> for ErrorResponse {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation { message } => {
                ErrorResponse::new(error_codes::VALIDATION_ERROR, message)
            }
            DomainError::Internal { message } => {
                ErrorResponse::new(error_codes::INTERNAL_ERROR, message)
            }
            DomainError::User(e) => e.into(),
            DomainError::Bike(e) => e.into(),
            DomainError::Rent(e) => e.into(),
        }
    }
}
