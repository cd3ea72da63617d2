//! Domain-specific error types for user, bike, and rental operations
//!
//! Each variant is a distinct failure kind that callers branch on; display
//! messages are informational only and transport layers map variants to
//! protocol responses through [`ErrorResponse`] codes.

use thiserror::Error;
use vs_shared::errors::{error_codes, ErrorResponse};

/// User management errors
#[derive(Error, Debug)]
pub enum UserError {
    #[error("User already registered: {email}")]
    DuplicateUser { email: String },

    #[error("User not found: {email}")]
    UserNotFound { email: String },

    #[error("User has an open rent: {email}")]
    OpenRent { email: String },
}

/// Bike management errors
#[derive(Error, Debug)]
pub enum BikeError {
    #[error("Bike not found: {id}")]
    BikeNotFound { id: String },

    #[error("Bike is already rented: {id}")]
    UnavailableBike { id: String },
}

/// Rental lifecycle errors
#[derive(Error, Debug)]
pub enum RentError {
    #[error("No open rent for bike {bike_id} and user {email}")]
    RentNotFound { bike_id: String, email: String },
}

/// Convert UserError to ErrorResponse
impl From<UserError> for ErrorResponse {
    fn from(err: UserError) -> Self {
        let error_code = match &err {
            UserError::DuplicateUser { .. } => error_codes::DUPLICATE_USER,
            UserError::UserNotFound { .. } => error_codes::USER_NOT_FOUND,
            UserError::OpenRent { .. } => error_codes::OPEN_RENT,
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

/// Convert BikeError to ErrorResponse
impl From<BikeError> for ErrorResponse {
    fn from(err: BikeError) -> Self {
        let error_code = match &err {
            BikeError::BikeNotFound { .. } => error_codes::BIKE_NOT_FOUND,
            BikeError::UnavailableBike { .. } => error_codes::UNAVAILABLE_BIKE,
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

/// Convert RentError to ErrorResponse
impl From<RentError> for ErrorResponse {
    fn from(err: RentError) -> Self {
        let error_code = match &err {
            RentError::RentNotFound { .. } => error_codes::RENT_NOT_FOUND,
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}
