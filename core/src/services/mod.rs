//! Business services containing domain logic and use cases.

pub mod bike;
pub mod rental;
pub mod user;

// Re-export commonly used types
pub use bike::BikeService;
pub use rental::RentalService;
pub use user::{CredentialVerifier, ExactMatchVerifier, UserService};
