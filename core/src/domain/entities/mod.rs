//! Domain entities representing core business objects.

pub mod bike;
pub mod rent;
pub mod user;

// Re-export commonly used types
pub use bike::Bike;
pub use rent::{Rent, MILLIS_PER_HOUR};
pub use user::User;
