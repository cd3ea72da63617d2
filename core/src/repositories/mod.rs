//! Repository ports abstracting persistence for each entity type.

pub mod bike;
pub mod rent;
pub mod user;

pub use bike::BikeRepository;
pub use rent::RentRepository;
pub use user::UserRepository;
