//! In-memory repository adapters.
//!
//! Each adapter keeps its records in a `tokio::sync::RwLock<HashMap>` and
//! implements the corresponding `vs_core` repository port. State is lost on
//! process exit; these back tests, demos, and single-process deployments.

mod bike_repository_impl;
mod rent_repository_impl;
mod user_repository_impl;

pub use bike_repository_impl::InMemoryBikeRepository;
pub use rent_repository_impl::InMemoryRentRepository;
pub use user_repository_impl::InMemoryUserRepository;
