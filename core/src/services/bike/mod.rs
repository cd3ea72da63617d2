//! Bike management service module
//!
//! Registration (repository-assigned ids) and relocation of bikes.

mod service;

#[cfg(test)]
mod tests;

pub use service::BikeService;
