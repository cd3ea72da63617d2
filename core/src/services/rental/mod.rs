//! Rental lifecycle service module
//!
//! The rent/return state machine: availability checks, open-rent tracking,
//! and time-based billing. Operations on one bike are serialised through a
//! per-bike lock registry so the availability check-then-act sequence is
//! atomic with respect to concurrent callers.

mod locks;
mod service;

#[cfg(test)]
mod tests;

pub use service::RentalService;
