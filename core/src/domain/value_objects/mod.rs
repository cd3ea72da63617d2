//! Immutable value types shared by domain entities.

pub mod location;

pub use location::Location;
