//! Bike entity, the unit of rental in the VeloShare system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Location;

/// Bike entity representing a rentable bike.
///
/// A bike has no id until it is registered; the repository assigns one on
/// `create` and all subsequent lookups use it. At most one open rent exists
/// per bike, tracked through the `available` flag: it flips to `false` when
/// a rental starts and back to `true` when the bike is returned. Bikes are
/// never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bike {
    /// Repository-assigned identifier; `None` before registration
    pub id: Option<String>,

    /// Display name
    pub name: String,

    /// Free-text description
    pub description: String,

    /// Manufacturer identification code
    pub manufacturer_code: u32,

    /// Model identification code
    pub model_code: u32,

    /// Rental rate per hour, non-negative
    pub hourly_rate: f64,

    /// Free-text operational note
    pub note: String,

    /// Advertised battery range in kilometres
    pub battery_range_km: u32,

    /// Identifiers of attached accessories (lights, baskets, child seats)
    pub accessory_ids: Vec<String>,

    /// Current position
    pub location: Location,

    /// Whether the bike may currently be rented
    pub available: bool,

    /// Timestamp when the bike was registered
    pub created_at: DateTime<Utc>,

    /// Timestamp when the bike was last updated
    pub updated_at: DateTime<Utc>,
}

impl Bike {
    /// Creates a new, not-yet-registered Bike instance
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        manufacturer_code: u32,
        model_code: u32,
        hourly_rate: f64,
        note: impl Into<String>,
        battery_range_km: u32,
        accessory_ids: Vec<String>,
        location: Location,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            manufacturer_code,
            model_code,
            hourly_rate,
            note: note.into(),
            battery_range_km,
            accessory_ids,
            location,
            available: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Assigns the repository-generated identifier
    pub fn assign_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
        self.updated_at = Utc::now();
    }

    /// Marks the bike as rented out
    pub fn mark_rented(&mut self) {
        self.available = false;
        self.updated_at = Utc::now();
    }

    /// Marks the bike as returned and available again
    pub fn mark_returned(&mut self) {
        self.available = true;
        self.updated_at = Utc::now();
    }

    /// Overwrites the bike's position
    pub fn relocate(&mut self, location: Location) {
        self.location = location;
        self.updated_at = Utc::now();
    }

    /// Checks whether the bike may currently be rented
    pub fn is_available(&self) -> bool {
        self.available
    }
}
