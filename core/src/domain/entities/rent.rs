//! Rent entity tracking a single bike rental from start to return.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Milliseconds in one billable hour
pub const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// A rental of one bike by one user.
///
/// A rent is *open* while `ended_at` is `None`. At most one open rent exists
/// per bike at any time; the rental service enforces this through the bike's
/// availability flag. Rents are closed on return and never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rent {
    /// Unique identifier for the rent record
    pub id: Uuid,

    /// Identifier of the rented bike
    pub bike_id: String,

    /// Email of the renting user
    pub user_email: String,

    /// Timestamp when the rental started
    pub started_at: DateTime<Utc>,

    /// Timestamp when the bike was returned; `None` while the rent is open
    pub ended_at: Option<DateTime<Utc>>,
}

impl Rent {
    /// Creates a new open rent starting now
    pub fn open(bike_id: impl Into<String>, user_email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            bike_id: bike_id.into(),
            user_email: user_email.into(),
            started_at: Utc::now(),
            ended_at: None,
        }
    }

    /// Checks whether the rental is still in progress
    pub fn is_open(&self) -> bool {
        self.ended_at.is_none()
    }

    /// Closes the rent, recording the current time as the return time
    pub fn close(&mut self) {
        self.ended_at = Some(Utc::now());
    }

    /// Elapsed rental time in fractional hours.
    ///
    /// Returns `None` while the rent is open. A zero-duration rent yields
    /// `Some(0.0)`.
    pub fn duration_hours(&self) -> Option<f64> {
        let ended_at = self.ended_at?;
        let elapsed_ms = (ended_at - self.started_at).num_milliseconds();
        Some(elapsed_ms as f64 / MILLIS_PER_HOUR)
    }
}
