//! Per-bike lock registry for serialising rental operations.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

/// Registry of per-bike-id async locks.
///
/// `rent_bike` and `return_bike` hold the bike's lock across their whole
/// check-then-act sequence, so two callers racing for the same bike observe
/// a truthful availability flag. Locks are created on first use and kept for
/// the registry's lifetime; bikes are never deleted, so entries never need
/// reclaiming.
pub(crate) struct BikeLockRegistry {
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl BikeLockRegistry {
    pub(crate) fn new() -> Self {
        Self {
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Acquire the lock for one bike id, creating it on first use.
    ///
    /// The registry map is only held while cloning the entry, never across
    /// the per-bike await.
    pub(crate) async fn acquire(&self, bike_id: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            Arc::clone(locks.entry(bike_id.to_string()).or_default())
        };
        lock.lock_owned().await
    }
}
