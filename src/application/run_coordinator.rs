//! RunCoordinator - per-run-label serialization of in-flight runs.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Serializes work targeting the same run label.
///
/// Runs for different labels proceed in parallel; a second run for the same
/// label waits until the first releases its guard. Lock entries are retained
/// for the process lifetime; labels number one per archived period.
#[derive(Debug, Default)]
pub struct RunCoordinator {
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl RunCoordinator {
    /// Creates a new coordinator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the guard for a label, waiting if another run holds it.
    pub async fn acquire(&self, label: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            locks
                .entry(label.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        lock.lock_owned().await
    }
}
