use std::sync::{Arc, Mutex};

use crate::signals::record::{Direction, SignalRecord};

/// Holds the current authoritative signal set.
///
/// Cloning the repository clones the handle; all clones see the same set.
/// The set is only ever swapped wholesale - there is no per-record patching.
#[derive(Clone, Debug, Default)]
pub struct SignalRepository {
    signals: Arc<Mutex<Vec<SignalRecord>>>,
}

impl SignalRepository {
    pub fn new() -> Self {
        Self {
            signals: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Swaps the entire held set in one assignment under the lock; readers
    /// never observe a partial update.
    pub fn replace(&self, records: Vec<SignalRecord>) {
        let mut signals = self.signals.lock().unwrap();
        *signals = records;
    }

    /// The held set, in stored order. Empty before the first successful
    /// refresh.
    pub fn current(&self) -> Vec<SignalRecord> {
        self.signals.lock().unwrap().clone()
    }

    pub fn total_count(&self) -> usize {
        self.signals.lock().unwrap().len()
    }

    pub fn count_by_direction(&self, direction: Direction) -> usize {
        self.signals
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.direction == direction)
            .count()
    }
}
