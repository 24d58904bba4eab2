//! Process-wide attempt counter.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic count of completed attempts.
///
/// Each call to `increment_and_get` returns a unique sequence number, even
/// under concurrent writers.
#[derive(Debug, Default)]
pub struct AttemptCounter {
    completed: AtomicU64,
}

impl AttemptCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed attempt and return its sequence number.
    pub fn increment_and_get(&self) -> u64 {
        self.completed.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Attempts completed so far.
    pub fn get(&self) -> u64 {
        self.completed.load(Ordering::SeqCst)
    }
}
