//! Client Statistics Module
//!
//! Tracks the number of cached endpoints and failed fetches.

use serde::Serialize;

// == Client Stats ==
/// Snapshot of the fetch client's counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ClientStats {
    /// Number of endpoints currently cached
    pub cache_size: usize,
    /// Total failed fetches since startup, never reset
    pub errors: u64,
}

impl ClientStats {
    // == Constructor ==
    /// Creates a new ClientStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Error ==
    /// Increments the error counter.
    pub fn record_error(&mut self) {
        self.errors += 1;
    }

    // == Update Cache Size ==
    /// Updates the cached endpoint count.
    pub fn set_cache_size(&mut self, count: usize) {
        self.cache_size = count;
    }
}
