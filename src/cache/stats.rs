//! Store Statistics Module
//!
//! Tracks lookup hits and misses without taking a lock on the read path.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

// == Store Counters ==
/// Lock-free hit/miss counters.
///
/// Lookups run through `&self` on a shared store, so the counters use
/// relaxed atomics rather than `&mut` fields.
#[derive(Debug, Default)]
pub struct StoreCounters {
    hits: AtomicU64,
    misses: AtomicU64,
}

impl StoreCounters {
    // == Constructor ==
    /// Creates counters with all values at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }
}

// == Store Stats ==
/// Point-in-time snapshot of the store's state, no side effects.
#[derive(Debug, Clone, Serialize)]
pub struct StoreStats {
    /// Number of records in the warmed mapping
    pub size: usize,
    /// Whether warming has completed
    pub ready: bool,
    /// Number of successful lookups
    pub hits: u64,
    /// Number of failed lookups
    pub misses: u64,
}

impl StoreStats {
    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
