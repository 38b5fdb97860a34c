//! Profile Store Module
//!
//! Main store engine: a HashMap of profiles populated once at startup and
//! read lock-free for the rest of the process lifetime.

use std::collections::HashMap;
use std::time::Instant;

use tracing::{info, warn};

use crate::cache::{ProfileRecord, StoreCounters, StoreStats};
use crate::error::{ProfileError, Result};

// == Profile Store ==
/// In-memory profile store with O(1) point lookups.
///
/// Lifecycle: `Uninitialized --warm()--> Ready`, where `Ready` is terminal.
/// The mapping is only written during [`ProfileStore::warm`]; after that the
/// store is published to request handlers behind an `Arc` and every access
/// goes through `&self`. No lock is needed on the lookup path because the
/// warm-then-serve ordering establishes the happens-before edge.
#[derive(Debug, Default)]
pub struct ProfileStore {
    /// Id-to-profile mapping, frozen once warming completes
    profiles: HashMap<u64, ProfileRecord>,
    /// Set exactly once, at the end of warming
    ready: bool,
    /// Lookup hit/miss counters
    counters: StoreCounters,
}

impl ProfileStore {
    // == Constructor ==
    /// Creates an empty, not-yet-ready store.
    pub fn new() -> Self {
        Self {
            profiles: HashMap::new(),
            ready: false,
            counters: StoreCounters::new(),
        }
    }

    // == Warm ==
    /// Populates the store with `size` synthetic profiles, one per id in
    /// `1..=size`, then marks the store ready.
    ///
    /// Calling `warm` on an already-ready store is a logged no-op; the
    /// frozen mapping is never touched again.
    pub fn warm(&mut self, size: usize) {
        if self.ready {
            warn!("profile store already warmed, ignoring repeated warm call");
            return;
        }

        info!("warming profile store with {} records", size);
        let start = Instant::now();

        self.profiles.reserve(size);
        for id in 1..=size as u64 {
            self.profiles.insert(id, ProfileRecord::synthetic(id));
        }

        self.ready = true;
        info!(
            "profile store warmed with {} records in {:?}",
            self.profiles.len(),
            start.elapsed()
        );
    }

    // == Lookup ==
    /// Retrieves the profile for `id`.
    ///
    /// Returns `NotReady` if called before warming completed, so an empty
    /// map is never mistaken for a missing user. Ids below 1 and ids outside
    /// the warmed range are both reported as `NotFound`; the HTTP boundary
    /// decides which malformed inputs never reach this call.
    pub fn lookup(&self, id: i64) -> Result<&ProfileRecord> {
        if !self.ready {
            return Err(ProfileError::NotReady);
        }

        if id < 1 {
            self.counters.record_miss();
            return Err(ProfileError::NotFound(id));
        }

        match self.profiles.get(&(id as u64)) {
            Some(record) => {
                self.counters.record_hit();
                Ok(record)
            }
            None => {
                self.counters.record_miss();
                Err(ProfileError::NotFound(id))
            }
        }
    }

    // == Stats ==
    /// Returns a point-in-time snapshot of the store's state.
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            size: self.len(),
            ready: self.ready,
            hits: self.counters.hits(),
            misses: self.counters.misses(),
        }
    }

    // == Length ==
    /// Returns the number of warmed records.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    // == Is Empty ==
    /// Returns true if no records have been loaded.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
