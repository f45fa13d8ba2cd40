//! A small injectable TTL cache for the rendering layer.
//!
//! The selection engine never uses this — its own work is a handful of
//! integer hashes, cheaper than any cache lookup. What the rendering layer
//! does cache is data-store fetches (state/city/provider rows), and it
//! does so through an explicitly constructed `TtlCache` handed down from
//! setup code. There is no process-global instance to reach for.
//!
//! Expiry is lazy: an expired entry is evicted by the `get` that finds it,
//! and [`TtlCache::purge_expired`] exists for callers that want to sweep.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

/// An entry plus the instant it was written.
struct Stamped<V> {
    written: Instant,
    value: V,
}

/// A time-to-live cache with eviction-on-read.
pub struct TtlCache<K, V> {
    ttl: Duration,
    entries: HashMap<K, Stamped<V>>,
}

impl<K: Eq + Hash, V> TtlCache<K, V> {
    /// Create an empty cache whose entries live for `ttl` after insertion.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, entries: HashMap::new() }
    }

    /// Insert or replace the value for `key`, resetting its clock.
    pub fn insert(&mut self, key: K, value: V) {
        self.entries.insert(key, Stamped { written: Instant::now(), value });
    }

    /// Fetch a live value, evicting it first if its TTL has lapsed.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let expired = self
            .entries
            .get(key)
            .is_some_and(|stamped| stamped.written.elapsed() >= self.ttl);
        if expired {
            self.entries.remove(key);
        }
        self.entries.get(key).map(|stamped| &stamped.value)
    }

    /// Drop every entry whose TTL has lapsed.
    pub fn purge_expired(&mut self) {
        let ttl = self.ttl;
        self.entries.retain(|_, stamped| stamped.written.elapsed() < ttl);
    }

    /// Number of entries currently stored, expired or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
