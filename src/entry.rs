// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

use std::time::{Duration, Instant};

/// A single cached value together with its access metadata.
///
/// Recency ordering is positional inside the cache; `last_access` and
/// `access_count` are informational and handed to the eviction callback.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    pub key: String,
    pub value: V,
    pub created_at: Instant,
    pub last_access: Instant,
    /// Touches (gets and replacing sets) since the entry was created.
    pub access_count: u64,
}

impl<V> CacheEntry<V> {
    pub fn new(key: String, value: V) -> Self {
        let now = Instant::now();
        Self {
            key,
            value,
            created_at: now,
            last_access: now,
            access_count: 0,
        }
    }

    pub fn record_access(&mut self) {
        self.last_access = Instant::now();
        self.access_count = self.access_count.saturating_add(1);
    }

    /// Time since the entry was last touched.
    pub fn idle(&self) -> Duration {
        self.last_access.elapsed()
    }

    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }
}
