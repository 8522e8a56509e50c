// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Caller-supplied hooks for a cache instance.
//!
//! # Example
//!
//! ```
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//! use simple_cache::{CacheOptions, LruCache};
//!
//! let evicted = Arc::new(AtomicUsize::new(0));
//! let counter = evicted.clone();
//!
//! let options = CacheOptions::new().on_item_evicted(move |_entry| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! let cache = LruCache::with_options(1, options).unwrap();
//! cache.set("a", 1).unwrap();
//! cache.set("b", 2).unwrap();
//! assert_eq!(evicted.load(Ordering::SeqCst), 1);
//! ```

use std::fmt;

use crate::entry::CacheEntry;

/// Called with the evicted entry while the cache lock is held.
///
/// The callback must not call back into the same cache: the lock is not
/// reentrant. Slow callbacks stall every other caller.
pub type EvictionCallback<V> = Box<dyn Fn(CacheEntry<V>) + Send + Sync>;

/// Options for an [`LruCache`](crate::LruCache).
pub struct CacheOptions<V> {
    pub(crate) name: Option<String>,
    pub(crate) on_item_evicted: Option<EvictionCallback<V>>,
}

impl<V> CacheOptions<V> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: None,
            on_item_evicted: None,
        }
    }

    /// Notify `callback` whenever capacity pressure evicts an entry.
    ///
    /// Replacing the value of an existing key is not an eviction and never
    /// triggers the callback.
    #[must_use]
    pub fn on_item_evicted<F>(mut self, callback: F) -> Self
    where
        F: Fn(CacheEntry<V>) + Send + Sync + 'static,
    {
        self.on_item_evicted = Some(Box::new(callback));
        self
    }

    /// Label used in log fields and metrics. Overrides the config name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn has_eviction_callback(&self) -> bool {
        self.on_item_evicted.is_some()
    }
}

impl<V> Default for CacheOptions<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for CacheOptions<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheOptions")
            .field("name", &self.name)
            .field("on_item_evicted", &self.on_item_evicted.as_ref().map(|_| "Fn(CacheEntry)"))
            .finish()
    }
}
