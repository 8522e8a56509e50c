// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Thread-safe LRU cache.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       LruCache<V>                            │
//! │  ┌────────────────────────────────────────────────────────┐  │
//! │  │                 Mutex<Inner<V>>                         │  │
//! │  │   index: HashMap<String, slot>                          │  │
//! │  │   list:  RecencyList<V>  (arena, MRU head → LRU tail)   │  │
//! │  └────────────────────────────────────────────────────────┘  │
//! │  on_item_evicted: Option<Fn(CacheEntry<V>)>                  │
//! │  counters: atomics (hits, misses, inserts, ...)              │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation holds the one lock for its whole duration, so the
//! index and the list are always observed as a consistent pair. Both
//! `get` and `set` are O(1): a hash lookup plus a list splice.

pub(crate) mod list;
pub mod stats;

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

use parking_lot::Mutex;
use tracing::{debug, error, trace};

use crate::config::{CacheConfig, DEFAULT_CAPACITY};
use crate::entry::CacheEntry;
use crate::error::CacheError;
use crate::metrics;
use crate::options::{CacheOptions, EvictionCallback};

use list::RecencyList;
use stats::{CacheStats, Counters};

/// Upper bound on slots reserved at construction; larger caches grow on demand.
const PREALLOCATE_LIMIT: usize = 1024;

/// Index and recency list, only ever touched together under the lock.
struct Inner<V> {
    index: HashMap<String, usize>,
    list: RecencyList<V>,
}

impl<V> Inner<V> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            index: HashMap::with_capacity(capacity.min(PREALLOCATE_LIMIT)),
            list: RecencyList::with_capacity(capacity.min(PREALLOCATE_LIMIT)),
        }
    }

    fn check_sizes(&self) -> Result<(), CacheError> {
        if self.index.len() != self.list.len() {
            return Err(CacheError::corruption(
                "*",
                format!(
                    "index holds {} keys but recency list holds {} entries",
                    self.index.len(),
                    self.list.len()
                ),
            ));
        }
        Ok(())
    }

    /// Slot for `key`, verified against the entry stored there.
    fn locate(&self, key: &str) -> Result<Option<usize>, CacheError> {
        let Some(&idx) = self.index.get(key) else {
            return Ok(None);
        };
        match self.list.get(idx) {
            Some(entry) if entry.key == key => Ok(Some(idx)),
            Some(entry) => Err(CacheError::corruption(
                key,
                format!("index points at slot {} which holds '{}'", idx, entry.key),
            )),
            None => Err(CacheError::corruption(
                key,
                format!("index points at vacant slot {}", idx),
            )),
        }
    }

    /// Mark as most recently used.
    fn touch(&mut self, key: &str, idx: usize) -> Result<&mut CacheEntry<V>, CacheError> {
        self.list
            .move_to_front(idx)
            .ok_or_else(|| CacheError::corruption(key, format!("slot {} vanished", idx)))?;
        let entry = self
            .list
            .get_mut(idx)
            .ok_or_else(|| CacheError::corruption(key, format!("slot {} vanished", idx)))?;
        entry.record_access();
        Ok(entry)
    }

    /// Drop the tail from both the list and the index.
    fn evict_lru(&mut self) -> Result<CacheEntry<V>, CacheError> {
        let (idx, entry) = self.list.pop_back().ok_or_else(|| {
            CacheError::corruption(
                "*",
                format!("recency list is empty but index holds {} keys", self.index.len()),
            )
        })?;
        match self.index.remove(&entry.key) {
            Some(indexed) if indexed == idx => Ok(entry),
            Some(indexed) => Err(CacheError::corruption(
                &entry.key,
                format!("tail was slot {} but index pointed at slot {}", idx, indexed),
            )),
            None => Err(CacheError::corruption(&entry.key, "tail entry missing from index")),
        }
    }

    fn insert(&mut self, key: String, value: V) -> Result<(), CacheError> {
        match self.index.entry(key) {
            Entry::Occupied(slot) => Err(CacheError::corruption(
                slot.key(),
                format!("key already indexed at slot {}", slot.get()),
            )),
            Entry::Vacant(slot) => {
                let idx = self.list.push_front(CacheEntry::new(slot.key().clone(), value));
                slot.insert(idx);
                Ok(())
            }
        }
    }

    fn remove(&mut self, key: &str) -> Result<Option<CacheEntry<V>>, CacheError> {
        let Some(idx) = self.index.remove(key) else {
            return Ok(None);
        };
        self.list
            .remove(idx)
            .map(Some)
            .ok_or_else(|| {
                CacheError::corruption(key, format!("index pointed at vacant slot {}", idx))
            })
    }
}

/// A fixed-capacity, string-keyed cache evicting the least recently used
/// entry when full.
///
/// `get` and `set` both count as a use. Values are handed out by clone;
/// store an `Arc<T>` to share rather than copy.
///
/// # Example
///
/// ```
/// use simple_cache::LruCache;
///
/// let cache = LruCache::new(2).unwrap();
/// cache.set("Key#1", "one").unwrap();
/// cache.set("Key#2", "two").unwrap();
///
/// // Touch Key#1 so Key#2 becomes the eviction candidate
/// assert_eq!(cache.get("Key#1"), Some("one"));
///
/// cache.set("Key#3", "three").unwrap();
/// assert_eq!(cache.get("Key#2"), None);
/// assert_eq!(cache.len(), 2);
/// ```
pub struct LruCache<V> {
    name: String,
    capacity: usize,
    inner: Mutex<Inner<V>>,
    on_item_evicted: Option<EvictionCallback<V>>,
    counters: Counters,
}

impl<V> LruCache<V> {
    /// Create a cache holding at most `capacity` entries.
    ///
    /// Zero, negative, or out-of-range capacities fail with
    /// [`CacheError::InvalidConfiguration`].
    pub fn new<C>(capacity: C) -> Result<Self, CacheError>
    where
        C: TryInto<usize>,
    {
        Self::with_options(capacity, CacheOptions::new())
    }

    pub fn with_options<C>(capacity: C, options: CacheOptions<V>) -> Result<Self, CacheError>
    where
        C: TryInto<usize>,
    {
        let capacity = capacity.try_into().map_err(|_| {
            CacheError::InvalidConfiguration("capacity must be a positive integer".into())
        })?;
        Self::from_config(&CacheConfig::with_capacity(capacity), options)
    }

    pub fn from_config(config: &CacheConfig, options: CacheOptions<V>) -> Result<Self, CacheError> {
        config.validate()?;
        let CacheOptions {
            name,
            on_item_evicted,
        } = options;
        let name = name.unwrap_or_else(|| config.name.clone());
        Ok(Self::build(name, config.capacity, on_item_evicted))
    }

    fn build(name: String, capacity: usize, on_item_evicted: Option<EvictionCallback<V>>) -> Self {
        debug!(
            cache = %name,
            capacity,
            eviction_callback = on_item_evicted.is_some(),
            "Created LRU cache"
        );
        metrics::set_capacity(&name, capacity);
        metrics::set_entries(&name, 0);
        Self {
            inner: Mutex::new(Inner::with_capacity(capacity)),
            name,
            capacity,
            on_item_evicted,
            counters: Counters::default(),
        }
    }

    /// Look up `key`, marking it most recently used on a hit.
    pub fn get(&self, key: &str) -> Option<V>
    where
        V: Clone,
    {
        let mut inner = self.inner.lock();
        let found = inner
            .locate(key)
            .and_then(|slot| match slot {
                Some(idx) => inner.touch(key, idx).map(|entry| Some(entry.value.clone())),
                None => Ok(None),
            });
        drop(inner);

        match found {
            Ok(Some(value)) => {
                self.counters.hit();
                metrics::record_lookup(&self.name, true);
                trace!(cache = %self.name, key, "Cache hit");
                Some(value)
            }
            Ok(None) => {
                self.counters.miss();
                metrics::record_lookup(&self.name, false);
                trace!(cache = %self.name, key, "Cache miss");
                None
            }
            Err(e) => {
                self.report_corruption("get", &e);
                None
            }
        }
    }

    /// Insert or replace the value for `key`, marking it most recently used.
    ///
    /// A new key arriving at a full cache first evicts the least recently
    /// used entry and passes it to the eviction callback. Replacing an
    /// existing key never evicts.
    #[tracing::instrument(level = "trace", skip(self, key, value), fields(cache = %self.name))]
    pub fn set(&self, key: impl Into<String>, value: V) -> Result<(), CacheError> {
        let key = key.into();
        let mut inner = self.inner.lock();
        let result = self.set_locked(&mut inner, key, value);
        metrics::set_entries(&self.name, inner.index.len());
        drop(inner);

        if let Err(e) = &result {
            self.report_corruption("set", e);
        }
        result
    }

    fn set_locked(&self, inner: &mut Inner<V>, key: String, value: V) -> Result<(), CacheError> {
        inner.check_sizes()?;

        if let Some(idx) = inner.locate(&key)? {
            inner.touch(&key, idx)?.value = value;
            self.counters.update();
            metrics::record_write(&self.name, true);
            trace!(key = %key, "Replaced value");
            return Ok(());
        }

        if inner.index.len() >= self.capacity {
            let evicted = inner.evict_lru()?;
            self.notify_evicted(evicted);
        }

        trace!(key = %key, "Inserted value");
        inner.insert(key, value)?;
        self.counters.insert();
        metrics::record_write(&self.name, false);
        Ok(())
    }

    // Runs with the lock held so notifications stay ordered with evictions.
    fn notify_evicted(&self, entry: CacheEntry<V>) {
        self.counters.eviction();
        metrics::record_eviction(&self.name);
        debug!(
            cache = %self.name,
            key = %entry.key,
            idle = ?entry.idle(),
            age = ?entry.age(),
            access_count = entry.access_count,
            "Evicted least recently used entry"
        );
        if let Some(callback) = &self.on_item_evicted {
            callback(entry);
        }
    }

    fn report_corruption(&self, operation: &str, err: &CacheError) {
        error!(cache = %self.name, operation, error = %err, "Index and recency list disagree");
        metrics::record_corruption(&self.name, operation);
    }

    /// Read `key` without changing its recency or access time.
    pub fn peek(&self, key: &str) -> Option<V>
    where
        V: Clone,
    {
        self.peek_with(key, |entry| entry.value.clone())
    }

    /// Snapshot of the full entry for `key`, without touching it.
    pub fn peek_entry(&self, key: &str) -> Option<CacheEntry<V>>
    where
        V: Clone,
    {
        self.peek_with(key, CacheEntry::clone)
    }

    fn peek_with<T>(&self, key: &str, read: impl FnOnce(&CacheEntry<V>) -> T) -> Option<T> {
        let inner = self.inner.lock();
        let located = inner.locate(key);
        match located {
            Ok(slot) => slot.and_then(|idx| inner.list.get(idx)).map(read),
            Err(e) => {
                drop(inner);
                self.report_corruption("peek", &e);
                None
            }
        }
    }

    /// Presence check that does not count as a use.
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.lock().index.contains_key(key)
    }

    /// Remove `key` explicitly. Not an eviction: the callback is not called.
    pub fn remove(&self, key: &str) -> Option<V> {
        let mut inner = self.inner.lock();
        let removed = inner.remove(key);
        if matches!(removed, Ok(Some(_))) {
            metrics::set_entries(&self.name, inner.index.len());
        }
        drop(inner);

        match removed {
            Ok(Some(entry)) => {
                metrics::record_removal(&self.name, 1);
                debug!(cache = %self.name, key, "Removed entry");
                Some(entry.value)
            }
            Ok(None) => None,
            Err(e) => {
                self.report_corruption("remove", &e);
                None
            }
        }
    }

    /// Drop every entry without notifying the eviction callback.
    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        let count = inner.index.len();
        inner.index.clear();
        inner.list.clear();
        metrics::set_entries(&self.name, 0);
        drop(inner);

        metrics::record_removal(&self.name, count);
        debug!(cache = %self.name, count, "Cleared cache");
    }

    /// Keys from most to least recently used. Does not touch anything.
    pub fn keys(&self) -> Vec<String> {
        self.inner.lock().list.iter().map(|e| e.key.clone()).collect()
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.inner.lock().index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stats(&self) -> CacheStats {
        self.counters.snapshot(self.len(), self.capacity)
    }
}

impl<V> Default for LruCache<V> {
    fn default() -> Self {
        Self::build(CacheConfig::default().name, DEFAULT_CAPACITY, None)
    }
}

impl<V> fmt::Debug for LruCache<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("name", &self.name)
            .field("capacity", &self.capacity)
            .field("len", &self.len())
            .field("eviction_callback", &self.on_item_evicted.is_some())
            .finish()
    }
}
