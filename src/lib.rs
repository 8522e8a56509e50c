// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! # Simple Cache
//!
//! A thread-safe, fixed-capacity key/value cache with least-recently-used
//! eviction, meant to be embedded in-process.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         LruCache<V>                         │
//! │  • get(key) / set(key, value) under one exclusive lock      │
//! │  • Optional eviction callback, run synchronously            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                Index + Recency List (one unit)              │
//! │  • HashMap<String, slot> for O(1) lookup                    │
//! │  • Arena doubly linked list, MRU head → LRU tail            │
//! │  • Eviction always removes exactly the tail                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use simple_cache::{CacheOptions, LruCache};
//!
//! let options = CacheOptions::new().on_item_evicted(|entry| {
//!     println!("evicted {}", entry.key);
//! });
//! let cache = LruCache::with_options(2, options).expect("capacity is positive");
//!
//! cache.set("Key#1", "Key#1Value".to_string()).unwrap();
//! cache.set("Key#2", "Key#2Value".to_string()).unwrap();
//! cache.set("Key#3", "Key#3Value".to_string()).unwrap(); // evicts Key#1
//!
//! assert_eq!(cache.get("Key#1"), None);
//! assert_eq!(cache.len(), 2);
//! ```
//!
//! ## Modules
//!
//! - [`lru`]: the [`LruCache`] itself and its statistics
//! - [`config`]: deserializable [`CacheConfig`]
//! - [`options`]: eviction callback and naming via [`CacheOptions`]
//! - [`metrics`]: `metrics` facade instrumentation

pub mod config;
pub mod entry;
pub mod error;
pub mod lru;
pub mod metrics;
pub mod options;

pub use config::{CacheConfig, DEFAULT_CAPACITY};
pub use entry::CacheEntry;
pub use error::CacheError;
pub use lru::stats::CacheStats;
pub use lru::LruCache;
pub use options::{CacheOptions, EvictionCallback};
