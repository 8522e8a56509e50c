// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Integration Tests for the LRU cache
//!
//! Exercises the public API only.
//!
//! # Running Tests
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//! - `happy_*` - Normal operation: construction, round trips, eviction order
//! - `callback_*` - Eviction notification semantics
//! - `failure_*` - Invalid construction

use std::sync::Arc;

use parking_lot::Mutex;
use simple_cache::{CacheConfig, CacheEntry, CacheError, CacheOptions, LruCache};

// =============================================================================
// Helpers
// =============================================================================

fn recording_cache(capacity: usize) -> (LruCache<String>, Arc<Mutex<Vec<CacheEntry<String>>>>) {
    let evicted = Arc::new(Mutex::new(Vec::new()));
    let sink = evicted.clone();
    let options = CacheOptions::new().on_item_evicted(move |entry| sink.lock().push(entry));
    (LruCache::with_options(capacity, options).unwrap(), evicted)
}

fn set(cache: &LruCache<String>, key: &str, value: &str) {
    cache.set(key, value.to_string()).unwrap();
}

// =============================================================================
// Happy path
// =============================================================================

#[test]
fn happy_initialized_correctly() {
    let cache: LruCache<String> = LruCache::new(100).unwrap();

    assert_eq!(cache.len(), 0);
    assert_eq!(cache.capacity(), 100);
    assert!(cache.is_empty());
}

#[test]
fn happy_max_int_capacity_builds_lazily() {
    let cache: LruCache<String> = LruCache::new(i32::MAX).unwrap();
    assert_eq!(cache.capacity(), i32::MAX as usize);

    for i in 0..10 {
        cache.set(format!("Key#{}", i), format!("Value#{}", i)).unwrap();
    }
    assert_eq!(cache.len(), 10);
    assert_eq!(cache.stats().evictions, 0);
}

#[test]
fn happy_get_on_empty_cache_is_absent() {
    let cache: LruCache<String> = LruCache::new(100).unwrap();
    assert_eq!(cache.get("SampleKey"), None);
}

#[test]
fn happy_get_returns_value_only_for_known_key() {
    let cache = LruCache::new(100).unwrap();
    set(&cache, "Key#2", "Key#2Value");

    assert_eq!(cache.get("Key#1"), None);
    assert_eq!(cache.get("Key#2").as_deref(), Some("Key#2Value"));
}

#[test]
fn happy_set_replaces_existing_value() {
    let cache = LruCache::new(100).unwrap();

    set(&cache, "Key#2", "Key#2Value");
    set(&cache, "Key#2", "Key#2Value-Replaced");

    assert_eq!(cache.get("Key#2").as_deref(), Some("Key#2Value-Replaced"));
    assert_eq!(cache.len(), 1);
}

#[test]
fn happy_evicts_first_item_when_never_reused() {
    let cache = LruCache::new(2).unwrap();

    set(&cache, "Key#1", "Key#1Value");
    set(&cache, "Key#2", "Key#2Value");
    set(&cache, "Key#3", "Key#3Value");

    assert_eq!(cache.len(), 2);
    assert_eq!(cache.get("Key#1"), None);
    assert_eq!(cache.get("Key#2").as_deref(), Some("Key#2Value"));
    assert_eq!(cache.get("Key#3").as_deref(), Some("Key#3Value"));
}

#[test]
fn happy_evicts_least_recently_used_item() {
    let cache = LruCache::new(3).unwrap();

    set(&cache, "Key#1", "Key#1Value");
    set(&cache, "Key#2", "Key#2Value");
    set(&cache, "Key#3", "Key#3Value");
    cache.get("Key#1");
    set(&cache, "Key#2", "Key#2Value_Replaced");
    set(&cache, "Key#4", "Key#4Value");

    assert_eq!(cache.len(), 3);
    assert_eq!(cache.get("Key#4").as_deref(), Some("Key#4Value"));
    assert_eq!(cache.get("Key#3"), None);
    assert_eq!(cache.get("Key#2").as_deref(), Some("Key#2Value_Replaced"));
    assert_eq!(cache.get("Key#1").as_deref(), Some("Key#1Value"));
}

#[test]
fn happy_keys_follow_recency_order() {
    let cache = LruCache::new(3).unwrap();
    set(&cache, "a", "1");
    set(&cache, "b", "2");
    set(&cache, "c", "3");
    cache.get("a");

    assert_eq!(cache.keys(), vec!["a", "c", "b"]);
}

#[test]
fn happy_peek_and_contains_do_not_protect_from_eviction() {
    let cache = LruCache::new(2).unwrap();
    set(&cache, "a", "1");
    set(&cache, "b", "2");

    assert!(cache.contains_key("a"));
    assert_eq!(cache.peek("a").as_deref(), Some("1"));
    set(&cache, "c", "3");

    assert!(!cache.contains_key("a"));
    assert!(cache.contains_key("b"));
}

#[test]
fn happy_remove_and_clear() {
    let (cache, evicted) = recording_cache(3);
    set(&cache, "a", "1");
    set(&cache, "b", "2");
    set(&cache, "c", "3");

    assert_eq!(cache.remove("b").as_deref(), Some("2"));
    assert_eq!(cache.remove("b"), None);
    assert_eq!(cache.len(), 2);

    // Freed capacity means the next insert does not evict
    set(&cache, "d", "4");
    assert_eq!(cache.len(), 3);

    cache.clear();
    assert!(cache.is_empty());
    assert_eq!(cache.get("a"), None);
    assert!(evicted.lock().is_empty(), "remove and clear are not evictions");
}

#[test]
fn happy_stats_track_operations() {
    let cache = LruCache::new(2).unwrap();
    set(&cache, "a", "1");
    set(&cache, "b", "2");
    set(&cache, "a", "1b");
    set(&cache, "c", "3");
    cache.get("a");
    cache.get("b");

    let stats = cache.stats();
    assert_eq!(stats.inserts, 3);
    assert_eq!(stats.updates, 1);
    assert_eq!(stats.evictions, 1);
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.entry_count, 2);
    assert_eq!(stats.capacity, 2);
    assert!((stats.hit_rate - 0.5).abs() < f64::EPSILON);
}

#[test]
fn happy_from_config() {
    let config: CacheConfig = serde_json::from_str(r#"{"name": "tokens", "capacity": 2}"#).unwrap();
    let cache: LruCache<u64> = LruCache::from_config(&config, CacheOptions::new()).unwrap();

    assert_eq!(cache.name(), "tokens");
    assert_eq!(cache.capacity(), 2);
}

#[test]
fn happy_shared_values_are_not_copied() {
    let cache = LruCache::new(2).unwrap();
    let value = Arc::new(vec![1u8, 2, 3]);
    cache.set("blob", value.clone()).unwrap();

    let fetched = cache.get("blob").unwrap();
    assert!(Arc::ptr_eq(&value, &fetched));
}

// =============================================================================
// Eviction callback
// =============================================================================

#[test]
fn callback_fires_once_with_first_inserted_entry() {
    let (cache, evicted) = recording_cache(2);

    set(&cache, "Key#1", "Key#1Value");
    set(&cache, "Key#2", "Key#2Value");
    set(&cache, "Key#3", "Key#3Value");

    assert_eq!(cache.len(), 2);
    let evicted = evicted.lock();
    assert_eq!(evicted.len(), 1);
    assert_eq!(evicted[0].key, "Key#1");
    assert_eq!(evicted[0].value, "Key#1Value");
}

#[test]
fn callback_not_fired_on_replace() {
    let (cache, evicted) = recording_cache(1);

    set(&cache, "K", "v1");
    set(&cache, "K", "v2");

    assert!(evicted.lock().is_empty());
    assert_eq!(cache.get("K").as_deref(), Some("v2"));
}

#[test]
fn callback_sees_each_eviction_in_order() {
    let (cache, evicted) = recording_cache(2);

    for i in 0..6 {
        set(&cache, &format!("k{}", i), "v");
    }

    let keys: Vec<String> = evicted.lock().iter().map(|e| e.key.clone()).collect();
    assert_eq!(keys, vec!["k0", "k1", "k2", "k3"]);
}

#[test]
fn callback_entry_carries_last_access() {
    let (cache, evicted) = recording_cache(1);
    set(&cache, "a", "1");
    let touched = cache.peek_entry("a").unwrap().last_access;
    set(&cache, "b", "2");

    assert_eq!(evicted.lock()[0].last_access, touched);
}

// =============================================================================
// Failure scenarios
// =============================================================================

#[test]
fn failure_zero_capacity() {
    let result = LruCache::<String>::new(0);
    assert!(matches!(result, Err(CacheError::InvalidConfiguration(_))));
}

#[test]
fn failure_negative_capacity() {
    let result = LruCache::<String>::new(-1);
    assert!(matches!(result, Err(CacheError::InvalidConfiguration(_))));
}

#[test]
fn failure_invalid_config() {
    let config = CacheConfig::with_capacity(0);
    let result = LruCache::<String>::from_config(&config, CacheOptions::new());
    assert!(matches!(result, Err(CacheError::InvalidConfiguration(_))));
}
