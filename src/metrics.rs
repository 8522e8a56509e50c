// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Metrics instrumentation for the cache.
//!
//! Uses the `metrics` crate for backend-agnostic metrics collection.
//! The host application is responsible for installing a recorder
//! (Prometheus, OTEL, etc.); without one every call is a no-op.
//!
//! # Metric Naming Convention
//! - `simple_cache_` prefix for all metrics
//! - `_total` suffix for counters
//!
//! # Labels
//! - `cache`: the cache name from its config
//! - `outcome`: hit, miss
//! - `kind`: insert, replace

use metrics::{counter, gauge};

/// Record a `get` outcome
pub fn record_lookup(cache: &str, hit: bool) {
    let outcome = if hit { "hit" } else { "miss" };
    counter!(
        "simple_cache_lookups_total",
        "cache" => cache.to_string(),
        "outcome" => outcome
    )
    .increment(1);
}

/// Record a `set`, distinguishing new keys from replaced values
pub fn record_write(cache: &str, replaced: bool) {
    let kind = if replaced { "replace" } else { "insert" };
    counter!(
        "simple_cache_writes_total",
        "cache" => cache.to_string(),
        "kind" => kind
    )
    .increment(1);
}

/// Record a capacity eviction
pub fn record_eviction(cache: &str) {
    counter!("simple_cache_evictions_total", "cache" => cache.to_string()).increment(1);
}

/// Record an explicit removal
pub fn record_removal(cache: &str, count: usize) {
    counter!("simple_cache_removals_total", "cache" => cache.to_string()).increment(count as u64);
}

/// Record an index/list disagreement
pub fn record_corruption(cache: &str, operation: &str) {
    counter!(
        "simple_cache_corruption_detected_total",
        "cache" => cache.to_string(),
        "operation" => operation.to_string()
    )
    .increment(1);
}

/// Set current entry count
pub fn set_entries(cache: &str, count: usize) {
    gauge!("simple_cache_entries", "cache" => cache.to_string()).set(count as f64);
}

/// Set configured capacity
pub fn set_capacity(cache: &str, capacity: usize) {
    gauge!("simple_cache_capacity", "cache" => cache.to_string()).set(capacity as f64);
}
