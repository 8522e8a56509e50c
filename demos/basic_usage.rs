// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Basic simple-cache usage example.
//!
//! Demonstrates:
//! 1. Building a cache from config with an eviction callback
//! 2. Filling it past capacity
//! 3. Protecting an entry by reading it
//! 4. Displaying stats and metrics
//!
//! # Run
//!
//! ```bash
//! cargo run --example basic_usage
//! ```

use metrics_util::debugging::{DebugValue, DebuggingRecorder, Snapshotter};
use simple_cache::{CacheConfig, CacheOptions, LruCache};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Install metrics recorder (captures everything the cache emits)
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();
    recorder.install().expect("failed to install metrics recorder");

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .compact()
        .init();

    let config = CacheConfig {
        name: "demo".into(),
        capacity: 3,
    };
    let options = CacheOptions::new().on_item_evicted(|entry| {
        println!(
            "  evicted {} = {:?} (idle {:?}, {} touches)",
            entry.key,
            entry.value,
            entry.idle(),
            entry.access_count
        );
    });
    println!("Eviction callback registered: {}", options.has_eviction_callback());
    let cache: LruCache<String> = LruCache::from_config(&config, options)?;

    println!("Filling cache (capacity {})", cache.capacity());
    for i in 1..=3 {
        cache.set(format!("Key#{}", i), format!("Key#{}Value", i))?;
    }

    println!("Reading Key#1 so it is no longer the oldest");
    if let Some(value) = cache.get("Key#1") {
        println!("  Key#1 = {}", value);
    }

    println!("Inserting Key#4 and Key#5");
    cache.set("Key#4", "Key#4Value".to_string())?;
    cache.set("Key#5", "Key#5Value".to_string())?;

    println!("Recency order (MRU first): {:?}", cache.keys());
    let stats = cache.stats();
    println!("Stats: {:?}", stats);
    println!("Utilization: {:.0}%", stats.utilization() * 100.0);

    dump_metrics(&snapshotter);
    Ok(())
}

fn dump_metrics(snapshotter: &Snapshotter) {
    println!("Metrics:");
    for (composite_key, _, _, value) in snapshotter.snapshot().into_vec() {
        let (_, key) = composite_key.into_parts();
        let labels: Vec<_> = key.labels().map(|l| format!("{}={}", l.key(), l.value())).collect();
        let rendered = match value {
            DebugValue::Counter(v) => v.to_string(),
            DebugValue::Gauge(v) => v.into_inner().to_string(),
            DebugValue::Histogram(samples) => format!("{} samples", samples.len()),
        };
        println!("  {}{{{}}} {}", key.name(), labels.join(","), rendered);
    }
}
