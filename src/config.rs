// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Configuration for a cache instance.
//!
//! # Example
//!
//! ```
//! use simple_cache::{CacheConfig, DEFAULT_CAPACITY};
//!
//! // Minimal config (uses defaults)
//! let config = CacheConfig::default();
//! assert_eq!(config.capacity, DEFAULT_CAPACITY);
//!
//! // Named cache, useful when several caches report metrics side by side
//! let config = CacheConfig {
//!     name: "sessions".into(),
//!     capacity: 10_000,
//! };
//! assert!(config.validate().is_ok());
//! ```

use serde::Deserialize;

use crate::error::CacheError;

/// Capacity used when none is given.
pub const DEFAULT_CAPACITY: usize = 100;

/// Configuration for an [`LruCache`](crate::LruCache).
///
/// All fields have defaults, so an empty document deserializes to a
/// usable config.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CacheConfig {
    /// Label attached to log fields and metrics (default: "default")
    #[serde(default = "default_name")]
    pub name: String,

    /// Maximum number of live entries (default: 100)
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

fn default_name() -> String { "default".to_string() }
fn default_capacity() -> usize { DEFAULT_CAPACITY }

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            capacity: default_capacity(),
        }
    }
}

impl CacheConfig {
    /// Default config with a custom capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), CacheError> {
        if self.capacity == 0 {
            return Err(CacheError::InvalidConfiguration(
                "capacity must be a positive integer".into(),
            ));
        }
        if self.name.trim().is_empty() {
            return Err(CacheError::InvalidConfiguration(
                "cache name must not be empty".into(),
            ));
        }
        Ok(())
    }
}
