// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Rejected at construction; no cache instance is produced.
    #[error("Invalid cache configuration: {0}")]
    InvalidConfiguration(String),

    /// The key index and the recency list disagree about an entry.
    #[error("Cache corruption detected for '{key}': {detail}")]
    Corruption {
        key: String,
        detail: String,
    },
}

impl CacheError {
    pub(crate) fn corruption(key: &str, detail: impl Into<String>) -> Self {
        Self::Corruption {
            key: key.to_string(),
            detail: detail.into(),
        }
    }

    /// Whether this error signals a broken internal invariant.
    #[must_use]
    pub fn is_corruption(&self) -> bool {
        matches!(self, Self::Corruption { .. })
    }
}
