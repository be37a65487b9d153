//! Daily memory cache
//!
//! Volatile, process-local cache tier: one `{day, record}` entry per
//! collection key. An entry is valid only while its day matches the current
//! content day; it is never evicted, only replaced wholesale or dropped at
//! process exit. Thread-safe via RwLock; updates are whole-entry
//! replacements, so concurrent writers simply last-write-win.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use serde_json::Value;

/// One cached record and the content day it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    pub day: String,
    pub record: Value,
}

/// Statistics about cache usage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of same-day cache hits.
    pub hits: u64,
    /// Number of misses (absent entry or stale day).
    pub misses: u64,
    /// Number of entries currently held.
    pub entry_count: u64,
}

impl CacheStats {
    /// Calculate the hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Per-collection daily cache.
#[derive(Debug, Default)]
pub struct DailyCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl DailyCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cached record for `collection`, but only if it was stored
    /// for `day`. A stale entry counts as a miss and is left in place for
    /// natural replacement.
    pub fn get(&self, collection: &str, day: &str) -> Option<Value> {
        let hit = self
            .entries
            .read()
            .ok()
            .and_then(|entries| {
                entries
                    .get(collection)
                    .filter(|entry| entry.day == day)
                    .map(|entry| entry.record.clone())
            });

        match hit {
            Some(record) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(record)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Replace the entry for `collection` with `{day, record}`.
    pub fn put(&self, collection: &str, day: &str, record: Value) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(
                collection.to_string(),
                CacheEntry {
                    day: day.to_string(),
                    record,
                },
            );
        }
    }

    /// Inspect the raw entry for a collection, regardless of day.
    pub fn entry(&self, collection: &str) -> Option<CacheEntry> {
        self.entries.read().ok()?.get(collection).cloned()
    }

    /// Drop every entry.
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }

    /// Number of entries currently held (fresh or stale).
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current usage statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entry_count: self.len() as u64,
        }
    }
}
