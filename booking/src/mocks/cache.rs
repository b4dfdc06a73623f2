//! Mock cache store for testing.

use crate::error::{BookingError, Result};
use crate::providers::CacheStore;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// One stored cache entry: value and the TTL it was set with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockEntry {
    /// Serialized value.
    pub value: String,
    /// TTL in seconds passed to `set`.
    pub ttl_seconds: u64,
}

/// Mock cache store backed by an in-memory map.
///
/// Entries never expire; tests assert on the recorded TTL instead. Hit and
/// miss counters let tests distinguish cache-served reads from store-served
/// ones.
#[derive(Debug, Clone, Default)]
pub struct MockCacheStore {
    entries: Arc<Mutex<HashMap<String, MockEntry>>>,
    hits: Arc<Mutex<u64>>,
    misses: Arc<Mutex<u64>>,
}

#[allow(clippy::unwrap_used)]
impl MockCacheStore {
    /// Create a new mock cache store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored entry for a key, if any.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn entry(&self, key: &str) -> Option<MockEntry> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    /// Returns `true` if the key is present.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.lock().unwrap().contains_key(key)
    }

    /// Number of `get` calls that found a value.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn hits(&self) -> u64 {
        *self.hits.lock().unwrap()
    }

    /// Number of `get` calls that found nothing.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn misses(&self) -> u64 {
        *self.misses.lock().unwrap()
    }

    /// Seed an entry directly, bypassing the trait.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn seed(&self, key: &str, value: &str, ttl_seconds: u64) {
        self.entries.lock().unwrap().insert(
            key.to_string(),
            MockEntry {
                value: value.to_string(),
                ttl_seconds,
            },
        );
    }
}

impl CacheStore for MockCacheStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| BookingError::Cache("mock lock poisoned".to_string()))?;
        let value = entries.get(key).map(|e| e.value.clone());

        let counter = if value.is_some() { &self.hits } else { &self.misses };
        *counter
            .lock()
            .map_err(|_| BookingError::Cache("mock lock poisoned".to_string()))? += 1;

        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<()> {
        self.entries
            .lock()
            .map_err(|_| BookingError::Cache("mock lock poisoned".to_string()))?
            .insert(
                key.to_string(),
                MockEntry {
                    value: value.to_string(),
                    ttl_seconds,
                },
            );
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.entries
            .lock()
            .map_err(|_| BookingError::Cache("mock lock poisoned".to_string()))?
            .remove(key);
        Ok(())
    }
}
