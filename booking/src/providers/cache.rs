//! Cache store trait.

use crate::error::Result;
use std::future::Future;

/// Key/value cache with per-entry expiry.
///
/// Values are serialized strings (JSON); keys come from [`crate::keys`].
/// The cache provides no consistency guarantees of its own — coherence is
/// the services' job, via write-invalidate. Cache transport failures
/// propagate; they are not gracefully degraded here.
pub trait CacheStore: Send + Sync {
    /// Get a value, or `None` if the key is absent or expired.
    ///
    /// # Errors
    ///
    /// Returns an error if the cache is unreachable.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>>> + Send;

    /// Set a value with an expiry in seconds.
    ///
    /// # Errors
    ///
    /// Returns an error if the cache is unreachable.
    fn set(
        &self,
        key: &str,
        value: &str,
        ttl_seconds: u64,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Delete a key. Deleting an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the cache is unreachable.
    fn delete(&self, key: &str) -> impl Future<Output = Result<()>> + Send;
}
