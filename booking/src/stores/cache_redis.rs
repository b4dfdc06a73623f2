//! Redis-based cache store implementation.
//!
//! Entries are JSON strings with a per-key TTL; coherence is owned by the
//! services (write-invalidate), not by Redis.
//!
//! # Example
//!
//! ```no_run
//! use booking::stores::RedisCacheStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let cache = RedisCacheStore::new("redis://127.0.0.1:6379").await?;
//! # Ok(())
//! # }
//! ```

use crate::error::{BookingError, Result};
use crate::providers::CacheStore;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};
use tracing::debug;

/// Redis cache store with connection pooling via `ConnectionManager`.
#[derive(Clone)]
pub struct RedisCacheStore {
    conn_manager: ConnectionManager,
}

impl RedisCacheStore {
    /// Create a new Redis cache store.
    ///
    /// # Arguments
    ///
    /// * `redis_url` - Redis connection URL (e.g., "redis://127.0.0.1:6379")
    ///
    /// # Errors
    ///
    /// Returns an error if the connection to Redis fails.
    pub async fn new(redis_url: &str) -> Result<Self> {
        let client = Client::open(redis_url)
            .map_err(|e| BookingError::Cache(format!("failed to create Redis client: {e}")))?;

        let conn_manager = ConnectionManager::new(client).await.map_err(|e| {
            BookingError::Cache(format!("failed to create Redis connection manager: {e}"))
        })?;

        Ok(Self { conn_manager })
    }
}

impl CacheStore for RedisCacheStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.conn_manager.clone();

        let value: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| BookingError::Cache(format!("failed to get {key}: {e}")))?;

        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<()> {
        let mut conn = self.conn_manager.clone();

        let _: () = conn
            .set_ex(key, value, ttl_seconds)
            .await
            .map_err(|e| BookingError::Cache(format!("failed to set {key}: {e}")))?;

        debug!(key = %key, ttl_seconds, "Cache entry set");

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut conn = self.conn_manager.clone();

        let _: () = conn
            .del(key)
            .await
            .map_err(|e| BookingError::Cache(format!("failed to delete {key}: {e}")))?;

        debug!(key = %key, "Cache entry invalidated");

        Ok(())
    }
}
