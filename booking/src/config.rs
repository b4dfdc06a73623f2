//! Booking engine configuration.
//!
//! Configuration values are provided by the application at wiring time,
//! not read from ambient globals.

use crate::keys::CACHE_TTL_SECONDS;

/// Configuration for the booking services and their stores.
#[derive(Debug, Clone)]
pub struct BookingConfig {
    /// Redis connection URL (e.g., "redis://127.0.0.1:6379").
    pub redis_url: String,

    /// PostgreSQL connection URL.
    pub database_url: String,

    /// Cache entry time-to-live in seconds.
    ///
    /// Default: 86400 (24 hours). Changing this changes the maximum
    /// staleness window, not correctness.
    pub cache_ttl_seconds: u64,

    /// Sender address for booking-confirmation emails.
    pub notification_from: String,
}

impl BookingConfig {
    /// Create a new configuration with default TTL and sender.
    #[must_use]
    pub fn new(redis_url: String, database_url: String) -> Self {
        Self {
            redis_url,
            database_url,
            cache_ttl_seconds: CACHE_TTL_SECONDS,
            notification_from: "bookings@localhost".to_string(),
        }
    }

    /// Set the cache TTL.
    #[must_use]
    pub const fn with_cache_ttl(mut self, seconds: u64) -> Self {
        self.cache_ttl_seconds = seconds;
        self
    }

    /// Set the confirmation-email sender address.
    #[must_use]
    pub fn with_notification_from(mut self, from: impl Into<String>) -> Self {
        self.notification_from = from.into();
        self
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self::new(
            "redis://127.0.0.1:6379".to_string(),
            "postgresql://localhost/booking".to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_standard_ttl() {
        let config = BookingConfig::default();
        assert_eq!(config.cache_ttl_seconds, 86_400);
    }

    #[test]
    fn builders_override() {
        let config = BookingConfig::default()
            .with_cache_ttl(60)
            .with_notification_from("noreply@example.com");
        assert_eq!(config.cache_ttl_seconds, 60);
        assert_eq!(config.notification_from, "noreply@example.com");
    }
}
