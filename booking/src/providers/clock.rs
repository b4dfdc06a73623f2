//! Clock trait.

use chrono::{DateTime, Utc};

/// Source of "now" for the in-the-past admission check.
///
/// Injected rather than read ambiently so the inclusive boundary
/// (a reservation at exactly "now" is accepted) is testable.
pub trait Clock: Send + Sync {
    /// Current instant.
    fn now_utc(&self) -> DateTime<Utc>;
}

/// System clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create a new system clock.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
