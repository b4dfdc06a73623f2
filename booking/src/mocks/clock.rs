//! Mock clock for testing.

use crate::providers::Clock;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};

/// Mock clock pinned to a settable instant.
#[derive(Debug, Clone)]
pub struct MockClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

#[allow(clippy::unwrap_used)]
impl MockClock {
    /// Create a clock pinned to the given instant.
    #[must_use]
    pub fn fixed(now: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    /// Move the clock.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap() = now;
    }
}

impl Clock for MockClock {
    #[allow(clippy::unwrap_used)]
    fn now_utc(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}
