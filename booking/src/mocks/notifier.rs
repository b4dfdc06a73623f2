//! Mock notifier for testing.

use crate::error::{BookingError, Result};
use crate::providers::BookingNotifier;
use crate::state::Reservation;
use std::sync::{Arc, Mutex};

/// Mock notifier recording every confirmation it is asked to send.
///
/// Construct with [`failing`](MockNotifier::failing) to make every send
/// fail, for asserting that the admission path swallows dispatch errors.
#[derive(Debug, Clone, Default)]
pub struct MockNotifier {
    sent: Arc<Mutex<Vec<(String, Reservation)>>>,
    fail: bool,
}

#[allow(clippy::unwrap_used)]
impl MockNotifier {
    /// Create a mock notifier that records sends.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock notifier whose every send fails.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            fail: true,
        }
    }

    /// Recorded (recipient, reservation) pairs.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn sent(&self) -> Vec<(String, Reservation)> {
        self.sent.lock().unwrap().clone()
    }
}

impl BookingNotifier for MockNotifier {
    async fn send_booking_confirmation(&self, to: &str, reservation: &Reservation) -> Result<()> {
        if self.fail {
            return Err(BookingError::Email("mock transport down".to_string()));
        }
        self.sent
            .lock()
            .map_err(|_| BookingError::Email("mock lock poisoned".to_string()))?
            .push((to.to_string(), reservation.clone()));
        Ok(())
    }
}
