//! Console notifier for development and testing.

use crate::error::Result;
use crate::providers::BookingNotifier;
use crate::state::Reservation;
use tracing::info;

/// Console notifier.
///
/// Logs booking confirmations instead of sending them. Useful for
/// development where no SMTP relay is available.
#[derive(Clone, Debug, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    /// Create a new console notifier.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl BookingNotifier for ConsoleNotifier {
    async fn send_booking_confirmation(&self, to: &str, reservation: &Reservation) -> Result<()> {
        info!(
            to = %to,
            reservation_id = %reservation.id,
            venue_id = %reservation.venue_id,
            date = %reservation.date,
            time = %reservation.time.format("%H:%M"),
            party_size = reservation.party_size,
            "Booking confirmation (console mode)"
        );
        Ok(())
    }
}
