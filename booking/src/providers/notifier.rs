//! Booking notification trait.

use crate::error::Result;
use crate::state::Reservation;
use std::future::Future;

/// Sends booking-confirmation notices.
///
/// Dispatch is fire-and-forget from the admission path: the service spawns
/// the send and never awaits it, and a failed send must never fail or roll
/// back the reservation. Implementations should still return errors so the
/// background task can log them.
pub trait BookingNotifier: Send + Sync {
    /// Send a booking confirmation to the owner's registered address.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails. On the admission path the
    /// error is logged at `warn` and swallowed.
    fn send_booking_confirmation(
        &self,
        to: &str,
        reservation: &Reservation,
    ) -> impl Future<Output = Result<()>> + Send;
}
