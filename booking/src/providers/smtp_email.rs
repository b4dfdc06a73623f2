//! SMTP notifier implementation using Lettre.

use crate::error::{BookingError, Result};
use crate::providers::BookingNotifier;
use crate::state::Reservation;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

/// SMTP notifier using Lettre.
///
/// Sends real booking-confirmation emails, suitable for production use.
#[derive(Clone)]
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    /// Sender address, e.g. "bookings@example.com".
    from: String,
}

impl SmtpNotifier {
    /// Create a new SMTP notifier.
    ///
    /// # Arguments
    ///
    /// - `smtp_server`: SMTP relay address (e.g., "smtp.example.com")
    /// - `smtp_username` / `smtp_password`: relay credentials
    /// - `from`: sender address
    ///
    /// # Errors
    ///
    /// Returns an error if the relay configuration is invalid.
    pub fn new(
        smtp_server: &str,
        smtp_username: String,
        smtp_password: String,
        from: String,
    ) -> Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(smtp_server)
            .map_err(|e| BookingError::Email(format!("invalid SMTP relay: {e}")))?
            .credentials(Credentials::new(smtp_username, smtp_password))
            .build();

        Ok(Self { transport, from })
    }
}

impl BookingNotifier for SmtpNotifier {
    async fn send_booking_confirmation(&self, to: &str, reservation: &Reservation) -> Result<()> {
        let body = format!(
            "Your reservation is confirmed.\n\n\
             Date: {}\n\
             Time: {}\n\
             Party size: {}\n\
             Reservation id: {}\n",
            reservation.date,
            reservation.time.format("%H:%M"),
            reservation.party_size,
            reservation.id,
        );

        let message = Message::builder()
            .from(
                self.from
                    .parse()
                    .map_err(|e| BookingError::Email(format!("invalid from address: {e}")))?,
            )
            .to(to
                .parse()
                .map_err(|e| BookingError::Email(format!("invalid to address: {e}")))?)
            .subject("Reservation confirmed")
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| BookingError::Email(format!("failed to build message: {e}")))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| BookingError::Email(format!("failed to send confirmation: {e}")))?;

        Ok(())
    }
}
