//! Error types for web handlers.
//!
//! Bridges [`BookingError`] to HTTP responses via Axum's `IntoResponse`.
//! The response body is the `{ "status": n, "message": "<symbol>" }` shape
//! shared with every other client of the same API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use booking::BookingError;
use serde::Serialize;
use std::fmt;

/// Application error type for web handlers.
#[derive(Debug)]
pub struct AppError {
    /// HTTP status code.
    status: StatusCode,
    /// Stable symbolic message (user-facing).
    message: String,
    /// Internal error (for logging, not exposed to the client).
    source: Option<anyhow::Error>,
}

impl AppError {
    /// Create a new application error.
    #[must_use]
    pub const fn new(status: StatusCode, message: String) -> Self {
        Self {
            status,
            message,
            source: None,
        }
    }

    /// Attach a source error for logging.
    #[must_use]
    pub fn with_source(mut self, source: anyhow::Error) -> Self {
        self.source = Some(source);
        self
    }

    /// Create a 401 Unauthorized error.
    #[must_use]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message.into())
    }

    /// The status this error responds with.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// The symbolic message this error responds with.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.status, self.message)
    }
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        let status =
            StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let message = err.symbol().to_string();

        if err.is_rejection() {
            Self::new(status, message)
        } else {
            Self::new(status, message).with_source(err.into())
        }
    }
}

/// Error response body (JSON).
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Numeric status, duplicated into the body for client convenience.
    pub status: u16,
    /// Stable symbolic message.
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            if let Some(source) = &self.source {
                tracing::error!(
                    status = %self.status,
                    message = %self.message,
                    error = %source,
                    "Internal server error"
                );
            } else {
                tracing::error!(
                    status = %self.status,
                    message = %self.message,
                    "Internal server error"
                );
            }
        }

        let body = ErrorResponse {
            status: self.status.as_u16(),
            message: self.message,
        };

        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_errors_map_to_the_documented_statuses() {
        let cases = [
            (BookingError::UserNotFound, 404, "userNotFound"),
            (BookingError::VenueNotFound, 404, "venueNotFound"),
            (BookingError::ReservationNotFound, 404, "reservationNotFound"),
            (
                BookingError::CapacityExceeded {
                    party_size: 9,
                    capacity: 5,
                },
                400,
                "venueCapacityExceeded",
            ),
            (BookingError::ReservationInPast, 400, "reservationTimeInPast"),
            (
                BookingError::SlotAlreadyBooked,
                400,
                "reservationAlreadyExists",
            ),
        ];

        for (err, status, message) in cases {
            let app_err = AppError::from(err);
            assert_eq!(app_err.status().as_u16(), status);
            assert_eq!(app_err.message(), message);
        }
    }

    #[test]
    fn infrastructure_errors_become_500_with_source() {
        let app_err = AppError::from(BookingError::Database("down".to_string()));
        assert_eq!(app_err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(app_err.message(), "internalError");
    }

    #[test]
    fn display_includes_status_and_message() {
        let err = AppError::unauthorized("unauthorized");
        assert_eq!(err.to_string(), "[401 Unauthorized] unauthorized");
    }
}
