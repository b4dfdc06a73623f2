//! Error types for booking operations.

use thiserror::Error;

/// Result type alias for booking operations.
pub type Result<T> = std::result::Result<T, BookingError>;

/// Error taxonomy for reservation admission and venue operations.
///
/// Three families:
/// - **Not found**: the referenced user, venue, or reservation does not exist
///   (or the access rule hides it from the caller).
/// - **Rule violations**: capacity exceeded, slot taken, time in the past.
/// - **Infrastructure**: store, cache, serialization, or email transport
///   failures. These propagate untranslated; no retries happen here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookingError {
    // ═══════════════════════════════════════════════════════════
    // Not Found
    // ═══════════════════════════════════════════════════════════
    /// Caller identity does not resolve to an existing user.
    #[error("user not found")]
    UserNotFound,

    /// Referenced venue does not exist.
    #[error("venue not found")]
    VenueNotFound,

    /// Reservation does not exist, or the access rule denies visibility.
    #[error("reservation not found")]
    ReservationNotFound,

    // ═══════════════════════════════════════════════════════════
    // Business Rule Violations
    // ═══════════════════════════════════════════════════════════
    /// Party size exceeds the venue capacity.
    #[error("party size {party_size} exceeds venue capacity {capacity}")]
    CapacityExceeded {
        /// Requested party size.
        party_size: u32,
        /// Venue capacity at admission time.
        capacity: u32,
    },

    /// Requested wall-clock time is strictly before now in the booking zone.
    #[error("reservation time is in the past")]
    ReservationInPast,

    /// Another live reservation already occupies the (venue, date, time) slot.
    #[error("slot is already booked")]
    SlotAlreadyBooked,

    /// Date or time string could not be interpreted as a wall-clock instant.
    #[error("invalid date/time: {0}")]
    InvalidDateTime(String),

    // ═══════════════════════════════════════════════════════════
    // Infrastructure
    // ═══════════════════════════════════════════════════════════
    /// Store operation failed.
    #[error("database error: {0}")]
    Database(String),

    /// Cache operation failed.
    #[error("cache error: {0}")]
    Cache(String),

    /// Cache payload could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Email transport failed. Swallowed on the fire-and-forget path.
    #[error("email error: {0}")]
    Email(String),
}

impl BookingError {
    /// HTTP status code this error surfaces as at the boundary.
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::UserNotFound | Self::VenueNotFound | Self::ReservationNotFound => 404,
            Self::CapacityExceeded { .. }
            | Self::ReservationInPast
            | Self::SlotAlreadyBooked
            | Self::InvalidDateTime(_) => 400,
            Self::Database(_) | Self::Cache(_) | Self::Serialization(_) | Self::Email(_) => 500,
        }
    }

    /// Stable symbolic message, shared with every other client of the same
    /// store and cache.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::UserNotFound => "userNotFound",
            Self::VenueNotFound => "venueNotFound",
            Self::ReservationNotFound => "reservationNotFound",
            Self::CapacityExceeded { .. } => "venueCapacityExceeded",
            Self::ReservationInPast => "reservationTimeInPast",
            Self::SlotAlreadyBooked => "reservationAlreadyExists",
            Self::InvalidDateTime(_) => "invalidDateTime",
            Self::Database(_) | Self::Cache(_) | Self::Serialization(_) | Self::Email(_) => {
                "internalError"
            }
        }
    }

    /// Returns `true` if this error is a deterministic, side-effect-free
    /// rejection rather than an infrastructure failure.
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        !matches!(
            self,
            Self::Database(_) | Self::Cache(_) | Self::Serialization(_) | Self::Email(_)
        )
    }
}
