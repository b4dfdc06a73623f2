//! Cache key formats and the shared entry TTL.
//!
//! Key formats are an interop contract: other processes sharing the same
//! cache must compute identical keys. Nothing outside this module formats
//! cache keys.

use crate::state::{ReservationId, UserId, VenueId};

/// Time-to-live applied to every cache entry, in seconds (24 hours). TTL
/// expiry is the staleness bound when a crash loses an invalidation.
pub const CACHE_TTL_SECONDS: u64 = 86_400;

/// Per-venue entry, holding the venue joined with its creator projection.
#[must_use]
pub fn venue(id: VenueId) -> String {
    format!("venue_{id}")
}

/// Aggregate unfiltered venue listing.
#[must_use]
pub const fn all_venues() -> &'static str {
    "all_venues"
}

/// Per-reservation entry, shared across callers.
#[must_use]
pub fn reservation(id: ReservationId) -> String {
    format!("reservation_{id}")
}

/// Per-user reservation list.
#[must_use]
pub fn reservations_user(user_id: UserId) -> String {
    format!("reservations_user_{user_id}")
}

/// Admin-scope "all reservations" list.
#[must_use]
pub const fn reservations_admin() -> &'static str {
    "reservations_admin"
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn key_formats_match_interop_contract() {
        let id = Uuid::parse_str("6f2b4d0e-8d3a-4f1c-9a7b-0c1d2e3f4a5b").unwrap();

        assert_eq!(
            venue(VenueId(id)),
            "venue_6f2b4d0e-8d3a-4f1c-9a7b-0c1d2e3f4a5b"
        );
        assert_eq!(
            reservation(ReservationId(id)),
            "reservation_6f2b4d0e-8d3a-4f1c-9a7b-0c1d2e3f4a5b"
        );
        assert_eq!(
            reservations_user(UserId(id)),
            "reservations_user_6f2b4d0e-8d3a-4f1c-9a7b-0c1d2e3f4a5b"
        );
        assert_eq!(all_venues(), "all_venues");
        assert_eq!(reservations_admin(), "reservations_admin");
    }

    #[test]
    fn ttl_is_24_hours() {
        assert_eq!(CACHE_TTL_SECONDS, 24 * 60 * 60);
    }
}
