//! Domain types for the booking engine.
//!
//! Identifiers are UUID newtypes. Dates and times are civil wall-clock
//! values; they only become instants when interpreted in the fixed booking
//! timezone (see [`crate::services::reservation`]).

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// User identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

/// Venue identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VenueId(pub Uuid);

/// Reservation identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReservationId(pub Uuid);

macro_rules! impl_id {
    ($name:ident) => {
        impl $name {
            /// Generate a new random identifier.
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

impl_id!(UserId);
impl_id!(VenueId);
impl_id!(ReservationId);

/// Caller role. Admins see and delete every reservation; users only their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular user.
    User,
    /// Administrator.
    Admin,
}

impl Role {
    /// Stable string form, as persisted in the store.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }

    /// Parse the persisted string form.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "user" => Some(Self::User),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

/// User reference data. The booking engine consults users, it never owns them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User identifier.
    pub id: UserId,
    /// Registered email address (booking confirmations go here).
    pub email: String,
    /// Display name.
    pub user_name: String,
    /// Role, resolved by the upstream auth layer.
    pub role: Role,
}

/// A bookable venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    /// Venue identifier.
    pub id: VenueId,
    /// Venue name.
    pub name: String,
    /// Free-text location, substring-searchable.
    pub location: String,
    /// Maximum party size a single reservation may bring.
    pub capacity: u32,
    /// Free-text description.
    pub description: String,
    /// Creator reference.
    pub created_by: UserId,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Public projection of a venue's creator, denormalized into venue reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatorProfile {
    /// Creator's email address.
    pub email: String,
    /// Creator's display name.
    pub user_name: String,
}

/// A venue joined with its creator projection. This is what venue reads
/// return and what the per-venue cache entry holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueDetail {
    /// The venue itself.
    #[serde(flatten)]
    pub venue: Venue,
    /// Denormalized creator fields.
    pub creator: CreatorProfile,
}

/// Partial venue update. Only `Some` fields overwrite; `None` leaves the
/// stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenuePatch {
    /// New name, if supplied.
    pub name: Option<String>,
    /// New location, if supplied.
    pub location: Option<String>,
    /// New capacity, if supplied.
    pub capacity: Option<u32>,
    /// New description, if supplied.
    pub description: Option<String>,
}

impl VenuePatch {
    /// Returns `true` if no field is supplied.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.location.is_none()
            && self.capacity.is_none()
            && self.description.is_none()
    }
}

/// The composite key identifying one bookable unit: at most one live
/// reservation may hold a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    /// Venue being booked.
    pub venue_id: VenueId,
    /// Calendar date, wall clock.
    pub date: NaiveDate,
    /// Time of day, wall clock.
    #[serde(with = "hh_mm")]
    pub time: NaiveTime,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{} {}", self.venue_id, self.date, self.time.format("%H:%M"))
    }
}

/// A reservation. Immutable once created; the only lifecycle transition is
/// deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// Reservation identifier.
    pub id: ReservationId,
    /// Owning user.
    pub user_id: UserId,
    /// Reserved venue.
    pub venue_id: VenueId,
    /// Calendar date (wall clock, booking timezone).
    pub date: NaiveDate,
    /// Time of day (wall clock, booking timezone).
    #[serde(with = "hh_mm")]
    pub time: NaiveTime,
    /// Party size admitted against the venue capacity.
    pub party_size: u32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    /// The slot this reservation occupies.
    #[must_use]
    pub const fn slot(&self) -> Slot {
        Slot {
            venue_id: self.venue_id,
            date: self.date,
            time: self.time,
        }
    }
}

/// Serde adapter for `HH:mm` time-of-day strings (the wire and cache format;
/// chrono's default would add seconds).
pub mod hh_mm {
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    /// Format used on the wire and in cache payloads.
    pub const FORMAT: &str = "%H:%M";

    /// Serialize a `NaiveTime` as `HH:mm`.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    /// Deserialize a `NaiveTime` from `HH:mm`.
    ///
    /// # Errors
    ///
    /// Fails if the string is not a valid `HH:mm` time.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn role_round_trips_through_store_form() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("user"), Some(Role::User));
        assert_eq!(Role::parse("superuser"), None);
        assert_eq!(Role::Admin.as_str(), "admin");
    }

    #[test]
    fn reservation_serializes_time_without_seconds() {
        let reservation = Reservation {
            id: ReservationId::new(),
            user_id: UserId::new(),
            venue_id: VenueId::new(),
            date: NaiveDate::from_ymd_opt(2024, 9, 6).unwrap(),
            time: NaiveTime::from_hms_opt(5, 0, 0).unwrap(),
            party_size: 50,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&reservation).unwrap();
        assert_eq!(json["time"], "05:00");
        assert_eq!(json["date"], "2024-09-06");

        let back: Reservation = serde_json::from_value(json).unwrap();
        assert_eq!(back, reservation);
    }

    #[test]
    fn venue_patch_emptiness() {
        assert!(VenuePatch::default().is_empty());
        assert!(
            !VenuePatch {
                name: Some("X".into()),
                ..VenuePatch::default()
            }
            .is_empty()
        );
    }
}
