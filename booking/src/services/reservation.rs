//! Reservation admission and access.
//!
//! Admission runs five ordered, short-circuiting checks (caller exists,
//! venue exists, capacity, not-in-the-past, slot free), then inserts and
//! invalidates the two list-cache entries the new reservation could appear
//! in. The checks are not atomic with the insert — every store and cache
//! access is an independent await — so the repository's slot-uniqueness
//! constraint is the authoritative conflict signal; the pre-check only
//! provides cheap early failure and stable error ordering.
//!
//! All wall-clock comparisons happen in one fixed civil timezone
//! ([`BOOKING_TZ`]), independent of server or client locale.

use crate::error::{BookingError, Result};
use crate::keys;
use crate::providers::{BookingNotifier, CacheStore, Clock, ReservationRepository, UserRepository, VenueRepository};
use crate::state::{Reservation, ReservationId, Role, Slot, User, UserId, VenueId};
use chrono::{LocalResult, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;
use tracing::{debug, info, warn};

/// Fixed civil timezone for all reservation time-business rules.
pub const BOOKING_TZ: Tz = chrono_tz::Asia::Baku;

/// Reservation admission engine and access resolver.
///
/// All collaborators are injected through the constructor; the service keeps
/// no other state beyond the cache TTL.
#[derive(Clone)]
pub struct ReservationService<U, V, R, C, N, K> {
    users: U,
    venues: V,
    reservations: R,
    cache: C,
    notifier: N,
    clock: K,
    cache_ttl_seconds: u64,
}

impl<U, V, R, C, N, K> ReservationService<U, V, R, C, N, K>
where
    U: UserRepository,
    V: VenueRepository,
    R: ReservationRepository,
    C: CacheStore,
    N: BookingNotifier + Clone + Send + Sync + 'static,
    K: Clock,
{
    /// Create a new reservation service.
    pub const fn new(
        users: U,
        venues: V,
        reservations: R,
        cache: C,
        notifier: N,
        clock: K,
        cache_ttl_seconds: u64,
    ) -> Self {
        Self {
            users,
            venues,
            reservations,
            cache,
            notifier,
            clock,
            cache_ttl_seconds,
        }
    }

    /// Admit and persist a new reservation.
    ///
    /// Checks run in a fixed order and stop at the first failure; every
    /// failure before the insert is side-effect free. On success the owner's
    /// list entry and the admin list entry are invalidated, and a
    /// confirmation email is dispatched fire-and-forget (its failure never
    /// surfaces here).
    ///
    /// # Errors
    ///
    /// - [`BookingError::UserNotFound`] — caller does not resolve.
    /// - [`BookingError::VenueNotFound`] — venue does not resolve.
    /// - [`BookingError::CapacityExceeded`] — party size over venue capacity.
    /// - [`BookingError::ReservationInPast`] — wall-clock time before now in
    ///   the booking zone (equal to now is accepted).
    /// - [`BookingError::SlotAlreadyBooked`] — slot taken, from the pre-check
    ///   or from the insert constraint.
    /// - Store/cache transport errors, untranslated.
    pub async fn create_reservation(
        &self,
        caller: UserId,
        venue_id: VenueId,
        date: NaiveDate,
        time: NaiveTime,
        party_size: u32,
    ) -> Result<Reservation> {
        let user = self.resolve_caller(caller).await?;

        let detail = self
            .venues
            .detail_by_id(venue_id)
            .await?
            .ok_or(BookingError::VenueNotFound)?;

        if party_size > detail.venue.capacity {
            return Err(BookingError::CapacityExceeded {
                party_size,
                capacity: detail.venue.capacity,
            });
        }

        let requested = civil_instant(date, time)?;
        let now = self.clock.now_utc().with_timezone(&BOOKING_TZ);
        if requested < now {
            return Err(BookingError::ReservationInPast);
        }

        let slot = Slot { venue_id, date, time };
        if self.reservations.find_by_slot(slot).await?.is_some() {
            return Err(BookingError::SlotAlreadyBooked);
        }

        let reservation = Reservation {
            id: ReservationId::new(),
            user_id: caller,
            venue_id,
            date,
            time,
            party_size,
            created_at: self.clock.now_utc(),
        };

        // The unique constraint on (venue, date, time) makes this insert the
        // real conflict arbiter when two admissions race past the pre-check.
        self.reservations.insert(&reservation).await?;

        info!(
            reservation_id = %reservation.id,
            user_id = %caller,
            slot = %slot,
            party_size,
            "Reservation admitted"
        );

        // Both list views could now be stale, regardless of the caller's role.
        self.cache.delete(&keys::reservations_user(caller)).await?;
        self.cache.delete(keys::reservations_admin()).await?;

        self.dispatch_confirmation(user.email, reservation.clone());

        Ok(reservation)
    }

    /// Role-scoped reservation listing, read-through cached.
    ///
    /// Admins read (and populate) the shared all-reservations entry; users
    /// read their per-owner entry. A cache hit never touches the store.
    ///
    /// # Errors
    ///
    /// - [`BookingError::UserNotFound`] — caller does not resolve.
    /// - Store/cache/serialization errors, untranslated.
    pub async fn reservations_for(&self, caller: UserId) -> Result<Vec<Reservation>> {
        let user = self.resolve_caller(caller).await?;
        let key = match user.role {
            Role::Admin => keys::reservations_admin().to_string(),
            Role::User => keys::reservations_user(caller),
        };

        if let Some(payload) = self.cache.get(&key).await? {
            debug!(key = %key, "Reservation list cache hit");
            return serde_json::from_str(&payload)
                .map_err(|e| BookingError::Serialization(e.to_string()));
        }

        let reservations = match user.role {
            Role::Admin => self.reservations.find_all().await?,
            Role::User => self.reservations.find_by_owner(caller).await?,
        };

        let payload = serde_json::to_string(&reservations)
            .map_err(|e| BookingError::Serialization(e.to_string()))?;
        self.cache
            .set(&key, &payload, self.cache_ttl_seconds)
            .await?;
        debug!(key = %key, count = reservations.len(), "Reservation list cache populated");

        Ok(reservations)
    }

    /// Fetch one reservation, read-through cached.
    ///
    /// The per-reservation entry is shared across callers: a cache hit is
    /// served without re-checking the access rule. The entry is only ever
    /// populated by a caller the access rule admitted, but subsequent
    /// callers holding the id are trusted on hit — a known trust boundary
    /// of this design.
    ///
    /// # Errors
    ///
    /// - [`BookingError::UserNotFound`] — caller does not resolve.
    /// - [`BookingError::ReservationNotFound`] — absent, or hidden from this
    ///   caller by the access rule.
    /// - Store/cache/serialization errors, untranslated.
    pub async fn reservation_by_id(
        &self,
        caller: UserId,
        id: ReservationId,
    ) -> Result<Reservation> {
        let user = self.resolve_caller(caller).await?;
        let key = keys::reservation(id);

        if let Some(payload) = self.cache.get(&key).await? {
            debug!(key = %key, "Reservation cache hit");
            return serde_json::from_str(&payload)
                .map_err(|e| BookingError::Serialization(e.to_string()));
        }

        let reservation = self
            .reservations
            .find_visible(id, caller, user.role)
            .await?
            .ok_or(BookingError::ReservationNotFound)?;

        let payload = serde_json::to_string(&reservation)
            .map_err(|e| BookingError::Serialization(e.to_string()))?;
        self.cache
            .set(&key, &payload, self.cache_ttl_seconds)
            .await?;

        Ok(reservation)
    }

    /// Delete a reservation under the access rule (owner or admin).
    ///
    /// The cache is bypassed on the lookup — deletes always consult the
    /// store, never a possibly-stale cached view. After the store delete,
    /// the caller's list entry, the admin list entry, and the
    /// per-reservation entry are all invalidated unconditionally.
    ///
    /// # Errors
    ///
    /// - [`BookingError::UserNotFound`] — caller does not resolve.
    /// - [`BookingError::ReservationNotFound`] — absent or hidden.
    /// - Store/cache transport errors, untranslated.
    pub async fn delete_reservation(
        &self,
        caller: UserId,
        id: ReservationId,
    ) -> Result<Reservation> {
        let user = self.resolve_caller(caller).await?;

        let reservation = self
            .reservations
            .find_visible(id, caller, user.role)
            .await?
            .ok_or(BookingError::ReservationNotFound)?;

        self.reservations.delete_by_id(id).await?;

        info!(
            reservation_id = %id,
            caller = %caller,
            role = user.role.as_str(),
            "Reservation deleted"
        );

        self.cache.delete(&keys::reservations_user(caller)).await?;
        self.cache.delete(keys::reservations_admin()).await?;
        self.cache.delete(&keys::reservation(id)).await?;

        Ok(reservation)
    }

    async fn resolve_caller(&self, caller: UserId) -> Result<User> {
        self.users
            .user_by_id(caller)
            .await?
            .ok_or(BookingError::UserNotFound)
    }

    /// Spawn the confirmation send without awaiting it. Failures are logged
    /// and swallowed; the reservation stands either way.
    fn dispatch_confirmation(&self, to: String, reservation: Reservation) {
        let notifier = self.notifier.clone();
        tokio::spawn(async move {
            if let Err(e) = notifier.send_booking_confirmation(&to, &reservation).await {
                warn!(
                    reservation_id = %reservation.id,
                    to = %to,
                    error = %e,
                    "Booking confirmation dispatch failed"
                );
            }
        });
    }
}

/// Interpret a wall-clock `(date, time)` in the booking zone.
///
/// Ambiguous local times (clocks rolled back) resolve to the earliest
/// mapping; nonexistent local times (clocks rolled forward over the slot)
/// are rejected. Asia/Baku has had neither since 2016, but the mapping must
/// still be total.
fn civil_instant(date: NaiveDate, time: NaiveTime) -> Result<chrono::DateTime<Tz>> {
    let naive = date.and_time(time);
    match BOOKING_TZ.from_local_datetime(&naive) {
        LocalResult::Single(instant) => Ok(instant),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => Err(BookingError::InvalidDateTime(format!(
            "{naive} does not exist in {BOOKING_TZ}"
        ))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime, Offset};

    #[test]
    fn civil_instant_uses_booking_zone_offset() {
        let date = NaiveDate::from_ymd_opt(2024, 9, 6).unwrap();
        let time = NaiveTime::from_hms_opt(5, 0, 0).unwrap();

        let instant = civil_instant(date, time).unwrap();
        // Baku is UTC+4 year-round.
        assert_eq!(instant.offset().fix().local_minus_utc(), 4 * 3600);
        assert_eq!(instant.naive_local(), date.and_time(time));
    }

    #[test]
    fn civil_instant_total_over_ordinary_times() {
        // Midnight and end-of-day both map cleanly.
        let date = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        assert!(civil_instant(date, NaiveTime::from_hms_opt(0, 0, 0).unwrap()).is_ok());
        assert!(civil_instant(date, NaiveTime::from_hms_opt(23, 59, 0).unwrap()).is_ok());
    }
}
