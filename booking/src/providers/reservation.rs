//! Reservation repository trait.

use crate::error::Result;
use crate::state::{Reservation, ReservationId, Role, Slot, UserId};
use std::future::Future;

/// Reservation collection access.
///
/// The repository owns the slot-uniqueness constraint: [`insert`] must fail
/// with [`crate::BookingError::SlotAlreadyBooked`] when another live
/// reservation holds the same `(venue, date, time)` slot, even if the
/// caller's pre-check raced past a concurrent insert. The pre-check
/// ([`find_by_slot`]) exists for cheap early failure and stable error
/// ordering; the constraint is the authority.
///
/// [`insert`]: ReservationRepository::insert
/// [`find_by_slot`]: ReservationRepository::find_by_slot
pub trait ReservationRepository: Send + Sync {
    /// Insert a new reservation.
    ///
    /// # Errors
    ///
    /// - [`crate::BookingError::SlotAlreadyBooked`] if the slot-uniqueness
    ///   constraint rejects the insert.
    /// - Store errors otherwise.
    fn insert(&self, reservation: &Reservation) -> impl Future<Output = Result<()>> + Send;

    /// Find the live reservation occupying a slot, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the store query fails.
    fn find_by_slot(&self, slot: Slot) -> impl Future<Output = Result<Option<Reservation>>> + Send;

    /// All live reservations (admin view).
    ///
    /// # Errors
    ///
    /// Returns an error if the store query fails.
    fn find_all(&self) -> impl Future<Output = Result<Vec<Reservation>>> + Send;

    /// All live reservations owned by a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the store query fails.
    fn find_by_owner(&self, owner: UserId)
    -> impl Future<Output = Result<Vec<Reservation>>> + Send;

    /// Fetch a reservation under the access rule: visible if the caller owns
    /// it, or the caller is an admin. Returns `None` when the reservation is
    /// absent *or* hidden — callers cannot distinguish the two.
    ///
    /// # Errors
    ///
    /// Returns an error if the store query fails.
    fn find_visible(
        &self,
        id: ReservationId,
        caller: UserId,
        role: Role,
    ) -> impl Future<Output = Result<Option<Reservation>>> + Send;

    /// Delete a reservation by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the store delete fails.
    fn delete_by_id(&self, id: ReservationId) -> impl Future<Output = Result<()>> + Send;
}
