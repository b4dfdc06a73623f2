//! Mock reservation repository for testing.

use crate::error::{BookingError, Result};
use crate::providers::ReservationRepository;
use crate::state::{Reservation, ReservationId, Role, Slot, UserId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock reservation repository backed by an in-memory map.
///
/// `insert` enforces slot uniqueness, mirroring the Postgres constraint, so
/// the authoritative `SlotAlreadyBooked` path is exercised in tests.
#[derive(Debug, Clone, Default)]
pub struct MockReservationRepository {
    reservations: Arc<Mutex<HashMap<ReservationId, Reservation>>>,
}

#[allow(clippy::unwrap_used)]
impl MockReservationRepository {
    /// Create a new mock reservation repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored reservations.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reservations.lock().unwrap().len()
    }

    /// Returns `true` if no reservation is stored.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the reservation is stored.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn contains(&self, id: ReservationId) -> bool {
        self.reservations.lock().unwrap().contains_key(&id)
    }

    /// Seed a reservation directly, bypassing the uniqueness check.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn seed(&self, reservation: Reservation) {
        self.reservations
            .lock()
            .unwrap()
            .insert(reservation.id, reservation);
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<ReservationId, Reservation>>> {
        self.reservations
            .lock()
            .map_err(|_| BookingError::Database("mock lock poisoned".to_string()))
    }

    fn sorted(mut reservations: Vec<Reservation>) -> Vec<Reservation> {
        reservations.sort_by_key(|r| r.created_at);
        reservations
    }
}

impl ReservationRepository for MockReservationRepository {
    async fn insert(&self, reservation: &Reservation) -> Result<()> {
        let mut guard = self.lock()?;

        if guard.values().any(|r| r.slot() == reservation.slot()) {
            return Err(BookingError::SlotAlreadyBooked);
        }

        guard.insert(reservation.id, reservation.clone());
        Ok(())
    }

    async fn find_by_slot(&self, slot: Slot) -> Result<Option<Reservation>> {
        let guard = self.lock()?;
        Ok(guard.values().find(|r| r.slot() == slot).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Reservation>> {
        let guard = self.lock()?;
        Ok(Self::sorted(guard.values().cloned().collect()))
    }

    async fn find_by_owner(&self, owner: UserId) -> Result<Vec<Reservation>> {
        let guard = self.lock()?;
        Ok(Self::sorted(
            guard
                .values()
                .filter(|r| r.user_id == owner)
                .cloned()
                .collect(),
        ))
    }

    async fn find_visible(
        &self,
        id: ReservationId,
        caller: UserId,
        role: Role,
    ) -> Result<Option<Reservation>> {
        let guard = self.lock()?;
        Ok(guard
            .get(&id)
            .filter(|r| role == Role::Admin || r.user_id == caller)
            .cloned())
    }

    async fn delete_by_id(&self, id: ReservationId) -> Result<()> {
        self.lock()?.remove(&id);
        Ok(())
    }
}
