//! PostgreSQL reservation repository implementation.
//!
//! The `reservations_slot_key` unique constraint on
//! `(venue_id, reserved_date, reserved_time)` is the authoritative
//! double-booking guard: two admissions racing past the service's pre-check
//! serialize here, and the loser surfaces as
//! [`BookingError::SlotAlreadyBooked`].

use crate::error::{BookingError, Result};
use crate::providers::ReservationRepository;
use crate::state::{Reservation, ReservationId, Role, Slot, UserId, VenueId};
use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// PostgreSQL reservation repository.
#[derive(Clone)]
pub struct PostgresReservationRepository {
    pool: PgPool,
}

impl PostgresReservationRepository {
    /// Create a new PostgreSQL reservation repository.
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ReservationRow {
    id: uuid::Uuid,
    user_id: uuid::Uuid,
    venue_id: uuid::Uuid,
    reserved_date: chrono::NaiveDate,
    reserved_time: chrono::NaiveTime,
    party_size: i32,
    created_at: DateTime<Utc>,
}

impl TryFrom<ReservationRow> for Reservation {
    type Error = BookingError;

    fn try_from(row: ReservationRow) -> Result<Self> {
        let party_size = u32::try_from(row.party_size).map_err(|_| {
            BookingError::Database(format!("negative party size: {}", row.party_size))
        })?;
        Ok(Self {
            id: ReservationId(row.id),
            user_id: UserId(row.user_id),
            venue_id: VenueId(row.venue_id),
            date: row.reserved_date,
            time: row.reserved_time,
            party_size,
            created_at: row.created_at,
        })
    }
}

const COLUMNS: &str =
    "id, user_id, venue_id, reserved_date, reserved_time, party_size, created_at";

impl ReservationRepository for PostgresReservationRepository {
    async fn insert(&self, reservation: &Reservation) -> Result<()> {
        let party_size = i32::try_from(reservation.party_size)
            .map_err(|_| BookingError::Database("party size out of range".to_string()))?;

        sqlx::query(
            r"
            INSERT INTO reservations
                (id, user_id, venue_id, reserved_date, reserved_time, party_size, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(reservation.id.0)
        .bind(reservation.user_id.0)
        .bind(reservation.venue_id.0)
        .bind(reservation.date)
        .bind(reservation.time)
        .bind(party_size)
        .bind(reservation.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                BookingError::SlotAlreadyBooked
            }
            _ => BookingError::Database(format!("failed to insert reservation: {e}")),
        })?;

        Ok(())
    }

    async fn find_by_slot(&self, slot: Slot) -> Result<Option<Reservation>> {
        let query = format!(
            r"
            SELECT {COLUMNS}
            FROM reservations
            WHERE venue_id = $1 AND reserved_date = $2 AND reserved_time = $3
            "
        );

        let row: Option<ReservationRow> = sqlx::query_as(&query)
            .bind(slot.venue_id.0)
            .bind(slot.date)
            .bind(slot.time)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| BookingError::Database(format!("failed to check slot: {e}")))?;

        row.map(Reservation::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Reservation>> {
        let query = format!(
            r"
            SELECT {COLUMNS}
            FROM reservations
            ORDER BY created_at
            "
        );

        let rows: Vec<ReservationRow> = sqlx::query_as(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| BookingError::Database(format!("failed to list reservations: {e}")))?;

        rows.into_iter().map(Reservation::try_from).collect()
    }

    async fn find_by_owner(&self, owner: UserId) -> Result<Vec<Reservation>> {
        let query = format!(
            r"
            SELECT {COLUMNS}
            FROM reservations
            WHERE user_id = $1
            ORDER BY created_at
            "
        );

        let rows: Vec<ReservationRow> = sqlx::query_as(&query)
            .bind(owner.0)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| BookingError::Database(format!("failed to list reservations: {e}")))?;

        rows.into_iter().map(Reservation::try_from).collect()
    }

    async fn find_visible(
        &self,
        id: ReservationId,
        caller: UserId,
        role: Role,
    ) -> Result<Option<Reservation>> {
        let query = format!(
            r"
            SELECT {COLUMNS}
            FROM reservations
            WHERE id = $1 AND ($3 OR user_id = $2)
            "
        );

        let row: Option<ReservationRow> = sqlx::query_as(&query)
            .bind(id.0)
            .bind(caller.0)
            .bind(role == Role::Admin)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| BookingError::Database(format!("failed to get reservation: {e}")))?;

        row.map(Reservation::try_from).transpose()
    }

    async fn delete_by_id(&self, id: ReservationId) -> Result<()> {
        sqlx::query("DELETE FROM reservations WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| BookingError::Database(format!("failed to delete reservation: {e}")))?;

        Ok(())
    }
}
