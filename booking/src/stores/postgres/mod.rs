//! PostgreSQL repository implementations.
//!
//! One repository per collection over a shared [`sqlx::PgPool`]. Queries use
//! the runtime `query_as` API so the workspace builds without a live
//! `DATABASE_URL`. The schema lives in `booking/migrations/`; the
//! `reservations` table carries the unique slot constraint that backs the
//! conflict guarantee.

pub mod reservation;
pub mod user;
pub mod venue;

pub use reservation::PostgresReservationRepository;
pub use user::PostgresUserRepository;
pub use venue::PostgresVenueRepository;

use crate::error::{BookingError, Result};
use sqlx::PgPool;

/// Run database migrations for the booking schema.
///
/// # Errors
///
/// Returns an error if migrations fail.
pub async fn migrate(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| BookingError::Database(format!("migration failed: {e}")))?;
    Ok(())
}
