//! Reservation handlers.

use crate::error::AppError;
use crate::extractors::AuthenticatedUser;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use booking::providers::{
    BookingNotifier, CacheStore, Clock, ReservationRepository, UserRepository, VenueRepository,
};
use booking::state::hh_mm;
use booking::{Reservation, ReservationId, VenueId};
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

/// Request to book a reservation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReservationRequest {
    /// Venue to book.
    pub venue_id: VenueId,
    /// Civil date of the reservation (`YYYY-MM-DD`).
    pub date: NaiveDate,
    /// Civil time of the reservation (`HH:MM`).
    #[serde(with = "hh_mm")]
    pub time: NaiveTime,
    /// Number of guests.
    pub party_size: u32,
}

/// Book a reservation for the authenticated caller.
///
/// # Endpoint
///
/// ```text
/// POST /reservations
/// x-user-id: <uuid>
/// Content-Type: application/json
///
/// { "venue_id": "<uuid>", "date": "2025-01-15", "time": "19:00", "party_size": 4 }
/// ```
///
/// Responds `201 Created` with the persisted reservation. Admission
/// failures come back as `404`/`400` with the symbolic message from the
/// engine.
pub async fn create_reservation<U, V, R, C, N, K>(
    State(state): State<AppState<U, V, R, C, N, K>>,
    AuthenticatedUser(caller): AuthenticatedUser,
    Json(request): Json<CreateReservationRequest>,
) -> Result<(StatusCode, Json<Reservation>), AppError>
where
    U: UserRepository + Clone + 'static,
    V: VenueRepository + Clone + 'static,
    R: ReservationRepository + Clone + 'static,
    C: CacheStore + Clone + 'static,
    N: BookingNotifier + Clone + Send + Sync + 'static,
    K: Clock + Clone + 'static,
{
    let reservation = state
        .reservations
        .create_reservation(
            caller,
            request.venue_id,
            request.date,
            request.time,
            request.party_size,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(reservation)))
}

/// List the caller's reservations (all of them for admins).
pub async fn list_reservations<U, V, R, C, N, K>(
    State(state): State<AppState<U, V, R, C, N, K>>,
    AuthenticatedUser(caller): AuthenticatedUser,
) -> Result<Json<Vec<Reservation>>, AppError>
where
    U: UserRepository + Clone + 'static,
    V: VenueRepository + Clone + 'static,
    R: ReservationRepository + Clone + 'static,
    C: CacheStore + Clone + 'static,
    N: BookingNotifier + Clone + Send + Sync + 'static,
    K: Clock + Clone + 'static,
{
    let reservations = state.reservations.reservations_for(caller).await?;
    Ok(Json(reservations))
}

/// Fetch a single reservation, subject to the owner-or-admin rule.
pub async fn get_reservation<U, V, R, C, N, K>(
    State(state): State<AppState<U, V, R, C, N, K>>,
    AuthenticatedUser(caller): AuthenticatedUser,
    Path(id): Path<ReservationId>,
) -> Result<Json<Reservation>, AppError>
where
    U: UserRepository + Clone + 'static,
    V: VenueRepository + Clone + 'static,
    R: ReservationRepository + Clone + 'static,
    C: CacheStore + Clone + 'static,
    N: BookingNotifier + Clone + Send + Sync + 'static,
    K: Clock + Clone + 'static,
{
    let reservation = state.reservations.reservation_by_id(caller, id).await?;
    Ok(Json(reservation))
}

/// Cancel a reservation. Responds `202 Accepted` with the removed record.
pub async fn delete_reservation<U, V, R, C, N, K>(
    State(state): State<AppState<U, V, R, C, N, K>>,
    AuthenticatedUser(caller): AuthenticatedUser,
    Path(id): Path<ReservationId>,
) -> Result<(StatusCode, Json<Reservation>), AppError>
where
    U: UserRepository + Clone + 'static,
    V: VenueRepository + Clone + 'static,
    R: ReservationRepository + Clone + 'static,
    C: CacheStore + Clone + 'static,
    N: BookingNotifier + Clone + Send + Sync + 'static,
    K: Clock + Clone + 'static,
{
    let reservation = state.reservations.delete_reservation(caller, id).await?;
    Ok((StatusCode::ACCEPTED, Json(reservation)))
}
