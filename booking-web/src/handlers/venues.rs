//! Venue catalog handlers.

use crate::error::AppError;
use crate::extractors::AuthenticatedUser;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use booking::providers::{
    BookingNotifier, CacheStore, Clock, ReservationRepository, UserRepository, VenueRepository,
};
use booking::{Venue, VenueDetail, VenueId, VenuePatch};
use serde::Deserialize;

/// Default page when the query omits one.
const DEFAULT_PAGE: u32 = 1;
/// Default page size when the query omits one.
const DEFAULT_LIMIT: u32 = 10;

/// Request to create a venue.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVenueRequest {
    /// Display name.
    pub name: String,
    /// Free-form location string.
    pub location: String,
    /// Maximum party size a single reservation may bring.
    pub capacity: u32,
    /// Free-form description.
    pub description: String,
}

/// Query parameters for the venue listing.
#[derive(Debug, Clone, Deserialize)]
pub struct VenueListQuery {
    /// 1-based page number (default 1).
    pub page: Option<u32>,
    /// Page size (default 10).
    pub limit: Option<u32>,
    /// Case-insensitive location substring filter.
    pub location: Option<String>,
}

/// Create a venue.
///
/// # Endpoint
///
/// ```text
/// POST /venues
/// x-user-id: <uuid>
/// Content-Type: application/json
///
/// { "name": "...", "location": "...", "capacity": 100, "description": "..." }
/// ```
pub async fn create_venue<U, V, R, C, N, K>(
    State(state): State<AppState<U, V, R, C, N, K>>,
    AuthenticatedUser(caller): AuthenticatedUser,
    Json(request): Json<CreateVenueRequest>,
) -> Result<(StatusCode, Json<Venue>), AppError>
where
    U: UserRepository + Clone + 'static,
    V: VenueRepository + Clone + 'static,
    R: ReservationRepository + Clone + 'static,
    C: CacheStore + Clone + 'static,
    N: BookingNotifier + Clone + Send + Sync + 'static,
    K: Clock + Clone + 'static,
{
    let venue = state
        .venues
        .create_venue(
            caller,
            request.name,
            request.location,
            request.capacity,
            request.description,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(venue)))
}

/// List venues with offset pagination and an optional location filter.
///
/// # Endpoint
///
/// ```text
/// GET /venues?page=1&limit=10&location=baku
/// x-user-id: <uuid>
/// ```
pub async fn list_venues<U, V, R, C, N, K>(
    State(state): State<AppState<U, V, R, C, N, K>>,
    AuthenticatedUser(_caller): AuthenticatedUser,
    Query(query): Query<VenueListQuery>,
) -> Result<Json<Vec<VenueDetail>>, AppError>
where
    U: UserRepository + Clone + 'static,
    V: VenueRepository + Clone + 'static,
    R: ReservationRepository + Clone + 'static,
    C: CacheStore + Clone + 'static,
    N: BookingNotifier + Clone + Send + Sync + 'static,
    K: Clock + Clone + 'static,
{
    let page = query.page.unwrap_or(DEFAULT_PAGE).max(1);
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);

    let venues = state
        .venues
        .venues(page, limit, query.location.as_deref())
        .await?;

    Ok(Json(venues))
}

/// Fetch a single venue with its creator projection.
pub async fn get_venue<U, V, R, C, N, K>(
    State(state): State<AppState<U, V, R, C, N, K>>,
    AuthenticatedUser(_caller): AuthenticatedUser,
    Path(id): Path<VenueId>,
) -> Result<Json<VenueDetail>, AppError>
where
    U: UserRepository + Clone + 'static,
    V: VenueRepository + Clone + 'static,
    R: ReservationRepository + Clone + 'static,
    C: CacheStore + Clone + 'static,
    N: BookingNotifier + Clone + Send + Sync + 'static,
    K: Clock + Clone + 'static,
{
    let detail = state.venues.venue_by_id(id).await?;
    Ok(Json(detail))
}

/// Partially update a venue. Absent fields keep their current values.
pub async fn update_venue<U, V, R, C, N, K>(
    State(state): State<AppState<U, V, R, C, N, K>>,
    AuthenticatedUser(_caller): AuthenticatedUser,
    Path(id): Path<VenueId>,
    Json(patch): Json<VenuePatch>,
) -> Result<Json<VenueDetail>, AppError>
where
    U: UserRepository + Clone + 'static,
    V: VenueRepository + Clone + 'static,
    R: ReservationRepository + Clone + 'static,
    C: CacheStore + Clone + 'static,
    N: BookingNotifier + Clone + Send + Sync + 'static,
    K: Clock + Clone + 'static,
{
    let detail = state.venues.update_venue(id, patch).await?;
    Ok(Json(detail))
}

/// Delete a venue, returning the deleted record.
pub async fn delete_venue<U, V, R, C, N, K>(
    State(state): State<AppState<U, V, R, C, N, K>>,
    AuthenticatedUser(_caller): AuthenticatedUser,
    Path(id): Path<VenueId>,
) -> Result<Json<VenueDetail>, AppError>
where
    U: UserRepository + Clone + 'static,
    V: VenueRepository + Clone + 'static,
    R: ReservationRepository + Clone + 'static,
    C: CacheStore + Clone + 'static,
    N: BookingNotifier + Clone + Send + Sync + 'static,
    K: Clock + Clone + 'static,
{
    let detail = state.venues.delete_venue(id).await?;
    Ok(Json(detail))
}
