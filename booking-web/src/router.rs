//! Booking API router composition.
//!
//! Composes the venue and reservation handlers into a single Axum router.

use crate::handlers::{reservations, venues};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use booking::providers::{
    BookingNotifier, CacheStore, Clock, ReservationRepository, UserRepository, VenueRepository,
};

/// Create the booking router with all venue and reservation endpoints.
///
/// # Routes
///
/// ## Venues
/// - `POST /venues` - Create a venue (201)
/// - `GET /venues` - List venues (`page`, `limit`, `location` query)
/// - `GET /venues/:id` - Fetch a venue with its creator projection
/// - `PATCH /venues/:id` - Partially update a venue
/// - `DELETE /venues/:id` - Delete a venue
///
/// ## Reservations
/// - `POST /reservations` - Book a reservation (201)
/// - `GET /reservations` - List the caller's reservations (all for admins)
/// - `GET /reservations/:id` - Fetch a reservation (owner or admin)
/// - `DELETE /reservations/:id` - Cancel a reservation (202)
///
/// Every route expects the `x-user-id` header set by upstream auth.
///
/// # Example
///
/// ```rust,ignore
/// let state = AppState::new(users, venues, reservations, cache, notifier, clock, ttl);
///
/// let app = Router::new()
///     .nest("/api/v1", booking_router(state))
///     .layer(TraceLayer::new_for_http());
/// ```
pub fn booking_router<U, V, R, C, N, K>(state: AppState<U, V, R, C, N, K>) -> Router
where
    U: UserRepository + Clone + 'static,
    V: VenueRepository + Clone + 'static,
    R: ReservationRepository + Clone + 'static,
    C: CacheStore + Clone + 'static,
    N: BookingNotifier + Clone + Send + Sync + 'static,
    K: Clock + Clone + 'static,
{
    Router::new()
        // Venue routes
        .route(
            "/venues",
            post(venues::create_venue::<U, V, R, C, N, K>)
                .get(venues::list_venues::<U, V, R, C, N, K>),
        )
        .route(
            "/venues/:id",
            get(venues::get_venue::<U, V, R, C, N, K>)
                .patch(venues::update_venue::<U, V, R, C, N, K>)
                .delete(venues::delete_venue::<U, V, R, C, N, K>),
        )
        // Reservation routes
        .route(
            "/reservations",
            post(reservations::create_reservation::<U, V, R, C, N, K>)
                .get(reservations::list_reservations::<U, V, R, C, N, K>),
        )
        .route(
            "/reservations/:id",
            get(reservations::get_reservation::<U, V, R, C, N, K>)
                .delete(reservations::delete_reservation::<U, V, R, C, N, K>),
        )
        .with_state(state)
}
