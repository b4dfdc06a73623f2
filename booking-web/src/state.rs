//! Application state shared across HTTP handlers.

use booking::providers::{
    BookingNotifier, CacheStore, Clock, ReservationRepository, UserRepository, VenueRepository,
};
use booking::{ReservationService, VenueService};

/// Application state shared across all HTTP handlers.
///
/// Holds the two domain services, each generic over its providers so the
/// same handlers run against Postgres/Redis in production and the in-memory
/// mocks in tests. Cloning is cheap: every provider is a handle.
#[derive(Clone)]
pub struct AppState<U, V, R, C, N, K> {
    /// Reservation admission and access.
    pub reservations: ReservationService<U, V, R, C, N, K>,
    /// Venue catalog reads and writes.
    pub venues: VenueService<U, V, C>,
}

impl<U, V, R, C, N, K> AppState<U, V, R, C, N, K>
where
    U: UserRepository + Clone,
    V: VenueRepository + Clone,
    R: ReservationRepository,
    C: CacheStore + Clone,
    N: BookingNotifier + Clone + Send + Sync + 'static,
    K: Clock,
{
    /// Assemble the state from its providers.
    pub fn new(
        users: U,
        venues: V,
        reservations: R,
        cache: C,
        notifier: N,
        clock: K,
        cache_ttl_seconds: u64,
    ) -> Self {
        Self {
            reservations: ReservationService::new(
                users.clone(),
                venues.clone(),
                reservations,
                cache.clone(),
                notifier,
                clock,
                cache_ttl_seconds,
            ),
            venues: VenueService::new(users, venues, cache, cache_ttl_seconds),
        }
    }
}
