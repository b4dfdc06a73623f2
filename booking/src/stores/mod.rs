//! Concrete store implementations.
//!
//! - [`RedisCacheStore`] — the cache accessor, Redis with per-key TTLs.
//! - [`postgres`] — the persistent store accessor, one repository per
//!   collection over a shared `PgPool`.

pub mod cache_redis;
pub mod postgres;

pub use cache_redis::RedisCacheStore;
pub use postgres::{PostgresReservationRepository, PostgresUserRepository, PostgresVenueRepository};
