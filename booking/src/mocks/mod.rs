//! Mock providers for testing.
//!
//! In-memory, deterministic implementations of every provider trait. The
//! mock reservation repository enforces the same slot-uniqueness rule as
//! the Postgres constraint, so admission tests exercise the authoritative
//! conflict path, too.

pub mod cache;
pub mod clock;
pub mod notifier;
pub mod reservation;
pub mod user;
pub mod venue;

pub use cache::MockCacheStore;
pub use clock::MockClock;
pub use notifier::MockNotifier;
pub use reservation::MockReservationRepository;
pub use user::MockUserRepository;
pub use venue::MockVenueRepository;
