//! Booking services.
//!
//! Two services own the core semantics:
//!
//! - [`ReservationService`] — reservation admission (capacity, civil-time,
//!   slot-conflict invariants) and role-scoped reservation access.
//! - [`VenueService`] — venue CRUD behind a read-through cache.
//!
//! Both layer a write-invalidate cache over the authoritative store:
//! reads go through the cache, writes hit the store first and then delete
//! every cache entry they could have made stale. Invalidation runs only
//! after the authoritative write succeeds, so a failed write never evicts a
//! good entry. Invalidation and the write are not transactional: a crash
//! between them leaves the cache stale until TTL expiry (24 hours).

pub mod reservation;
pub mod venue;

pub use reservation::ReservationService;
pub use venue::VenueService;
