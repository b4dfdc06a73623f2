//! # Venue-Reservation Booking Engine
//!
//! Reservation admission and cache-consistency: users book reservations
//! against venue capacity and time-slot availability, with a read-through /
//! write-invalidate Redis cache layered over a Postgres source of truth.
//!
//! ## Architecture
//!
//! Services own the semantics; everything they touch is a provider trait:
//!
//! ```text
//! ReservationService ──▶ UserRepository      (caller resolution)
//!        │          ──▶ VenueRepository     (capacity lookup)
//!        │          ──▶ ReservationRepository (slot authority)
//!        │          ──▶ CacheStore          (read-through lists)
//!        │          ──▶ BookingNotifier     (fire-and-forget email)
//!        └──────────▶ Clock               (in-the-past boundary)
//!
//! VenueService ──────▶ VenueRepository + CacheStore + UserRepository
//! ```
//!
//! Admission invariants, in check order: caller exists, venue exists,
//! party size ≤ capacity, wall-clock time not in the past (fixed civil
//! zone), slot free. The store's unique constraint on (venue, date, time)
//! is the authoritative double-booking guard; the in-service conflict check
//! only fails fast.
//!
//! The cache is advisory. Writes invalidate (never update) the entries
//! they could stale, only after the authoritative write succeeds.

// Public modules
pub mod config;
pub mod error;
pub mod keys;
pub mod providers;
pub mod services;
pub mod state;
pub mod stores;

#[cfg(any(test, feature = "test-utils"))]
pub mod mocks;

// Re-export main types for convenience
pub use config::BookingConfig;
pub use error::{BookingError, Result};
pub use services::{ReservationService, VenueService};
pub use state::{
    CreatorProfile, Reservation, ReservationId, Role, Slot, User, UserId, Venue, VenueDetail,
    VenueId, VenuePatch,
};
