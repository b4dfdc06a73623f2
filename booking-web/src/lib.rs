//! # Booking HTTP API
//!
//! Axum boundary for the booking engine: routes, extractors, and the
//! error-to-status mapping. All domain logic lives in the `booking` crate;
//! this crate only decodes requests, calls the services, and encodes
//! responses.
//!
//! ## Wiring
//!
//! ```rust,ignore
//! use booking_web::{booking_router, AppState};
//!
//! let state = AppState::new(
//!     users,        // Postgres-backed UserRepository
//!     venues,       // Postgres-backed VenueRepository
//!     reservations, // Postgres-backed ReservationRepository
//!     cache,        // Redis-backed CacheStore
//!     notifier,     // SMTP notifier
//!     clock,        // SystemClock
//!     config.cache_ttl_seconds,
//! );
//!
//! let app = axum::Router::new().nest("/api/v1", booking_router(state));
//! ```
//!
//! Authentication is upstream: every route trusts the `x-user-id` header
//! and resolves role and ownership against the user store.

// Public modules
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

// Re-export main types for convenience
pub use error::{AppError, ErrorResponse};
pub use extractors::AuthenticatedUser;
pub use router::booking_router;
pub use state::AppState;
