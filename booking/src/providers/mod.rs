//! Provider traits for the booking engine.
//!
//! These traits abstract every external dependency the services touch: the
//! document store (one repository per collection), the key/value cache, the
//! confirmation-email sender, and the clock. Services receive concrete
//! implementations through their constructors — there is no ambient
//! registry — which makes every code path runnable against deterministic
//! in-memory doubles (see [`crate::mocks`]).
//!
//! The cache is advisory: repositories are the source of truth, and a
//! missing cache entry changes latency, never outcomes.

pub mod cache;
pub mod clock;
pub mod console_email;
pub mod notifier;
pub mod reservation;
pub mod smtp_email;
pub mod user;
pub mod venue;

pub use cache::CacheStore;
pub use clock::{Clock, SystemClock};
pub use console_email::ConsoleNotifier;
pub use notifier::BookingNotifier;
pub use reservation::ReservationRepository;
pub use smtp_email::SmtpNotifier;
pub use user::UserRepository;
pub use venue::VenueRepository;
