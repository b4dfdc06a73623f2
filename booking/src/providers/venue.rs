//! Venue repository trait.

use crate::error::Result;
use crate::state::{Venue, VenueDetail, VenueId, VenuePatch};
use std::future::Future;

/// Venue collection access.
///
/// Reads return [`VenueDetail`] — the venue joined with the public
/// projection of its creator — because that is the shape the per-venue
/// cache entry holds.
pub trait VenueRepository: Send + Sync {
    /// Insert a new venue.
    ///
    /// # Errors
    ///
    /// Returns an error if the store insert fails.
    fn insert(&self, venue: &Venue) -> impl Future<Output = Result<()>> + Send;

    /// Fetch a venue joined with its creator projection.
    ///
    /// Returns `None` if the venue does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the store query fails.
    fn detail_by_id(&self, id: VenueId) -> impl Future<Output = Result<Option<VenueDetail>>> + Send;

    /// Apply a partial patch: only `Some` fields overwrite stored values.
    ///
    /// Returns the post-update detail, or `None` if the venue does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the store update fails.
    fn update_partial(
        &self,
        id: VenueId,
        patch: &VenuePatch,
    ) -> impl Future<Output = Result<Option<VenueDetail>>> + Send;

    /// Delete a venue, returning the deleted detail, or `None` if absent.
    ///
    /// Reservations referencing the venue are left untouched (accepted gap:
    /// deleted venues become unreservable, existing bookings survive).
    ///
    /// # Errors
    ///
    /// Returns an error if the store delete fails.
    fn delete_by_id(
        &self,
        id: VenueId,
    ) -> impl Future<Output = Result<Option<VenueDetail>>> + Send;

    /// Offset-paginated listing: skip `(page - 1) * limit`, take `limit`.
    ///
    /// `location`, when present, filters by case-insensitive substring match.
    ///
    /// # Errors
    ///
    /// Returns an error if the store query fails.
    fn list(
        &self,
        page: u32,
        limit: u32,
        location: Option<&str>,
    ) -> impl Future<Output = Result<Vec<VenueDetail>>> + Send;
}
