//! Venue CRUD behind a read-through cache.
//!
//! Single-venue reads are cached under `venue_<id>` with the creator
//! projection denormalized in. Every venue write invalidates the per-venue
//! entry (when one exists) and the aggregate `all_venues` entry. The
//! listing itself is always store-backed here; the aggregate key is still
//! invalidated for interop with cache readers that do populate it.

use crate::error::{BookingError, Result};
use crate::keys;
use crate::providers::{CacheStore, UserRepository, VenueRepository};
use crate::state::{UserId, Venue, VenueDetail, VenueId, VenuePatch};
use chrono::Utc;
use tracing::{debug, info};

/// Venue service with read-through caching.
#[derive(Clone)]
pub struct VenueService<U, V, C> {
    users: U,
    venues: V,
    cache: C,
    cache_ttl_seconds: u64,
}

impl<U, V, C> VenueService<U, V, C>
where
    U: UserRepository,
    V: VenueRepository,
    C: CacheStore,
{
    /// Create a new venue service.
    pub const fn new(users: U, venues: V, cache: C, cache_ttl_seconds: u64) -> Self {
        Self {
            users,
            venues,
            cache,
            cache_ttl_seconds,
        }
    }

    /// Fetch a venue with its creator projection, read-through cached.
    ///
    /// # Errors
    ///
    /// - [`BookingError::VenueNotFound`] — venue does not exist.
    /// - Store/cache/serialization errors, untranslated.
    pub async fn venue_by_id(&self, id: VenueId) -> Result<VenueDetail> {
        let key = keys::venue(id);

        if let Some(payload) = self.cache.get(&key).await? {
            debug!(key = %key, "Venue cache hit");
            return serde_json::from_str(&payload)
                .map_err(|e| BookingError::Serialization(e.to_string()));
        }

        let detail = self
            .venues
            .detail_by_id(id)
            .await?
            .ok_or(BookingError::VenueNotFound)?;

        let payload = serde_json::to_string(&detail)
            .map_err(|e| BookingError::Serialization(e.to_string()))?;
        self.cache
            .set(&key, &payload, self.cache_ttl_seconds)
            .await?;
        debug!(key = %key, "Venue cache populated");

        Ok(detail)
    }

    /// Create a venue owned by the caller.
    ///
    /// # Errors
    ///
    /// - [`BookingError::UserNotFound`] — caller does not resolve.
    /// - Store/cache transport errors, untranslated.
    pub async fn create_venue(
        &self,
        caller: UserId,
        name: String,
        location: String,
        capacity: u32,
        description: String,
    ) -> Result<Venue> {
        self.users
            .user_by_id(caller)
            .await?
            .ok_or(BookingError::UserNotFound)?;

        let venue = Venue {
            id: VenueId::new(),
            name,
            location,
            capacity,
            description,
            created_by: caller,
            created_at: Utc::now(),
        };

        self.venues.insert(&venue).await?;

        info!(venue_id = %venue.id, created_by = %caller, "Venue created");

        // The only cross-venue entry a create can stale.
        self.cache.delete(keys::all_venues()).await?;

        Ok(venue)
    }

    /// Apply a partial patch to a venue. Only supplied fields overwrite.
    ///
    /// # Errors
    ///
    /// - [`BookingError::VenueNotFound`] — venue does not exist.
    /// - Store/cache transport errors, untranslated.
    pub async fn update_venue(&self, id: VenueId, patch: VenuePatch) -> Result<VenueDetail> {
        let detail = self
            .venues
            .update_partial(id, &patch)
            .await?
            .ok_or(BookingError::VenueNotFound)?;

        info!(venue_id = %id, "Venue updated");

        self.cache.delete(&keys::venue(id)).await?;
        self.cache.delete(keys::all_venues()).await?;

        Ok(detail)
    }

    /// Delete a venue, returning the deleted record.
    ///
    /// Reservations referencing the venue are not cascaded or invalidated;
    /// the venue simply becomes unreservable.
    ///
    /// # Errors
    ///
    /// - [`BookingError::VenueNotFound`] — venue does not exist.
    /// - Store/cache transport errors, untranslated.
    pub async fn delete_venue(&self, id: VenueId) -> Result<VenueDetail> {
        let detail = self
            .venues
            .delete_by_id(id)
            .await?
            .ok_or(BookingError::VenueNotFound)?;

        info!(venue_id = %id, "Venue deleted");

        self.cache.delete(&keys::venue(id)).await?;
        self.cache.delete(keys::all_venues()).await?;

        Ok(detail)
    }

    /// Offset-paginated venue listing with optional case-insensitive
    /// substring location filter. Always store-backed.
    ///
    /// # Errors
    ///
    /// Returns an error if the store query fails.
    pub async fn venues(
        &self,
        page: u32,
        limit: u32,
        location: Option<&str>,
    ) -> Result<Vec<VenueDetail>> {
        self.venues.list(page, limit, location).await
    }
}
