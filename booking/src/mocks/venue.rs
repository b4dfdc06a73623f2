//! Mock venue repository for testing.

use crate::error::{BookingError, Result};
use crate::providers::VenueRepository;
use crate::state::{CreatorProfile, User, UserId, Venue, VenueDetail, VenueId, VenuePatch};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock venue repository backed by an in-memory map.
///
/// Creator projections are resolved from profiles registered with
/// [`register_creator`](MockVenueRepository::register_creator); an insert by
/// an unregistered creator gets an empty profile.
#[derive(Debug, Clone, Default)]
pub struct MockVenueRepository {
    venues: Arc<Mutex<HashMap<VenueId, VenueDetail>>>,
    profiles: Arc<Mutex<HashMap<UserId, CreatorProfile>>>,
}

#[allow(clippy::unwrap_used)]
impl MockVenueRepository {
    /// Create a new mock venue repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user's public profile for creator projections.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn register_creator(&self, user: &User) {
        self.profiles.lock().unwrap().insert(
            user.id,
            CreatorProfile {
                email: user.email.clone(),
                user_name: user.user_name.clone(),
            },
        );
    }

    /// Seed a fully formed detail directly.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn seed(&self, detail: VenueDetail) {
        self.venues.lock().unwrap().insert(detail.venue.id, detail);
    }

    /// Number of stored venues.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.venues.lock().unwrap().len()
    }

    /// Returns `true` if no venue is stored.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<VenueId, VenueDetail>>> {
        self.venues
            .lock()
            .map_err(|_| BookingError::Database("mock lock poisoned".to_string()))
    }
}

impl VenueRepository for MockVenueRepository {
    async fn insert(&self, venue: &Venue) -> Result<()> {
        let creator = self
            .profiles
            .lock()
            .map_err(|_| BookingError::Database("mock lock poisoned".to_string()))?
            .get(&venue.created_by)
            .cloned()
            .unwrap_or(CreatorProfile {
                email: String::new(),
                user_name: String::new(),
            });

        self.lock()?.insert(
            venue.id,
            VenueDetail {
                venue: venue.clone(),
                creator,
            },
        );
        Ok(())
    }

    async fn detail_by_id(&self, id: VenueId) -> Result<Option<VenueDetail>> {
        Ok(self.lock()?.get(&id).cloned())
    }

    async fn update_partial(&self, id: VenueId, patch: &VenuePatch) -> Result<Option<VenueDetail>> {
        let mut guard = self.lock()?;
        let Some(detail) = guard.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(name) = &patch.name {
            detail.venue.name.clone_from(name);
        }
        if let Some(location) = &patch.location {
            detail.venue.location.clone_from(location);
        }
        if let Some(capacity) = patch.capacity {
            detail.venue.capacity = capacity;
        }
        if let Some(description) = &patch.description {
            detail.venue.description.clone_from(description);
        }

        Ok(Some(detail.clone()))
    }

    async fn delete_by_id(&self, id: VenueId) -> Result<Option<VenueDetail>> {
        Ok(self.lock()?.remove(&id))
    }

    async fn list(
        &self,
        page: u32,
        limit: u32,
        location: Option<&str>,
    ) -> Result<Vec<VenueDetail>> {
        let guard = self.lock()?;

        let needle = location.map(str::to_lowercase);
        let mut details: Vec<VenueDetail> = guard
            .values()
            .filter(|d| {
                needle
                    .as_ref()
                    .is_none_or(|n| d.venue.location.to_lowercase().contains(n))
            })
            .cloned()
            .collect();
        details.sort_by_key(|d| d.venue.created_at);

        let offset = (page.max(1) - 1) as usize * limit as usize;
        Ok(details
            .into_iter()
            .skip(offset)
            .take(limit as usize)
            .collect())
    }
}
