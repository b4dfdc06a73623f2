//! Mock user repository for testing.

use crate::error::{BookingError, Result};
use crate::providers::UserRepository;
use crate::state::{Role, User, UserId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock user repository backed by an in-memory map.
#[derive(Debug, Clone, Default)]
pub struct MockUserRepository {
    users: Arc<Mutex<HashMap<UserId, User>>>,
}

impl MockUserRepository {
    /// Create a new mock user repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a user.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[allow(clippy::unwrap_used)]
    pub fn add(&self, user: User) {
        self.users.lock().unwrap().insert(user.id, user);
    }

    /// Convenience: insert and return a fresh user with the given role.
    #[must_use]
    pub fn add_new(&self, email: &str, user_name: &str, role: Role) -> User {
        let user = User {
            id: UserId::new(),
            email: email.to_string(),
            user_name: user_name.to_string(),
            role,
        };
        self.add(user.clone());
        user
    }
}

impl UserRepository for MockUserRepository {
    async fn user_by_id(&self, id: UserId) -> Result<Option<User>> {
        let users = self
            .users
            .lock()
            .map_err(|_| BookingError::Database("mock lock poisoned".to_string()))?;
        Ok(users.get(&id).cloned())
    }
}
