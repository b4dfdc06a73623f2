//! User repository trait.

use crate::error::Result;
use crate::state::{User, UserId};
use std::future::Future;

/// Read-only access to user reference data.
///
/// The booking engine never creates or mutates users; it only resolves
/// caller identities and reads the fields it denormalizes (email, display
/// name, role).
pub trait UserRepository: Send + Sync {
    /// Look up a user by id.
    ///
    /// Returns `None` if the user does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the store query fails.
    fn user_by_id(&self, id: UserId) -> impl Future<Output = Result<Option<User>>> + Send;
}
