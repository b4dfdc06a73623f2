//! Custom Axum extractors.

use crate::error::AppError;
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use booking::UserId;
use uuid::Uuid;

/// The authenticated caller's identity.
///
/// Authentication itself happens upstream (out of scope here): the auth
/// middleware verifies the credential and forwards the resolved user id in
/// the `x-user-id` header. This extractor only reads that header; role
/// resolution happens in the services against the user store.
///
/// # Example
///
/// ```ignore
/// async fn handler(AuthenticatedUser(caller): AuthenticatedUser) -> String {
///     format!("caller: {caller}")
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser(pub UserId);

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get("x-user-id")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| Uuid::parse_str(s).ok())
            .map(|id| Self(UserId(id)))
            .ok_or_else(|| AppError::unauthorized("unauthorized"))
    }
}
