//! PostgreSQL user repository implementation.
//!
//! Read-only: the booking engine consults user reference data owned by the
//! upstream auth service.

use crate::error::{BookingError, Result};
use crate::providers::UserRepository;
use crate::state::{Role, User, UserId};
use sqlx::PgPool;

/// PostgreSQL user repository.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Create a new PostgreSQL user repository.
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: uuid::Uuid,
    email: String,
    user_name: String,
    role: String,
}

impl TryFrom<UserRow> for User {
    type Error = BookingError;

    fn try_from(row: UserRow) -> Result<Self> {
        let role = Role::parse(&row.role)
            .ok_or_else(|| BookingError::Database(format!("unknown role: {}", row.role)))?;
        Ok(Self {
            id: UserId(row.id),
            email: row.email,
            user_name: row.user_name,
            role,
        })
    }
}

impl UserRepository for PostgresUserRepository {
    async fn user_by_id(&self, id: UserId) -> Result<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            r"
            SELECT id, email, user_name, role
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| BookingError::Database(format!("failed to get user: {e}")))?;

        row.map(User::try_from).transpose()
    }
}
