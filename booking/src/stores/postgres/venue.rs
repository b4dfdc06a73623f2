//! PostgreSQL venue repository implementation.
//!
//! Venue reads join the creator's public fields in a single statement;
//! updates and deletes use `RETURNING` CTEs so the returned detail reflects
//! exactly the row the write touched.

use crate::error::{BookingError, Result};
use crate::providers::VenueRepository;
use crate::state::{CreatorProfile, UserId, Venue, VenueDetail, VenueId, VenuePatch};
use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// PostgreSQL venue repository.
#[derive(Clone)]
pub struct PostgresVenueRepository {
    pool: PgPool,
}

impl PostgresVenueRepository {
    /// Create a new PostgreSQL venue repository.
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct VenueDetailRow {
    id: uuid::Uuid,
    name: String,
    location: String,
    capacity: i32,
    description: String,
    created_by: uuid::Uuid,
    created_at: DateTime<Utc>,
    creator_email: String,
    creator_user_name: String,
}

impl TryFrom<VenueDetailRow> for VenueDetail {
    type Error = BookingError;

    fn try_from(row: VenueDetailRow) -> Result<Self> {
        let capacity = u32::try_from(row.capacity)
            .map_err(|_| BookingError::Database(format!("negative capacity: {}", row.capacity)))?;
        Ok(Self {
            venue: Venue {
                id: VenueId(row.id),
                name: row.name,
                location: row.location,
                capacity,
                description: row.description,
                created_by: UserId(row.created_by),
                created_at: row.created_at,
            },
            creator: CreatorProfile {
                email: row.creator_email,
                user_name: row.creator_user_name,
            },
        })
    }
}

const DETAIL_COLUMNS: &str = r"
    v.id, v.name, v.location, v.capacity, v.description,
    v.created_by, v.created_at,
    u.email AS creator_email, u.user_name AS creator_user_name
";

impl VenueRepository for PostgresVenueRepository {
    async fn insert(&self, venue: &Venue) -> Result<()> {
        let capacity = i32::try_from(venue.capacity)
            .map_err(|_| BookingError::Database("capacity out of range".to_string()))?;

        sqlx::query(
            r"
            INSERT INTO venues (id, name, location, capacity, description, created_by, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(venue.id.0)
        .bind(&venue.name)
        .bind(&venue.location)
        .bind(capacity)
        .bind(&venue.description)
        .bind(venue.created_by.0)
        .bind(venue.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| BookingError::Database(format!("failed to insert venue: {e}")))?;

        Ok(())
    }

    async fn detail_by_id(&self, id: VenueId) -> Result<Option<VenueDetail>> {
        let query = format!(
            r"
            SELECT {DETAIL_COLUMNS}
            FROM venues v
            JOIN users u ON u.id = v.created_by
            WHERE v.id = $1
            "
        );

        let row: Option<VenueDetailRow> = sqlx::query_as(&query)
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| BookingError::Database(format!("failed to get venue: {e}")))?;

        row.map(VenueDetail::try_from).transpose()
    }

    async fn update_partial(&self, id: VenueId, patch: &VenuePatch) -> Result<Option<VenueDetail>> {
        let capacity = patch
            .capacity
            .map(i32::try_from)
            .transpose()
            .map_err(|_| BookingError::Database("capacity out of range".to_string()))?;

        // COALESCE keeps stored values where the patch leaves a field unset.
        let query = format!(
            r"
            WITH updated AS (
                UPDATE venues
                SET name        = COALESCE($2, name),
                    location    = COALESCE($3, location),
                    capacity    = COALESCE($4, capacity),
                    description = COALESCE($5, description)
                WHERE id = $1
                RETURNING *
            )
            SELECT {DETAIL_COLUMNS}
            FROM updated v
            JOIN users u ON u.id = v.created_by
            "
        );

        let row: Option<VenueDetailRow> = sqlx::query_as(&query)
            .bind(id.0)
            .bind(patch.name.as_deref())
            .bind(patch.location.as_deref())
            .bind(capacity)
            .bind(patch.description.as_deref())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| BookingError::Database(format!("failed to update venue: {e}")))?;

        row.map(VenueDetail::try_from).transpose()
    }

    async fn delete_by_id(&self, id: VenueId) -> Result<Option<VenueDetail>> {
        let query = format!(
            r"
            WITH deleted AS (
                DELETE FROM venues
                WHERE id = $1
                RETURNING *
            )
            SELECT {DETAIL_COLUMNS}
            FROM deleted v
            JOIN users u ON u.id = v.created_by
            "
        );

        let row: Option<VenueDetailRow> = sqlx::query_as(&query)
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| BookingError::Database(format!("failed to delete venue: {e}")))?;

        row.map(VenueDetail::try_from).transpose()
    }

    async fn list(
        &self,
        page: u32,
        limit: u32,
        location: Option<&str>,
    ) -> Result<Vec<VenueDetail>> {
        let offset = i64::from(page.max(1) - 1) * i64::from(limit);

        let query = format!(
            r"
            SELECT {DETAIL_COLUMNS}
            FROM venues v
            JOIN users u ON u.id = v.created_by
            WHERE $1::text IS NULL OR v.location ILIKE '%' || $1 || '%'
            ORDER BY v.created_at
            OFFSET $2
            LIMIT $3
            "
        );

        let rows: Vec<VenueDetailRow> = sqlx::query_as(&query)
            .bind(location)
            .bind(offset)
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| BookingError::Database(format!("failed to list venues: {e}")))?;

        rows.into_iter().map(VenueDetail::try_from).collect()
    }
}
