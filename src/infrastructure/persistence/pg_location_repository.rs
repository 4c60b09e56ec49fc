//! PostgreSQL implementation of the location repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Location, LocationSummary, NewLocation, UpdateLocation};
use crate::domain::repositories::LocationRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct LocationRow {
    id: i64,
    name: String,
    slug: String,
    dimension: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<LocationRow> for Location {
    fn from(r: LocationRow) -> Self {
        Location::new(r.id, r.name, r.slug, r.dimension, r.created_at)
    }
}

#[derive(sqlx::FromRow)]
struct SummaryRow {
    #[sqlx(flatten)]
    location: LocationRow,
    ad_count: i64,
}

/// PostgreSQL repository for locations.
pub struct PgLocationRepository {
    pool: Arc<PgPool>,
}

impl PgLocationRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LocationRepository for PgLocationRepository {
    async fn create(&self, new_location: NewLocation) -> Result<Location, AppError> {
        let row = sqlx::query_as::<_, LocationRow>(
            r#"
            INSERT INTO locations (name, slug, dimension)
            VALUES ($1, $2, $3)
            RETURNING id, name, slug, dimension, created_at
            "#,
        )
        .bind(new_location.name)
        .bind(new_location.slug)
        .bind(new_location.dimension)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Location>, AppError> {
        let row = sqlx::query_as::<_, LocationRow>(
            "SELECT id, name, slug, dimension, created_at FROM locations WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Location::from))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Location>, AppError> {
        let row = sqlx::query_as::<_, LocationRow>(
            "SELECT id, name, slug, dimension, created_at FROM locations WHERE slug = $1",
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Location::from))
    }

    async fn list(&self) -> Result<Vec<LocationSummary>, AppError> {
        let rows = sqlx::query_as::<_, SummaryRow>(
            r#"
            SELECT l.id, l.name, l.slug, l.dimension, l.created_at,
                   COUNT(a.id) AS ad_count
            FROM locations l
            LEFT JOIN ads a ON a.location_id = l.id
            GROUP BY l.id
            ORDER BY l.name, l.id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| LocationSummary {
                location: r.location.into(),
                ad_count: r.ad_count,
            })
            .collect())
    }

    async fn update(&self, id: i64, update: UpdateLocation) -> Result<Location, AppError> {
        let (set_dimension, dimension) = match update.dimension {
            Some(value) => (true, value),
            None => (false, None),
        };

        let row = sqlx::query_as::<_, LocationRow>(
            r#"
            UPDATE locations SET
                name      = COALESCE($2, name),
                slug      = COALESCE($3, slug),
                dimension = CASE WHEN $4 THEN $5 ELSE dimension END
            WHERE id = $1
            RETURNING id, name, slug, dimension, created_at
            "#,
        )
        .bind(id)
        .bind(update.name)
        .bind(update.slug)
        .bind(set_dimension)
        .bind(dimension)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Location::from)
            .ok_or_else(|| AppError::not_found("Location not found", json!({ "id": id })))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM locations WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
