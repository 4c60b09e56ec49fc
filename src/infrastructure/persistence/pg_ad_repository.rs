//! PostgreSQL implementation of the ad repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Ad, AdPatch, NewAd};
use crate::domain::repositories::AdRepository;
use crate::error::AppError;

/// Columns selected for every ad read, with counters joined in.
const AD_COLUMNS: &str = r#"
    a.id, a.title, a.body, a.image_url, a.target_url, a.location_id,
    COALESCE(c.view_count, 0) AS view_count,
    COALESCE(c.click_count, 0) AS click_count,
    a.created_at, a.updated_at
"#;

#[derive(sqlx::FromRow)]
struct AdRow {
    id: i64,
    title: String,
    body: String,
    image_url: Option<String>,
    target_url: Option<String>,
    location_id: Option<i64>,
    view_count: i64,
    click_count: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<AdRow> for Ad {
    fn from(r: AdRow) -> Self {
        Ad {
            id: r.id,
            title: r.title,
            body: r.body,
            image_url: r.image_url,
            target_url: r.target_url,
            location_id: r.location_id,
            view_count: r.view_count,
            click_count: r.click_count,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// PostgreSQL repository for ads.
pub struct PgAdRepository {
    pool: Arc<PgPool>,
}

impl PgAdRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdRepository for PgAdRepository {
    async fn create(&self, new_ad: NewAd) -> Result<Ad, AppError> {
        let sql = format!(
            r#"
            WITH inserted AS (
                INSERT INTO ads (title, body, image_url, target_url, location_id)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING *
            )
            SELECT {AD_COLUMNS}
            FROM inserted a
            LEFT JOIN ad_counters c ON c.ad_id = a.id
            "#
        );

        let row = sqlx::query_as::<_, AdRow>(&sql)
            .bind(new_ad.title)
            .bind(new_ad.body)
            .bind(new_ad.image_url)
            .bind(new_ad.target_url)
            .bind(new_ad.location_id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Ad>, AppError> {
        let sql = format!(
            r#"
            SELECT {AD_COLUMNS}
            FROM ads a
            LEFT JOIN ad_counters c ON c.ad_id = a.id
            WHERE a.id = $1
            "#
        );

        let row = sqlx::query_as::<_, AdRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Ad::from))
    }

    async fn list(&self, location_id: Option<i64>) -> Result<Vec<Ad>, AppError> {
        let sql = format!(
            r#"
            SELECT {AD_COLUMNS}
            FROM ads a
            LEFT JOIN ad_counters c ON c.ad_id = a.id
            WHERE ($1::bigint IS NULL OR a.location_id = $1)
            ORDER BY a.created_at DESC, a.id DESC
            "#
        );

        let rows = sqlx::query_as::<_, AdRow>(&sql)
            .bind(location_id)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Ad::from).collect())
    }

    async fn random_in_location(&self, location_id: i64) -> Result<Option<Ad>, AppError> {
        let sql = format!(
            r#"
            SELECT {AD_COLUMNS}
            FROM ads a
            LEFT JOIN ad_counters c ON c.ad_id = a.id
            WHERE a.location_id = $1
            ORDER BY random()
            LIMIT 1
            "#
        );

        let row = sqlx::query_as::<_, AdRow>(&sql)
            .bind(location_id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Ad::from))
    }

    async fn update(&self, id: i64, patch: AdPatch) -> Result<Ad, AppError> {
        let (set_image, image_url) = split_patch(patch.image_url);
        let (set_target, target_url) = split_patch(patch.target_url);
        let (set_location, location_id) = split_patch(patch.location_id);

        let updated = sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE ads SET
                title       = COALESCE($2, title),
                body        = COALESCE($3, body),
                image_url   = CASE WHEN $4 THEN $5 ELSE image_url END,
                target_url  = CASE WHEN $6 THEN $7 ELSE target_url END,
                location_id = CASE WHEN $8 THEN $9 ELSE location_id END,
                updated_at  = NOW()
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .bind(patch.title)
        .bind(patch.body)
        .bind(set_image)
        .bind(image_url)
        .bind(set_target)
        .bind(target_url)
        .bind(set_location)
        .bind(location_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        if updated.is_none() {
            return Err(AppError::not_found("Ad not found", json!({ "id": id })));
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Ad not found", json!({ "id": id })))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM ad_counters WHERE ad_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM ads WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Splits a nullable patch field into a "was provided" flag and its value.
fn split_patch<T>(field: Option<Option<T>>) -> (bool, Option<T>) {
    match field {
        Some(value) => (true, value),
        None => (false, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_patch() {
        assert_eq!(split_patch::<i64>(None), (false, None));
        assert_eq!(split_patch::<i64>(Some(None)), (true, None));
        assert_eq!(split_patch(Some(Some(5))), (true, Some(5)));
    }
}
