//! PostgreSQL implementation of the counter repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::CounterRepository;
use crate::error::AppError;

/// Counter storage on the `ad_counters` table.
///
/// Increments are single `INSERT ... ON CONFLICT DO UPDATE` statements, so
/// the read-modify-write happens inside PostgreSQL under the row lock.
pub struct PgCounterRepository {
    pool: Arc<PgPool>,
}

impl PgCounterRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CounterRepository for PgCounterRepository {
    async fn increment_views(&self, ad_id: i64) -> Result<i64, AppError> {
        let views = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO ad_counters (ad_id, view_count)
            VALUES ($1, 1)
            ON CONFLICT (ad_id)
            DO UPDATE SET view_count = ad_counters.view_count + 1
            RETURNING view_count
            "#,
        )
        .bind(ad_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(views)
    }

    async fn increment_clicks(&self, ad_id: i64) -> Result<i64, AppError> {
        let clicks = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO ad_counters (ad_id, click_count)
            VALUES ($1, 1)
            ON CONFLICT (ad_id)
            DO UPDATE SET click_count = ad_counters.click_count + 1
            RETURNING click_count
            "#,
        )
        .bind(ad_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(clicks)
    }
}
