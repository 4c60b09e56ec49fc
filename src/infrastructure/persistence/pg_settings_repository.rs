//! PostgreSQL implementation of the settings repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Settings;
use crate::domain::repositories::SettingsRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct SettingsRow {
    sizes: Vec<String>,
    in_content_enabled: bool,
    in_content_location_id: Option<i64>,
    in_content_position: i32,
}

impl From<SettingsRow> for Settings {
    fn from(r: SettingsRow) -> Self {
        Settings {
            sizes: r.sizes,
            in_content_enabled: r.in_content_enabled,
            in_content_location_id: r.in_content_location_id,
            in_content_position: r.in_content_position,
        }
    }
}

/// Settings stored as the single row `id = 1` of the `settings` table.
pub struct PgSettingsRepository {
    pool: Arc<PgPool>,
}

impl PgSettingsRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsRepository for PgSettingsRepository {
    async fn load(&self) -> Result<Option<Settings>, AppError> {
        let row = sqlx::query_as::<_, SettingsRow>(
            r#"
            SELECT sizes, in_content_enabled, in_content_location_id, in_content_position
            FROM settings
            WHERE id = 1
            "#,
        )
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Settings::from))
    }

    async fn save(&self, settings: Settings) -> Result<Settings, AppError> {
        let row = sqlx::query_as::<_, SettingsRow>(
            r#"
            INSERT INTO settings (id, sizes, in_content_enabled, in_content_location_id, in_content_position)
            VALUES (1, $1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE SET
                sizes                  = EXCLUDED.sizes,
                in_content_enabled     = EXCLUDED.in_content_enabled,
                in_content_location_id = EXCLUDED.in_content_location_id,
                in_content_position    = EXCLUDED.in_content_position,
                updated_at             = NOW()
            RETURNING sizes, in_content_enabled, in_content_location_id, in_content_position
            "#,
        )
        .bind(settings.sizes)
        .bind(settings.in_content_enabled)
        .bind(settings.in_content_location_id)
        .bind(settings.in_content_position)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }
}
