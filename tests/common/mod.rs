#![allow(dead_code)]

use adposts::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub const TEST_SECRET: &str = "test-signing-secret";

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool), TEST_SECRET.to_string())
}

pub async fn create_test_location(
    pool: &PgPool,
    name: &str,
    slug: &str,
    dimension: Option<&str>,
) -> i64 {
    sqlx::query_scalar("INSERT INTO locations (name, slug, dimension) VALUES ($1, $2, $3) RETURNING id")
        .bind(name)
        .bind(slug)
        .bind(dimension)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_ad(pool: &PgPool, title: &str, body: &str, location_id: Option<i64>) -> i64 {
    sqlx::query_scalar("INSERT INTO ads (title, body, location_id) VALUES ($1, $2, $3) RETURNING id")
        .bind(title)
        .bind(body)
        .bind(location_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_image_ad(
    pool: &PgPool,
    title: &str,
    image_url: &str,
    target_url: &str,
    location_id: i64,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO ads (title, image_url, target_url, location_id) VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(title)
    .bind(image_url)
    .bind(target_url)
    .bind(location_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn save_settings(
    pool: &PgPool,
    in_content_enabled: bool,
    location_id: Option<i64>,
    position: i32,
) {
    sqlx::query(
        "INSERT INTO settings (id, in_content_enabled, in_content_location_id, in_content_position)
         VALUES (1, $1, $2, $3)
         ON CONFLICT (id) DO UPDATE SET
             in_content_enabled = EXCLUDED.in_content_enabled,
             in_content_location_id = EXCLUDED.in_content_location_id,
             in_content_position = EXCLUDED.in_content_position",
    )
    .bind(in_content_enabled)
    .bind(location_id)
    .bind(position)
    .execute(pool)
    .await
    .unwrap();
}

/// Returns `(view_count, click_count)`, zero when no counter row exists.
pub async fn counters(pool: &PgPool, ad_id: i64) -> (i64, i64) {
    sqlx::query_as(
        "SELECT COALESCE(MAX(view_count), 0)::BIGINT, COALESCE(MAX(click_count), 0)::BIGINT
         FROM ad_counters WHERE ad_id = $1",
    )
    .bind(ad_id)
    .fetch_one(pool)
    .await
    .unwrap()
}
