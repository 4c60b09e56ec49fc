mod common;

use adposts::domain::entities::Settings;
use adposts::domain::repositories::SettingsRepository;
use adposts::infrastructure::persistence::PgSettingsRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_load_without_row(pool: PgPool) {
    let repo = PgSettingsRepository::new(Arc::new(pool));

    assert!(repo.load().await.unwrap().is_none());
}

#[sqlx::test]
async fn test_save_and_overwrite(pool: PgPool) {
    let location_id = common::create_test_location(&pool, "Inline", "inline", Some("468x60")).await;
    let repo = PgSettingsRepository::new(Arc::new(pool));

    let saved = repo
        .save(Settings {
            sizes: vec!["468x60".to_string(), "responsive".to_string()],
            in_content_enabled: true,
            in_content_location_id: Some(location_id),
            in_content_position: 2,
        })
        .await
        .unwrap();
    assert_eq!(saved.sizes, vec!["468x60", "responsive"]);

    repo.save(Settings::default()).await.unwrap();

    let loaded = repo.load().await.unwrap().unwrap();
    assert_eq!(loaded, Settings::default());
}

#[sqlx::test]
async fn test_deleting_location_clears_reference(pool: PgPool) {
    let location_id = common::create_test_location(&pool, "Inline", "inline", Some("468x60")).await;
    common::save_settings(&pool, true, Some(location_id), 1).await;

    sqlx::query("DELETE FROM locations WHERE id = $1")
        .bind(location_id)
        .execute(&pool)
        .await
        .unwrap();

    let repo = PgSettingsRepository::new(Arc::new(pool));
    let loaded = repo.load().await.unwrap().unwrap();
    assert_eq!(loaded.in_content_location_id, None);
    assert!(loaded.in_content_enabled);
}
