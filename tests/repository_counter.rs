mod common;

use adposts::domain::repositories::CounterRepository;
use adposts::infrastructure::persistence::PgCounterRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_increment_creates_row(pool: PgPool) {
    let repo = PgCounterRepository::new(Arc::new(pool.clone()));

    assert_eq!(repo.increment_views(5).await.unwrap(), 1);
    assert_eq!(repo.increment_views(5).await.unwrap(), 2);
    assert_eq!(repo.increment_clicks(5).await.unwrap(), 1);

    assert_eq!(common::counters(&pool, 5).await, (2, 1));
}

#[sqlx::test]
async fn test_click_for_unknown_ad_is_recorded(pool: PgPool) {
    let repo = PgCounterRepository::new(Arc::new(pool.clone()));

    assert_eq!(repo.increment_clicks(999).await.unwrap(), 1);
    assert_eq!(common::counters(&pool, 999).await, (0, 1));
}

#[sqlx::test]
async fn test_concurrent_increments_are_not_lost(pool: PgPool) {
    let repo = Arc::new(PgCounterRepository::new(Arc::new(pool.clone())));

    let handles: Vec<_> = (0..20)
        .map(|_| {
            let repo = repo.clone();
            tokio::spawn(async move { repo.increment_views(7).await.unwrap() })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(common::counters(&pool, 7).await, (20, 0));
}
