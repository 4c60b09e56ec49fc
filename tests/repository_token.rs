use adposts::domain::repositories::TokenRepository;
use adposts::infrastructure::persistence::PgTokenRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_create_token(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool));

    let token = repo.create_token("test-token", "hash123").await.unwrap();

    assert_eq!(token.name, "test-token");
    assert_eq!(token.token_hash, "hash123");
    assert!(!token.is_revoked());
    assert!(token.last_used_at.is_none());
}

#[sqlx::test]
async fn test_create_duplicate_hash_conflicts(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool));

    repo.create_token("first", "samehash").await.unwrap();
    let result = repo.create_token("second", "samehash").await;

    assert!(matches!(
        result,
        Err(adposts::AppError::Conflict { .. })
    ));
}

#[sqlx::test]
async fn test_validate_token(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool));

    repo.create_token("valid-token", "validhash").await.unwrap();

    assert!(repo.validate_token("validhash").await.unwrap());
    assert!(!repo.validate_token("nonexistent").await.unwrap());
}

#[sqlx::test]
async fn test_validate_token_revoked(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool));

    let token = repo
        .create_token("revoked-token", "revokedhash")
        .await
        .unwrap();
    repo.revoke_token(token.id).await.unwrap();

    assert!(!repo.validate_token("revokedhash").await.unwrap());
}

#[sqlx::test]
async fn test_revoke_twice_is_not_found(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool));

    let token = repo.create_token("once", "oncehash").await.unwrap();
    repo.revoke_token(token.id).await.unwrap();

    let result = repo.revoke_token(token.id).await;
    assert!(matches!(result, Err(adposts::AppError::NotFound { .. })));
}

#[sqlx::test]
async fn test_update_last_used(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool));

    let token = repo.create_token("update-token", "updatehash").await.unwrap();
    repo.update_last_used("updatehash").await.unwrap();

    let reloaded = repo.find_by_id(token.id).await.unwrap().unwrap();
    assert!(reloaded.last_used_at.is_some());
}

#[sqlx::test]
async fn test_list_and_find_by_name(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool));

    repo.create_token("ops", "hash-a").await.unwrap();
    let newer = repo.create_token("ops", "hash-b").await.unwrap();
    repo.create_token("ci", "hash-c").await.unwrap();

    let tokens = repo.list_tokens().await.unwrap();
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].token_hash, "hash-a");

    let found = repo.find_by_name("ops").await.unwrap().unwrap();
    assert_eq!(found.id, newer.id);

    assert!(repo.find_by_name("missing").await.unwrap().is_none());
}
