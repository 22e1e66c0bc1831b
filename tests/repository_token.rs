mod common;

use sqlx::PgPool;
use std::sync::Arc;

use linktrack::domain::repositories::TokenRepository;
use linktrack::error::AppError;
use linktrack::infrastructure::persistence::PgTokenRepository;

const HASH: &str = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

#[sqlx::test]
async fn test_create_and_resolve_identity(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool));
    let user = common::test_user();

    let token = repo.create_token("Production API", HASH, &user).await.unwrap();

    assert!(token.id > 0);
    assert_eq!(token.name, "Production API");
    assert_eq!(token.user_id, user.id);
    assert!(token.revoked_at.is_none());

    let identity = repo.find_identity(HASH).await.unwrap().unwrap();
    assert_eq!(identity, user);
}

#[sqlx::test]
async fn test_find_identity_unknown_hash(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool));

    let identity = repo.find_identity("no-such-hash").await.unwrap();

    assert!(identity.is_none());
}

#[sqlx::test]
async fn test_revoked_token_no_longer_resolves(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool));

    let token = repo
        .create_token("Old API", HASH, &common::test_user())
        .await
        .unwrap();

    repo.revoke_token(token.id).await.unwrap();

    assert!(repo.find_identity(HASH).await.unwrap().is_none());

    let listed = repo.find_by_name("Old API").await.unwrap().unwrap();
    assert!(listed.revoked_at.is_some());
}

#[sqlx::test]
async fn test_revoke_unknown_token_is_not_found(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool));

    let err = repo.revoke_token(9999).await.unwrap_err();

    assert!(matches!(err, AppError::NotFound { .. }), "got {err:?}");
}

#[sqlx::test]
async fn test_duplicate_hash_is_conflict(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool));
    let user = common::test_user();

    repo.create_token("First", HASH, &user).await.unwrap();
    let err = repo.create_token("Second", HASH, &user).await.unwrap_err();

    assert!(matches!(err, AppError::Conflict { .. }), "got {err:?}");
}

#[sqlx::test]
async fn test_touch_sets_last_used_at(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool.clone()));

    repo.create_token("Touched", HASH, &common::test_user())
        .await
        .unwrap();

    repo.touch(HASH).await.unwrap();

    let last_used: Option<chrono::DateTime<chrono::Utc>> =
        sqlx::query_scalar("SELECT last_used_at FROM api_tokens WHERE token_hash = $1")
            .bind(HASH)
            .fetch_one(&pool)
            .await
            .unwrap();

    assert!(last_used.is_some());
}

#[sqlx::test]
async fn test_list_tokens_returns_all(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool));
    let user = common::test_user();

    repo.create_token("One", "hash-one", &user).await.unwrap();
    repo.create_token("Two", "hash-two", &user).await.unwrap();

    let tokens = repo.list_tokens().await.unwrap();

    assert_eq!(tokens.len(), 2);
}
