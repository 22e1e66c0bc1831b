#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use linktrack::application::services::{
    AnalyticsService, AuthService, LinkService, RedirectService,
};
use linktrack::domain::entities::{Click, CurrentUser, Link, NewClick, NewLink, UtmParams};
use linktrack::domain::repositories::{
    ApiToken, ClickRepository, DailyClicks, LinkRepository, ReferrerCount, TokenRepository,
};
use linktrack::error::AppError;
use linktrack::state::AppState;

pub const TEST_SECRET: &str = "test-signing-secret";
pub const TEST_TOKEN: &str = "test-token";
pub const BASE_URL: &str = "https://lnk.example";

mockall::mock! {
    pub LinkRepo {}

    #[async_trait]
    impl LinkRepository for LinkRepo {
        async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;
        async fn find_by_alias(&self, alias: &str) -> Result<Option<Link>, AppError>;
        async fn list_by_creator(&self, creator_id: &str, limit: i64) -> Result<Vec<Link>, AppError>;
        async fn count_by_creator(&self, creator_id: &str) -> Result<i64, AppError>;
    }
}

mockall::mock! {
    pub ClickRepo {}

    #[async_trait]
    impl ClickRepository for ClickRepo {
        async fn record(&self, new_click: NewClick) -> Result<Click, AppError>;
        async fn count_by_creator(&self, creator_id: &str) -> Result<i64, AppError>;
        async fn clicks_per_day(
            &self,
            creator_id: &str,
            since: DateTime<Utc>,
        ) -> Result<Vec<DailyClicks>, AppError>;
        async fn top_referrers(
            &self,
            creator_id: &str,
            limit: i64,
        ) -> Result<Vec<ReferrerCount>, AppError>;
    }
}

mockall::mock! {
    pub TokenRepo {}

    #[async_trait]
    impl TokenRepository for TokenRepo {
        async fn find_identity(&self, token_hash: &str) -> Result<Option<CurrentUser>, AppError>;
        async fn touch(&self, token_hash: &str) -> Result<(), AppError>;
        async fn create_token(
            &self,
            name: &str,
            token_hash: &str,
            user: &CurrentUser,
        ) -> Result<ApiToken, AppError>;
        async fn list_tokens(&self) -> Result<Vec<ApiToken>, AppError>;
        async fn find_by_name(&self, name: &str) -> Result<Option<ApiToken>, AppError>;
        async fn revoke_token(&self, id: i64) -> Result<(), AppError>;
    }
}

/// The identity that [`token_repo_accepting_test_token`] resolves to.
pub fn test_user() -> CurrentUser {
    CurrentUser {
        id: "user-1".to_string(),
        name: "Test User".to_string(),
        email: "test@example.com".to_string(),
    }
}

/// A token repository mock that authenticates [`TEST_TOKEN`] as [`test_user`]
/// and rejects everything else.
pub fn token_repo_accepting_test_token() -> MockTokenRepo {
    let expected_hash = AuthService::hash_token(TEST_SECRET, TEST_TOKEN);

    let mut repo = MockTokenRepo::new();
    repo.expect_find_identity().returning(move |hash| {
        if hash == expected_hash {
            Ok(Some(test_user()))
        } else {
            Ok(None)
        }
    });
    repo.expect_touch().returning(|_| Ok(()));
    repo
}

/// Builds application state over the given repository mocks.
pub fn create_test_state(
    link_repo: MockLinkRepo,
    click_repo: MockClickRepo,
    token_repo: MockTokenRepo,
) -> AppState {
    let link_repo: Arc<dyn LinkRepository> = Arc::new(link_repo);
    let click_repo: Arc<dyn ClickRepository> = Arc::new(click_repo);
    let token_repo: Arc<dyn TokenRepository> = Arc::new(token_repo);

    AppState {
        link_service: Arc::new(LinkService::new(link_repo.clone())),
        redirect_service: Arc::new(RedirectService::new(link_repo.clone(), click_repo.clone())),
        analytics_service: Arc::new(AnalyticsService::new(link_repo, click_repo)),
        auth_service: Arc::new(AuthService::new(token_repo, TEST_SECRET.to_string())),
        base_url: BASE_URL.to_string(),
    }
}

/// A stored link with sensible defaults for tests.
pub fn sample_link(id: i64, alias: &str, original_url: &str) -> Link {
    Link {
        id,
        alias: alias.to_string(),
        original_url: original_url.to_string(),
        creator_id: test_user().id,
        utm: UtmParams::default(),
        expires_at: None,
        created_at: Utc::now(),
    }
}

/// Materializes a [`NewLink`] the way an insert would, assigning `id`.
pub fn stored(new_link: NewLink, id: i64) -> Link {
    Link {
        id,
        alias: new_link.alias,
        original_url: new_link.original_url,
        creator_id: new_link.creator_id,
        utm: new_link.utm,
        expires_at: new_link.expires_at,
        created_at: Utc::now(),
    }
}

/// Materializes a [`NewClick`] the way an insert would, assigning `id`.
pub fn recorded(new_click: NewClick, id: i64) -> Click {
    Click {
        id,
        link_id: new_click.link_id,
        clicked_at: Utc::now(),
        user_agent: new_click.user_agent,
        referer: new_click.referer,
        country: new_click.country,
        city: new_click.city,
    }
}

// ─── Postgres fixtures (repository tests) ────────────────────────────────────

pub async fn insert_link(pool: &PgPool, alias: &str, url: &str, creator_id: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO links (alias, original_url, creator_id) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(alias)
    .bind(url)
    .bind(creator_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_click_at(
    pool: &PgPool,
    link_id: i64,
    clicked_at: DateTime<Utc>,
    referer: Option<&str>,
) {
    sqlx::query("INSERT INTO link_clicks (link_id, clicked_at, referer) VALUES ($1, $2, $3)")
        .bind(link_id)
        .bind(clicked_at)
        .bind(referer)
        .execute(pool)
        .await
        .unwrap();
}
