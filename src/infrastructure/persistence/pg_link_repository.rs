//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink, UtmParams};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// PostgreSQL repository for link storage.
///
/// Queries are bound at runtime so the crate builds without a live database;
/// the schema is pinned by `migrations/`. Alias uniqueness is guaranteed by
/// the `links_alias_key` constraint, which [`AppError::from`] maps to a 409.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    alias: String,
    original_url: String,
    creator_id: String,
    utm_source: Option<String>,
    utm_medium: Option<String>,
    utm_campaign: Option<String>,
    utm_term: Option<String>,
    utm_content: Option<String>,
    expires_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link {
            id: row.id,
            alias: row.alias,
            original_url: row.original_url,
            creator_id: row.creator_id,
            utm: UtmParams {
                source: row.utm_source,
                medium: row.utm_medium,
                campaign: row.utm_campaign,
                term: row.utm_term,
                content: row.utm_content,
            },
            expires_at: row.expires_at,
            created_at: row.created_at,
        }
    }
}

const LINK_COLUMNS: &str = "id, alias, original_url, creator_id, utm_source, utm_medium, \
                            utm_campaign, utm_term, utm_content, expires_at, created_at";

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let sql = format!(
            r#"
            INSERT INTO links
                (alias, original_url, creator_id,
                 utm_source, utm_medium, utm_campaign, utm_term, utm_content,
                 expires_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {LINK_COLUMNS}
            "#
        );

        let row: LinkRow = sqlx::query_as(&sql)
            .bind(&new_link.alias)
            .bind(&new_link.original_url)
            .bind(&new_link.creator_id)
            .bind(&new_link.utm.source)
            .bind(&new_link.utm.medium)
            .bind(&new_link.utm.campaign)
            .bind(&new_link.utm.term)
            .bind(&new_link.utm.content)
            .bind(new_link.expires_at)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into())
    }

    async fn find_by_alias(&self, alias: &str) -> Result<Option<Link>, AppError> {
        let sql = format!("SELECT {LINK_COLUMNS} FROM links WHERE alias = $1");

        let row: Option<LinkRow> = sqlx::query_as(&sql)
            .bind(alias)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Into::into))
    }

    async fn list_by_creator(&self, creator_id: &str, limit: i64) -> Result<Vec<Link>, AppError> {
        let sql = format!(
            r#"
            SELECT {LINK_COLUMNS}
            FROM links
            WHERE creator_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2
            "#
        );

        let rows: Vec<LinkRow> = sqlx::query_as(&sql)
            .bind(creator_id)
            .bind(limit)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count_by_creator(&self, creator_id: &str) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links WHERE creator_id = $1")
            .bind(creator_id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
