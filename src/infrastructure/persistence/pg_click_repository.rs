//! PostgreSQL implementation of the click repository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Click, NewClick};
use crate::domain::repositories::{ClickRepository, DailyClicks, ReferrerCount};
use crate::error::AppError;

/// PostgreSQL repository for the append-only click log.
///
/// Aggregate queries join through `links` so results are always scoped to one
/// creator's links; the ownership filter lives in SQL, not application code.
pub struct PgClickRepository {
    pool: Arc<PgPool>,
}

impl PgClickRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ClickRow {
    id: i64,
    link_id: i64,
    clicked_at: DateTime<Utc>,
    user_agent: Option<String>,
    referer: Option<String>,
    country: String,
    city: String,
}

impl From<ClickRow> for Click {
    fn from(row: ClickRow) -> Self {
        Click {
            id: row.id,
            link_id: row.link_id,
            clicked_at: row.clicked_at,
            user_agent: row.user_agent,
            referer: row.referer,
            country: row.country,
            city: row.city,
        }
    }
}

#[async_trait]
impl ClickRepository for PgClickRepository {
    async fn record(&self, new_click: NewClick) -> Result<Click, AppError> {
        let row: ClickRow = sqlx::query_as(
            r#"
            INSERT INTO link_clicks (link_id, user_agent, referer, country, city)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, link_id, clicked_at, user_agent, referer, country, city
            "#,
        )
        .bind(new_click.link_id)
        .bind(&new_click.user_agent)
        .bind(&new_click.referer)
        .bind(&new_click.country)
        .bind(&new_click.city)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn count_by_creator(&self, creator_id: &str) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM link_clicks lc
            JOIN links l ON l.id = lc.link_id
            WHERE l.creator_id = $1
            "#,
        )
        .bind(creator_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn clicks_per_day(
        &self,
        creator_id: &str,
        since: DateTime<Utc>,
    ) -> Result<Vec<DailyClicks>, AppError> {
        let rows: Vec<(NaiveDate, i64)> = sqlx::query_as(
            r#"
            SELECT (lc.clicked_at AT TIME ZONE 'UTC')::date AS day, COUNT(*) AS clicks
            FROM link_clicks lc
            JOIN links l ON l.id = lc.link_id
            WHERE l.creator_id = $1 AND lc.clicked_at >= $2
            GROUP BY day
            ORDER BY day
            "#,
        )
        .bind(creator_id)
        .bind(since)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|(date, clicks)| DailyClicks { date, clicks })
            .collect())
    }

    async fn top_referrers(
        &self,
        creator_id: &str,
        limit: i64,
    ) -> Result<Vec<ReferrerCount>, AppError> {
        let rows: Vec<(Option<String>, i64)> = sqlx::query_as(
            r#"
            SELECT lc.referer, COUNT(*) AS clicks
            FROM link_clicks lc
            JOIN links l ON l.id = lc.link_id
            WHERE l.creator_id = $1
            GROUP BY lc.referer
            ORDER BY clicks DESC, lc.referer ASC NULLS LAST
            LIMIT $2
            "#,
        )
        .bind(creator_id)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|(referer, clicks)| ReferrerCount { referer, clicks })
            .collect())
    }
}
