//! Repository trait for click recording and analytics rollups.

use crate::domain::entities::{Click, NewClick};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

/// Click count for one UTC calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyClicks {
    pub date: NaiveDate,
    pub clicks: i64,
}

/// Click count for one referer value; `None` means no Referer header was sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferrerCount {
    pub referer: Option<String>,
    pub clicks: i64,
}

/// Repository interface for the append-only click log.
///
/// Recording happens inside the redirect request; the aggregate queries back
/// the analytics dashboard and are always scoped to one creator's links.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClickRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Records a new click event.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors, including a missing
    /// `link_id` reference.
    async fn record(&self, new_click: NewClick) -> Result<Click, AppError>;

    /// Counts all clicks on links owned by `creator_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_by_creator(&self, creator_id: &str) -> Result<i64, AppError>;

    /// Clicks on the creator's links since `since`, grouped by UTC calendar
    /// date, oldest first. Dates with zero clicks are absent; the caller
    /// decides whether to zero-fill.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn clicks_per_day(
        &self,
        creator_id: &str,
        since: DateTime<Utc>,
    ) -> Result<Vec<DailyClicks>, AppError>;

    /// The creator's most frequent referers, count descending, up to `limit`.
    /// Ties are broken by referer value so the order is deterministic. A
    /// missing Referer header is a distinct `None` bucket.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn top_referrers(
        &self,
        creator_id: &str,
        limit: i64,
    ) -> Result<Vec<ReferrerCount>, AppError>;
}
