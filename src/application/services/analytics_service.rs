//! Click analytics aggregation for the dashboard.

use std::sync::Arc;

use crate::domain::entities::{CurrentUser, Link};
use crate::domain::repositories::{ClickRepository, DailyClicks, LinkRepository};
use crate::error::AppError;
use chrono::{Duration, NaiveDate, NaiveTime, Utc};

/// Number of calendar days covered by the click chart, today inclusive.
const CHART_DAYS: i64 = 7;

/// Number of entries in the referrer and recent-link lists.
const TOP_LIMIT: i64 = 5;

/// Referrer bucket name used when no Referer header was sent.
const DIRECT_REFERRER: &str = "Direct";

/// Top-line counters for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub total_links: i64,
    pub total_clicks: i64,
}

/// One named referrer bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferrerBucket {
    pub name: String,
    pub value: i64,
}

/// Everything the analytics endpoint returns, computed for one creator.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub summary: Summary,
    pub chart_data: Vec<DailyClicks>,
    pub top_referrers: Vec<ReferrerBucket>,
    pub recent_links: Vec<Link>,
}

/// Service computing per-creator click analytics.
///
/// Every query is scoped by `creator_id`; a link's creator is the only
/// identity allowed to see its numbers.
pub struct AnalyticsService {
    link_repository: Arc<dyn LinkRepository>,
    click_repository: Arc<dyn ClickRepository>,
}

impl AnalyticsService {
    /// Creates a new analytics service.
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        click_repository: Arc<dyn ClickRepository>,
    ) -> Self {
        Self {
            link_repository,
            click_repository,
        }
    }

    /// Computes the full dashboard for `creator`.
    ///
    /// The click chart covers the last 7 UTC calendar days (today inclusive)
    /// and is zero-filled: every date appears exactly once, oldest first,
    /// so the series is continuous even on days without traffic.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn dashboard(&self, creator: &CurrentUser) -> Result<Dashboard, AppError> {
        let today = Utc::now().date_naive();
        let window_start = today - Duration::days(CHART_DAYS - 1);
        let since = window_start
            .and_time(NaiveTime::MIN)
            .and_utc();

        let total_links = self.link_repository.count_by_creator(&creator.id).await?;
        let total_clicks = self.click_repository.count_by_creator(&creator.id).await?;
        let raw_days = self
            .click_repository
            .clicks_per_day(&creator.id, since)
            .await?;
        let referrers = self
            .click_repository
            .top_referrers(&creator.id, TOP_LIMIT)
            .await?;
        let recent_links = self
            .link_repository
            .list_by_creator(&creator.id, TOP_LIMIT)
            .await?;

        Ok(Dashboard {
            summary: Summary {
                total_links,
                total_clicks,
            },
            chart_data: zero_fill(window_start, today, &raw_days),
            top_referrers: referrers
                .into_iter()
                .map(|bucket| ReferrerBucket {
                    name: bucket
                        .referer
                        .unwrap_or_else(|| DIRECT_REFERRER.to_string()),
                    value: bucket.clicks,
                })
                .collect(),
            recent_links,
        })
    }
}

/// Expands sparse per-day counts into a continuous series over
/// `[start, end]`, inserting zero buckets for absent dates.
fn zero_fill(start: NaiveDate, end: NaiveDate, raw: &[DailyClicks]) -> Vec<DailyClicks> {
    let mut series = Vec::with_capacity((end - start).num_days() as usize + 1);
    let mut date = start;
    while date <= end {
        let clicks = raw
            .iter()
            .find(|bucket| bucket.date == date)
            .map_or(0, |bucket| bucket.clicks);
        series.push(DailyClicks { date, clicks });
        date = date.succ_opt().expect("date within chrono range");
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::UtmParams;
    use crate::domain::repositories::{
        MockClickRepository, MockLinkRepository, ReferrerCount,
    };

    fn creator() -> CurrentUser {
        CurrentUser {
            id: "user-1".to_string(),
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
        }
    }

    fn link(id: i64, alias: &str) -> Link {
        Link {
            id,
            alias: alias.to_string(),
            original_url: "https://example.com/".to_string(),
            creator_id: "user-1".to_string(),
            utm: UtmParams::default(),
            expires_at: None,
            created_at: Utc::now(),
        }
    }

    fn service_with(
        links: MockLinkRepository,
        clicks: MockClickRepository,
    ) -> AnalyticsService {
        AnalyticsService::new(Arc::new(links), Arc::new(clicks))
    }

    fn expect_counts(links: &mut MockLinkRepository, clicks: &mut MockClickRepository) {
        links
            .expect_count_by_creator()
            .returning(|_| Ok(3));
        clicks.expect_count_by_creator().returning(|_| Ok(12));
    }

    #[tokio::test]
    async fn test_dashboard_is_scoped_to_the_caller() {
        let mut links = MockLinkRepository::new();
        let mut clicks = MockClickRepository::new();

        links
            .expect_count_by_creator()
            .withf(|creator_id| creator_id == "user-1")
            .times(1)
            .returning(|_| Ok(3));
        clicks
            .expect_count_by_creator()
            .withf(|creator_id| creator_id == "user-1")
            .times(1)
            .returning(|_| Ok(12));
        clicks
            .expect_clicks_per_day()
            .withf(|creator_id, _| creator_id == "user-1")
            .times(1)
            .returning(|_, _| Ok(vec![]));
        clicks
            .expect_top_referrers()
            .withf(|creator_id, limit| creator_id == "user-1" && *limit == 5)
            .times(1)
            .returning(|_, _| Ok(vec![]));
        links
            .expect_list_by_creator()
            .withf(|creator_id, limit| creator_id == "user-1" && *limit == 5)
            .times(1)
            .returning(|_, _| Ok(vec![link(1, "abc123")]));

        let dashboard = service_with(links, clicks)
            .dashboard(&creator())
            .await
            .unwrap();

        assert_eq!(
            dashboard.summary,
            Summary {
                total_links: 3,
                total_clicks: 12
            }
        );
        assert_eq!(dashboard.recent_links.len(), 1);
    }

    #[tokio::test]
    async fn test_chart_is_zero_filled_to_seven_continuous_days() {
        let mut links = MockLinkRepository::new();
        let mut clicks = MockClickRepository::new();
        expect_counts(&mut links, &mut clicks);

        let today = Utc::now().date_naive();
        clicks.expect_clicks_per_day().returning(move |_, _| {
            Ok(vec![
                DailyClicks {
                    date: today - Duration::days(3),
                    clicks: 4,
                },
                DailyClicks {
                    date: today,
                    clicks: 2,
                },
            ])
        });
        clicks.expect_top_referrers().returning(|_, _| Ok(vec![]));
        links.expect_list_by_creator().returning(|_, _| Ok(vec![]));

        let dashboard = service_with(links, clicks)
            .dashboard(&creator())
            .await
            .unwrap();

        assert_eq!(dashboard.chart_data.len(), 7);
        assert_eq!(dashboard.chart_data[0].date, today - Duration::days(6));
        assert_eq!(dashboard.chart_data[6].date, today);
        assert_eq!(dashboard.chart_data[3].clicks, 4);
        assert_eq!(dashboard.chart_data[6].clicks, 2);
        assert_eq!(
            dashboard
                .chart_data
                .iter()
                .map(|bucket| bucket.clicks)
                .sum::<i64>(),
            6
        );
        // Continuity: each date is the day after the previous one.
        for pair in dashboard.chart_data.windows(2) {
            assert_eq!(pair[0].date + Duration::days(1), pair[1].date);
        }
    }

    #[tokio::test]
    async fn test_missing_referer_buckets_as_direct() {
        let mut links = MockLinkRepository::new();
        let mut clicks = MockClickRepository::new();
        expect_counts(&mut links, &mut clicks);

        clicks.expect_clicks_per_day().returning(|_, _| Ok(vec![]));
        clicks.expect_top_referrers().returning(|_, _| {
            Ok(vec![
                ReferrerCount {
                    referer: Some("https://news.ycombinator.com/".to_string()),
                    clicks: 9,
                },
                ReferrerCount {
                    referer: None,
                    clicks: 3,
                },
            ])
        });
        links.expect_list_by_creator().returning(|_, _| Ok(vec![]));

        let dashboard = service_with(links, clicks)
            .dashboard(&creator())
            .await
            .unwrap();

        assert_eq!(dashboard.top_referrers.len(), 2);
        assert_eq!(dashboard.top_referrers[0].name, "https://news.ycombinator.com/");
        assert_eq!(dashboard.top_referrers[0].value, 9);
        assert_eq!(dashboard.top_referrers[1].name, "Direct");
        assert_eq!(dashboard.top_referrers[1].value, 3);
    }

    #[test]
    fn test_zero_fill_empty_input() {
        let start = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
        let end = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();

        let series = zero_fill(start, end, &[]);

        assert_eq!(series.len(), 7);
        assert!(series.iter().all(|bucket| bucket.clicks == 0));
    }
}
