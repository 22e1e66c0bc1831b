//! DTOs for the analytics dashboard endpoint.

use chrono::NaiveDate;
use serde::Serialize;

use super::links::LinkResponse;
use crate::application::services::Dashboard;

/// Response body for `GET /api/analytics`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub summary: SummaryDto,
    pub chart_data: Vec<ChartPoint>,
    pub top_referrers: Vec<ReferrerDto>,
    pub recent_links: Vec<LinkResponse>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryDto {
    pub total_links: i64,
    pub total_clicks: i64,
}

/// One day of the 7-day click series; `date` serializes as `YYYY-MM-DD`.
#[derive(Debug, Serialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub clicks: i64,
}

#[derive(Debug, Serialize)]
pub struct ReferrerDto {
    pub name: String,
    pub value: i64,
}

impl AnalyticsResponse {
    pub fn from_dashboard(dashboard: Dashboard, base_url: &str) -> Self {
        Self {
            summary: SummaryDto {
                total_links: dashboard.summary.total_links,
                total_clicks: dashboard.summary.total_clicks,
            },
            chart_data: dashboard
                .chart_data
                .into_iter()
                .map(|bucket| ChartPoint {
                    date: bucket.date,
                    clicks: bucket.clicks,
                })
                .collect(),
            top_referrers: dashboard
                .top_referrers
                .into_iter()
                .map(|bucket| ReferrerDto {
                    name: bucket.name,
                    value: bucket.value,
                })
                .collect(),
            recent_links: dashboard
                .recent_links
                .into_iter()
                .map(|link| LinkResponse::from_link(link, base_url))
                .collect(),
        }
    }
}
