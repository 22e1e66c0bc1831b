//! Handler for the analytics dashboard.

use axum::{extract::State, Extension, Json};

use crate::api::dto::AnalyticsResponse;
use crate::domain::entities::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Returns click analytics for the authenticated caller's links.
///
/// # Endpoint
///
/// `GET /api/analytics` (bearer auth)
///
/// The response contains totals, a zero-filled 7-day click series, the top 5
/// referrers (missing referer bucketed as `"Direct"`), and the 5 most recent
/// links. All numbers are scoped to links owned by the caller.
pub async fn analytics_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<AnalyticsResponse>, AppError> {
    let dashboard = state.analytics_service.dashboard(&user).await?;

    Ok(Json(AnalyticsResponse::from_dashboard(
        dashboard,
        &state.base_url,
    )))
}
