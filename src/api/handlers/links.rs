//! Handlers for link creation and listing.

use axum::{extract::State, Extension, Json};
use validator::Validate;

use crate::api::dto::{CreateLinkRequest, LinkResponse};
use crate::domain::entities::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Maximum number of links returned by the listing endpoint.
const LIST_LIMIT: i64 = 100;

/// Creates a short link for the authenticated caller.
///
/// # Endpoint
///
/// `POST /api/links` (bearer auth)
///
/// # Responses
///
/// - 200 — created link, including the computed `shortUrl`
/// - 400 — invalid alias format
/// - 409 — alias already taken
/// - 422 — request body failed schema validation
/// - 500 — alias generation exhausted
pub async fn create_link_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<Json<LinkResponse>, AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .create_link(&user, payload.into_input())
        .await?;

    tracing::info!(alias = %link.alias, creator = %user.id, "link created");

    Ok(Json(LinkResponse::from_link(link, &state.base_url)))
}

/// Lists the caller's links, newest first.
///
/// # Endpoint
///
/// `GET /api/links` (bearer auth)
pub async fn list_links_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.list_links(&user, LIST_LIMIT).await?;

    Ok(Json(
        links
            .into_iter()
            .map(|link| LinkResponse::from_link(link, &state.base_url))
            .collect(),
    ))
}
