//! Handler for short alias redirects.

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap},
    response::Redirect,
};

use crate::application::services::ClickContext;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its destination URL, recording the click first.
///
/// # Endpoint
///
/// `GET /{alias}` (public)
///
/// # Request Flow
///
/// 1. Look up the alias; unknown or expired aliases return 404
/// 2. Record one click (user agent and referer verbatim from headers),
///    awaited before responding so the event is never lost to a torn-down
///    request context
/// 3. Respond with `307 Temporary Redirect`
///
/// The redirect is deliberately temporary: a 301 would let browsers and CDNs
/// cache the mapping and bypass the server on later visits, silently breaking
/// click counting.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Redirect, AppError> {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let referer = headers
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let link = state
        .redirect_service
        .resolve_and_record(&alias, ClickContext { user_agent, referer })
        .await?;

    Ok(Redirect::temporary(&link.original_url))
}
