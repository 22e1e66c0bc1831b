//! API route configuration.
//!
//! All API endpoints require Bearer token authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{analytics_handler, create_link_handler, list_links_handler};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// All API routes, protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `POST /links`     - Create a short link
/// - `GET  /links`     - List the caller's links
/// - `GET  /analytics` - Click analytics dashboard
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/links", post(create_link_handler).get(list_links_handler))
        .route("/analytics", get(analytics_handler))
}
