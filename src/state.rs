//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{AnalyticsService, AuthService, LinkService, RedirectService};

/// Application state: the service layer plus the public base URL used to
/// build `shortUrl` values in responses.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub redirect_service: Arc<RedirectService>,
    pub analytics_service: Arc<AnalyticsService>,
    pub auth_service: Arc<AuthService>,
    pub base_url: String,
}
