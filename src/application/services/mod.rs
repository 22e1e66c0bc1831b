//! Application services orchestrating domain logic.

pub mod analytics_service;
pub mod auth_service;
pub mod link_service;
pub mod redirect_service;

pub use analytics_service::{AnalyticsService, Dashboard, ReferrerBucket, Summary};
pub use auth_service::AuthService;
pub use link_service::{CreateLink, LinkService};
pub use redirect_service::{ClickContext, RedirectService};
