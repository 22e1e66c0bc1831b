//! API request/response DTOs.

pub mod analytics;
pub mod health;
pub mod links;

pub use analytics::AnalyticsResponse;
pub use health::HealthResponse;
pub use links::{CreateLinkRequest, LinkResponse};
