//! DTOs for link creation and listing.
//!
//! The public JSON surface is camelCase (`originalUrl`, `utmSource`, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::CreateLink;
use crate::domain::entities::{Link, UtmParams};

/// Request body for `POST /api/links`.
///
/// Schema violations (e.g. a relative `originalUrl`) are rejected with 422;
/// alias format problems are a semantic 400 handled by the service layer.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkRequest {
    /// Destination URL; must be absolute.
    #[validate(url(message = "Invalid URL format"))]
    pub original_url: String,

    /// Optional custom alias (3-50 chars, `[A-Za-z0-9_-]`, not reserved).
    pub alias: Option<String>,

    pub utm_source: Option<String>,
    pub utm_medium: Option<String>,
    pub utm_campaign: Option<String>,
    pub utm_term: Option<String>,
    pub utm_content: Option<String>,

    /// Optional expiry; expired links resolve as 404.
    pub expires_at: Option<DateTime<Utc>>,
}

impl CreateLinkRequest {
    /// Converts the validated request into service-layer input.
    pub fn into_input(self) -> CreateLink {
        CreateLink {
            original_url: self.original_url,
            alias: self.alias,
            utm: UtmParams {
                source: self.utm_source,
                medium: self.utm_medium,
                campaign: self.utm_campaign,
                term: self.utm_term,
                content: self.utm_content,
            },
            expires_at: self.expires_at,
        }
    }
}

/// A link as returned by the API.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub id: i64,
    pub alias: String,
    pub original_url: String,
    /// Fully qualified short URL under the service's base URL.
    pub short_url: String,
    pub utm_source: Option<String>,
    pub utm_medium: Option<String>,
    pub utm_campaign: Option<String>,
    pub utm_term: Option<String>,
    pub utm_content: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl LinkResponse {
    pub fn from_link(link: Link, base_url: &str) -> Self {
        let short_url = format!("{}/{}", base_url.trim_end_matches('/'), link.alias);
        Self {
            id: link.id,
            alias: link.alias,
            original_url: link.original_url,
            short_url,
            utm_source: link.utm.source,
            utm_medium: link.utm.medium,
            utm_campaign: link.utm.campaign,
            utm_term: link.utm.term,
            utm_content: link.utm.content,
            expires_at: link.expires_at,
            created_at: link.created_at,
        }
    }
}
