//! Click entity representing a single recorded visit to a short alias.

use chrono::{DateTime, Utc};

/// Placeholder used for geo fields until real geolocation exists.
pub const UNKNOWN_LOCATION: &str = "Unknown";

/// One recorded visit to a short alias.
///
/// Clicks are append-only: never updated or deleted. The client IP is read
/// transiently for request handling but never persisted.
#[derive(Debug, Clone)]
pub struct Click {
    pub id: i64,
    pub link_id: i64,
    pub clicked_at: DateTime<Utc>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
    pub country: String,
    pub city: String,
}

/// Input data for recording a new click.
///
/// `link_id` must reference an existing link; the timestamp is assigned by the
/// database at insert time.
#[derive(Debug, Clone)]
pub struct NewClick {
    pub link_id: i64,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
    pub country: String,
    pub city: String,
}

impl NewClick {
    /// Builds a click from request metadata, with geo fields fixed to the
    /// `"Unknown"` placeholder.
    pub fn from_request(
        link_id: i64,
        user_agent: Option<String>,
        referer: Option<String>,
    ) -> Self {
        Self {
            link_id,
            user_agent,
            referer,
            country: UNKNOWN_LOCATION.to_string(),
            city: UNKNOWN_LOCATION.to_string(),
        }
    }
}
