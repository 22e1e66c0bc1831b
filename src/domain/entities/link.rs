//! Link entity representing a tracked short alias.

use chrono::{DateTime, Utc};

/// UTM campaign attribution parameters attached to a link.
///
/// Stored as discrete fields alongside the merged destination URL so analytics
/// can break clicks down per campaign later without re-parsing query strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UtmParams {
    pub source: Option<String>,
    pub medium: Option<String>,
    pub campaign: Option<String>,
    pub term: Option<String>,
    pub content: Option<String>,
}

impl UtmParams {
    /// Returns the present parameters as `(query key, value)` pairs, in the
    /// canonical `utm_source..utm_content` order.
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("utm_source", &self.source),
            ("utm_medium", &self.medium),
            ("utm_campaign", &self.campaign),
            ("utm_term", &self.term),
            ("utm_content", &self.content),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs().is_empty()
    }
}

/// A short alias mapped to a destination URL, owned by a single creator.
///
/// The alias is globally unique and immutable after creation. `original_url`
/// already carries any UTM parameters merged in at creation time.
#[derive(Debug, Clone)]
pub struct Link {
    pub id: i64,
    pub alias: String,
    pub original_url: String,
    pub creator_id: String,
    pub utm: UtmParams,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Returns true if the link has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|e| Utc::now() >= e)
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub alias: String,
    pub original_url: String,
    pub creator_id: String,
    pub utm: UtmParams,
    pub expires_at: Option<DateTime<Utc>>,
}
