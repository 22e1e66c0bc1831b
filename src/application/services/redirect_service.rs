//! Alias resolution and click recording.

use std::sync::Arc;

use crate::domain::entities::{Link, NewClick};
use crate::domain::repositories::{ClickRepository, LinkRepository};
use crate::error::AppError;
use serde_json::json;

/// Request metadata captured alongside a redirect.
#[derive(Debug, Clone, Default)]
pub struct ClickContext {
    pub user_agent: Option<String>,
    pub referer: Option<String>,
}

/// Service resolving an alias to its destination URL while recording the
/// visit.
///
/// Per-request flow: look up the alias, treat unknown and expired aliases as
/// not found, record the click, then hand the destination URL back for the
/// HTTP redirect. The click write is awaited before responding: the request
/// context must not be torn down before the event is durable, so guaranteed
/// capture wins over latency here.
pub struct RedirectService {
    link_repository: Arc<dyn LinkRepository>,
    click_repository: Arc<dyn ClickRepository>,
}

impl RedirectService {
    /// Creates a new redirect service.
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        click_repository: Arc<dyn ClickRepository>,
    ) -> Self {
        Self {
            link_repository,
            click_repository,
        }
    }

    /// Resolves `alias`, records one click, and returns the link.
    ///
    /// Expired links resolve as not found, and no click is recorded for them.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown or expired aliases.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve_and_record(
        &self,
        alias: &str,
        context: ClickContext,
    ) -> Result<Link, AppError> {
        let link = self
            .link_repository
            .find_by_alias(alias)
            .await?
            .ok_or_else(|| AppError::not_found("Unknown alias", json!({ "alias": alias })))?;

        if link.is_expired() {
            tracing::debug!(alias, "redirect refused for expired link");
            return Err(AppError::not_found(
                "Unknown alias",
                json!({ "alias": alias }),
            ));
        }

        self.click_repository
            .record(NewClick::from_request(
                link.id,
                context.user_agent,
                context.referer,
            ))
            .await?;

        Ok(link)
    }
}
