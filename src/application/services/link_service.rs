//! Link creation and listing service.

use std::sync::Arc;

use crate::domain::entities::{CurrentUser, Link, NewLink, UtmParams};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::alias::{generate_short_code, validate_alias_format, DEFAULT_ALIAS_LEN};
use crate::utils::utm::merge_utm_params;
use chrono::{DateTime, Utc};
use serde_json::json;

/// Maximum random-generation attempts before giving up with an exhaustion
/// error. Adequate while the alias space is sparse; there is deliberately no
/// backoff or size escalation.
const MAX_GENERATION_ATTEMPTS: usize = 5;

/// Validated input for creating a link.
#[derive(Debug, Clone)]
pub struct CreateLink {
    pub original_url: String,
    pub alias: Option<String>,
    pub utm: UtmParams,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Service for creating short links and listing a creator's links.
///
/// UTM fields are merged into the destination URL once, at creation time, and
/// also stored as discrete columns for analytics breakdowns.
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<dyn LinkRepository>) -> Self {
        Self { link_repository }
    }

    /// Creates a link owned by `creator`.
    ///
    /// # Alias selection
    ///
    /// - Explicit alias: format-validated, then pre-checked for uniqueness.
    ///   The pre-check gives a friendly early 409; the storage unique
    ///   constraint remains the authority and an insert-time violation is
    ///   also surfaced as a conflict.
    /// - Omitted alias: random 6-character codes, up to 5 attempts against
    ///   the uniqueness check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed URL or alias,
    /// [`AppError::Conflict`] if the alias is taken, and
    /// [`AppError::Exhausted`] if no free random alias was found.
    pub async fn create_link(
        &self,
        creator: &CurrentUser,
        input: CreateLink,
    ) -> Result<Link, AppError> {
        let final_url = merge_utm_params(&input.original_url, &input.utm)?;

        let alias = if let Some(alias) = input.alias {
            validate_alias_format(&alias)?;

            if self.link_repository.find_by_alias(&alias).await?.is_some() {
                return Err(AppError::conflict(
                    "Alias already exists",
                    json!({ "alias": alias }),
                ));
            }

            alias
        } else {
            self.generate_unique_alias().await?
        };

        let new_link = NewLink {
            alias,
            original_url: final_url,
            creator_id: creator.id.clone(),
            utm: input.utm,
            expires_at: input.expires_at,
        };

        self.link_repository.create(new_link).await
    }

    /// Lists the creator's links, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_links(
        &self,
        creator: &CurrentUser,
        limit: i64,
    ) -> Result<Vec<Link>, AppError> {
        self.link_repository.list_by_creator(&creator.id, limit).await
    }

    /// Generates a random alias that is not yet taken.
    async fn generate_unique_alias(&self) -> Result<String, AppError> {
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let code = generate_short_code(DEFAULT_ALIAS_LEN);

            if self.link_repository.find_by_alias(&code).await?.is_none() {
                return Ok(code);
            }
        }

        Err(AppError::exhausted(
            "Failed to generate unique alias",
            json!({ "attempts": MAX_GENERATION_ATTEMPTS }),
        ))
    }
}
