//! Alias generation and format validation.
//!
//! Generation produces random URL-safe codes; it does not guarantee
//! uniqueness on its own. Uniqueness is enforced by the caller's retry loop
//! plus the storage-level unique constraint.

use crate::error::AppError;
use rand::Rng;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Default length of generated aliases.
pub const DEFAULT_ALIAS_LEN: usize = 6;

/// 64-character URL-safe alphabet, same charset custom aliases may use.
const ALIAS_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Aliases reserved for application routes; rejected case-insensitively.
const RESERVED_ALIASES: &[&str] = &[
    "api", "auth", "health", "dashboard", "login", "logout", "register", "signin", "signout",
    "settings", "admin", "static", "public", "404", "500",
];

static ALIAS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Generates a random alias of `size` characters from the URL-safe alphabet.
///
/// The alphabet has 64 symbols, so each character carries 6 bits of entropy
/// and the default 6-character code covers ~6.9e10 combinations.
pub fn generate_short_code(size: usize) -> String {
    let mut rng = rand::rng();
    (0..size)
        .map(|_| ALIAS_ALPHABET[rng.random_range(0..ALIAS_ALPHABET.len())] as char)
        .collect()
}

/// Validates a user-chosen alias.
///
/// Rules are applied in order and the first failure determines the error
/// message: non-empty, length >= 3, length <= 50, charset `[A-Za-z0-9_-]`,
/// not a reserved word (case-insensitive).
///
/// # Errors
///
/// Returns [`AppError::Validation`] with the first violated rule's message.
pub fn validate_alias_format(alias: &str) -> Result<(), AppError> {
    if alias.is_empty() {
        return Err(AppError::bad_request(
            "Alias cannot be empty",
            json!({ "field": "alias" }),
        ));
    }

    // Lengths are counted in characters, not bytes, so multibyte input is
    // measured the same way users see it.
    let length = alias.chars().count();

    if length < 3 {
        return Err(AppError::bad_request(
            "Alias must be at least 3 characters",
            json!({ "field": "alias", "length": length }),
        ));
    }

    if length > 50 {
        return Err(AppError::bad_request(
            "Alias is too long",
            json!({ "field": "alias", "length": length }),
        ));
    }

    if !ALIAS_REGEX.is_match(alias) {
        return Err(AppError::bad_request(
            "Alias can only contain letters, numbers, hyphens, and underscores",
            json!({ "field": "alias" }),
        ));
    }

    if RESERVED_ALIASES.contains(&alias.to_ascii_lowercase().as_str()) {
        return Err(AppError::bad_request(
            "This alias is reserved by the system",
            json!({ "field": "alias", "alias": alias }),
        ));
    }

    Ok(())
}
