//! Authentication service resolving bearer tokens to identities.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;

use crate::domain::entities::CurrentUser;
use crate::domain::repositories::TokenRepository;
use crate::error::AppError;
use serde_json::json;

type HmacSha256 = Hmac<Sha256>;

/// Service for authenticating API requests via bearer tokens.
///
/// Tokens are hashed with HMAC-SHA256 (keyed by `signing_secret`) before
/// storage and comparison. An attacker with read-only access to the database
/// cannot verify or forge tokens without the server-side secret.
///
/// Credentials themselves are managed by the operator (see the admin binary);
/// this service only resolves a token to the external identity it carries.
pub struct AuthService {
    repository: Arc<dyn TokenRepository>,
    signing_secret: String,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// `signing_secret` must match the value used when tokens were created.
    pub fn new(repository: Arc<dyn TokenRepository>, signing_secret: String) -> Self {
        Self {
            repository,
            signing_secret,
        }
    }

    /// Hashes a raw token with HMAC-SHA256 using the server signing secret.
    ///
    /// Returns a 64-character lowercase hex-encoded MAC.
    pub fn hash_token(secret: &str, token: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(token.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Authenticates a raw token and returns the identity it carries.
    ///
    /// On success, updates the token's `last_used_at` timestamp best-effort.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is unknown or revoked.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn authenticate(&self, token: &str) -> Result<CurrentUser, AppError> {
        let token_hash = Self::hash_token(&self.signing_secret, token);

        let user = self
            .repository
            .find_identity(&token_hash)
            .await?
            .ok_or_else(|| {
                AppError::unauthorized(
                    "Unauthorized",
                    json!({ "reason": "Invalid or revoked token" }),
                )
            })?;

        let _ = self.repository.touch(&token_hash).await;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockTokenRepository;

    const SECRET: &str = "test-signing-secret";

    fn identity() -> CurrentUser {
        CurrentUser {
            id: "user-1".to_string(),
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_authenticate_returns_identity() {
        let mut repo = MockTokenRepository::new();

        let expected_hash = AuthService::hash_token(SECRET, "valid-token");
        repo.expect_find_identity()
            .withf(move |hash| hash == expected_hash)
            .times(1)
            .returning(|_| Ok(Some(identity())));
        repo.expect_touch().times(1).returning(|_| Ok(()));

        let service = AuthService::new(Arc::new(repo), SECRET.to_string());
        let user = service.authenticate("valid-token").await.unwrap();

        assert_eq!(user, identity());
    }

    #[tokio::test]
    async fn test_authenticate_rejects_unknown_token() {
        let mut repo = MockTokenRepository::new();
        repo.expect_find_identity().times(1).returning(|_| Ok(None));
        repo.expect_touch().times(0);

        let service = AuthService::new(Arc::new(repo), SECRET.to_string());
        let err = service.authenticate("bogus").await.unwrap_err();

        assert!(matches!(err, AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_touch_failure_does_not_fail_authentication() {
        let mut repo = MockTokenRepository::new();
        repo.expect_find_identity()
            .times(1)
            .returning(|_| Ok(Some(identity())));
        repo.expect_touch()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let service = AuthService::new(Arc::new(repo), SECRET.to_string());
        assert!(service.authenticate("valid-token").await.is_ok());
    }

    #[test]
    fn test_hash_token_is_deterministic_and_hex() {
        let hash1 = AuthService::hash_token(SECRET, "token");
        let hash2 = AuthService::hash_token(SECRET, "token");
        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
        assert!(hash1.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_hash_token_depends_on_secret_and_input() {
        assert_ne!(
            AuthService::hash_token(SECRET, "token-a"),
            AuthService::hash_token(SECRET, "token-b")
        );
        assert_ne!(
            AuthService::hash_token("secret-a", "token"),
            AuthService::hash_token("secret-b", "token")
        );
    }
}
