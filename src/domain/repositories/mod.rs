//! Repository traits decoupling business logic from storage.

pub mod click_repository;
pub mod link_repository;
pub mod token_repository;

pub use click_repository::{ClickRepository, DailyClicks, ReferrerCount};
pub use link_repository::LinkRepository;
pub use token_repository::{ApiToken, TokenRepository};

#[cfg(test)]
pub use click_repository::MockClickRepository;
#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use token_repository::MockTokenRepository;
