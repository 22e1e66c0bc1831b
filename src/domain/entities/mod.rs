//! Core business entities.

pub mod click;
pub mod link;
pub mod user;

pub use click::{Click, NewClick, UNKNOWN_LOCATION};
pub use link::{Link, NewLink, UtmParams};
pub use user::CurrentUser;
