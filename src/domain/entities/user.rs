//! Identity value supplied by the external auth provider.

/// The authenticated caller.
///
/// Identity is managed externally; this service only ever reads it. The value
/// is resolved once by the auth middleware and passed explicitly into every
/// core operation, so the services stay testable without a request framework.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: String,
    pub name: String,
    pub email: String,
}
