//! Trait abstraction for the auth client to enable mocking in tests

use super::types::{AuthError, Credentials, User};
use async_trait::async_trait;

/// Authentication collaborator.
///
/// Methods take `&self` so a single client can be shared with the task
/// that performs an in-flight login.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthClientTrait: Send + Sync {
    /// Exchange credentials for the authenticated user
    async fn login(&self, credentials: &Credentials) -> Result<User, AuthError>;

    /// The user of an already established session, if any
    async fn current_user(&self) -> Result<Option<User>, AuthError>;
}
