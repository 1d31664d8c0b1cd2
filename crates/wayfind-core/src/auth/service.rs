//! Identity service contract.
//!
//! Defines the interface a concrete identity-provider client must implement.
//! The use-case layer depends only on these traits, which keeps provider
//! choice and wire details out of the auth flow.

use async_trait::async_trait;

use crate::auth::model::UserProfile;
use crate::error::Result;

/// Client-side view of the hosted identity provider.
///
/// Calls are single request/response round trips: no retry, no timeout, no
/// cancellation. Failures are classified into the shared error taxonomy by
/// the implementation.
#[async_trait]
pub trait IdentityService: Send + Sync {
    /// Creates an email/password session and returns the opaque token.
    async fn create_session(&self, email: &str, password: &str) -> Result<String>;

    /// Creates a new account and returns its profile.
    ///
    /// Does not log the account in; callers run a separate login afterwards.
    async fn create_account(&self, email: &str, password: &str, name: &str)
    -> Result<UserProfile>;

    /// Invalidates the current session with the provider.
    async fn delete_current_session(&self, token: &str) -> Result<()>;

    /// Fetches the profile for the authorized session.
    async fn fetch_account(&self, token: &str) -> Result<UserProfile>;
}

/// Hook invoked when an authorized call reports an unauthorized response.
///
/// The handler's sole responsibility is clearing local session state; the
/// caller owns any retry decision. This is the explicit replacement for an
/// interceptor that silently retried behind the caller's back.
#[async_trait]
pub trait UnauthorizedHandler: Send + Sync {
    async fn on_unauthorized(&self);
}
