//! In-memory session cell shared across the application.

use tokio::sync::RwLock;

use crate::auth::model::{Session, UserProfile};

/// The single process-wide piece of mutable auth state.
///
/// `SessionHolder` is an explicit, injectable replacement for ambient global
/// session access: components that need the session receive a shared handle
/// and read through it, while only the auth use case writes. Token and
/// profile are held as one `Session` value, so readers can never observe one
/// without the other.
#[derive(Debug, Default)]
pub struct SessionHolder {
    inner: RwLock<Option<Session>>,
}

impl SessionHolder {
    /// Creates an empty (unauthenticated) holder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes a new session, replacing any previous one.
    pub async fn set(&self, session: Session) {
        *self.inner.write().await = Some(session);
    }

    /// Drops the current session. Idempotent.
    pub async fn clear(&self) {
        *self.inner.write().await = None;
    }

    /// Returns a clone of the current session, if any.
    pub async fn current(&self) -> Option<Session> {
        self.inner.read().await.clone()
    }

    /// Returns the cached profile, if a session is present.
    pub async fn profile(&self) -> Option<UserProfile> {
        self.inner.read().await.as_ref().map(|s| s.profile.clone())
    }

    /// Returns the opaque session token, if a session is present.
    pub async fn token(&self) -> Option<String> {
        self.inner.read().await.as_ref().map(|s| s.token.clone())
    }

    /// True when a session (token and profile) is present.
    pub async fn is_authenticated(&self) -> bool {
        self.inner.read().await.is_some()
    }
}
