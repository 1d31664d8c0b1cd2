//! Auth use case implementation.
//!
//! Coordinates the identity provider client, the persistent session store,
//! and the in-memory session holder. All writes to session state go through
//! here, serialized by the single in-flight call that owns them.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use wayfind_core::auth::{
    Credentials, IdentityService, RegistrationForm, Session, SessionHolder, UnauthorizedHandler,
    UserProfile,
};
use wayfind_core::error::{Result, WayfindError};
use wayfind_infrastructure::SessionStore;

/// Use case for the session/auth flow.
///
/// # Responsibilities
///
/// - Validating credentials locally before any network call
/// - Establishing sessions and round-tripping them through the store
/// - Best-effort remote invalidation on logout, with unconditional local
///   clearing
/// - Restoring a persisted session at startup without provider revalidation
pub struct AuthUseCase {
    identity: Arc<dyn IdentityService>,
    store: Arc<SessionStore>,
    holder: Arc<SessionHolder>,
}

impl AuthUseCase {
    pub fn new(
        identity: Arc<dyn IdentityService>,
        store: Arc<SessionStore>,
        holder: Arc<SessionHolder>,
    ) -> Self {
        Self {
            identity,
            store,
            holder,
        }
    }

    /// Startup path: loads any persisted session into the holder.
    ///
    /// A present token+profile pair is treated as an active session; the
    /// provider is not consulted.
    pub async fn restore(&self) -> Result<Option<UserProfile>> {
        match self.store.load()? {
            Some(session) => {
                let profile = session.profile.clone();
                self.holder.set(session).await;
                Ok(Some(profile))
            }
            None => Ok(None),
        }
    }

    /// Logs in with email and password.
    ///
    /// Validation failures surface before any network call. A failed login
    /// leaves the prior session, if any, untouched.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session> {
        Credentials::new(email, password).validate()?;

        // Best-effort pre-clear of any provider-side session; some providers
        // refuse a second concurrent session. Failure here is ignored.
        if let Some(existing) = self.holder.token().await {
            if let Err(err) = self.identity.delete_current_session(&existing).await {
                debug!("Pre-login session clear failed (ignored): {err}");
            }
        }

        let token = self.identity.create_session(email, password).await?;
        let profile = self.identity.fetch_account(&token).await?;
        let session = Session::new(token, profile);

        self.store.save(&session)?;
        self.holder.set(session.clone()).await;

        Ok(session)
    }

    /// Creates a new account.
    ///
    /// Does not log the account in; the caller routes to login afterwards.
    pub async fn register(&self, form: &RegistrationForm) -> Result<UserProfile> {
        form.validate()?;
        self.identity
            .create_account(&form.email, &form.password, &form.name)
            .await
    }

    /// Logs out.
    ///
    /// Remote invalidation is best effort; local state is always cleared,
    /// since the user-visible contract is "I am logged out locally."
    pub async fn logout(&self) -> Result<()> {
        if let Some(token) = self.holder.token().await {
            if let Err(err) = self.identity.delete_current_session(&token).await {
                warn!("Remote session invalidation failed, clearing local state anyway: {err}");
            }
        }

        self.holder.clear().await;
        self.store.clear()
    }

    /// Returns the cached profile, if a session is present.
    ///
    /// Never errors: callers use this for greeting text, not access control.
    pub async fn current_user(&self) -> Option<UserProfile> {
        self.holder.profile().await
    }

    /// Re-fetches the profile over the authorized session.
    ///
    /// An unauthorized response clears local session state (the declared
    /// hook) and propagates; retrying is the caller's decision.
    pub async fn refresh_profile(&self) -> Result<UserProfile> {
        let token = self
            .holder
            .token()
            .await
            .ok_or_else(|| WayfindError::validation("not logged in"))?;

        match self.identity.fetch_account(&token).await {
            Ok(profile) => {
                let session = Session::new(token, profile.clone());
                self.store.save(&session)?;
                self.holder.set(session).await;
                Ok(profile)
            }
            Err(err) if err.is_unauthorized() => {
                self.on_unauthorized().await;
                Err(err)
            }
            Err(err) => Err(err),
        }
    }
}

#[async_trait]
impl UnauthorizedHandler for AuthUseCase {
    async fn on_unauthorized(&self) {
        self.holder.clear().await;
        if let Err(err) = self.store.clear() {
            warn!("Failed to clear persisted session after unauthorized response: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;
    use wayfind_core::error::RejectionKind;

    fn profile(email: &str) -> UserProfile {
        UserProfile {
            id: "u-1".to_string(),
            email: email.to_string(),
            name: "Test User".to_string(),
            phone: None,
        }
    }

    /// Identity fake recording calls and scripting failures.
    #[derive(Default)]
    struct FakeIdentity {
        calls: Mutex<Vec<String>>,
        fail_create_session: Option<WayfindError>,
        fail_delete_session: bool,
        fail_fetch_account: Option<WayfindError>,
    }

    impl FakeIdentity {
        fn recorded(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: &str) {
            self.calls.lock().unwrap().push(call.to_string());
        }
    }

    #[async_trait]
    impl IdentityService for FakeIdentity {
        async fn create_session(&self, email: &str, _password: &str) -> Result<String> {
            self.record("create_session");
            if let Some(err) = &self.fail_create_session {
                return Err(err.clone());
            }
            Ok(format!("tok-for-{email}"))
        }

        async fn create_account(
            &self,
            email: &str,
            _password: &str,
            name: &str,
        ) -> Result<UserProfile> {
            self.record("create_account");
            Ok(UserProfile {
                id: "u-new".to_string(),
                email: email.to_string(),
                name: name.to_string(),
                phone: None,
            })
        }

        async fn delete_current_session(&self, _token: &str) -> Result<()> {
            self.record("delete_current_session");
            if self.fail_delete_session {
                return Err(WayfindError::unavailable("provider is down"));
            }
            Ok(())
        }

        async fn fetch_account(&self, token: &str) -> Result<UserProfile> {
            self.record("fetch_account");
            if let Some(err) = &self.fail_fetch_account {
                return Err(err.clone());
            }
            let email = token.trim_start_matches("tok-for-").to_string();
            Ok(profile(&email))
        }
    }

    fn usecase_with(identity: FakeIdentity) -> (AuthUseCase, Arc<FakeIdentity>, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = Arc::new(SessionStore::new(temp_dir.path().join("session.json")));
        let holder = Arc::new(SessionHolder::new());
        let identity = Arc::new(identity);
        let usecase = AuthUseCase::new(identity.clone(), store, holder);
        (usecase, identity, temp_dir)
    }

    #[tokio::test]
    async fn test_login_then_current_user_matches_email() {
        let (usecase, _, _dir) = usecase_with(FakeIdentity::default());

        usecase.login("test@example.com", "abcd").await.unwrap();
        let user = usecase.current_user().await.unwrap();
        assert_eq!(user.email, "test@example.com");
    }

    #[tokio::test]
    async fn test_malformed_email_never_reaches_network() {
        let (usecase, identity, _dir) = usecase_with(FakeIdentity::default());

        let err = usecase.login("testexample.com", "abcd").await.unwrap_err();
        assert!(err.is_validation());
        assert!(identity.recorded().is_empty());
    }

    #[tokio::test]
    async fn test_empty_password_never_reaches_network() {
        let (usecase, identity, _dir) = usecase_with(FakeIdentity::default());

        assert!(usecase.login("test@example.com", "").await.is_err());
        assert!(identity.recorded().is_empty());
    }

    #[tokio::test]
    async fn test_login_persists_session() {
        let (usecase, _, dir) = usecase_with(FakeIdentity::default());

        usecase.login("test@example.com", "abcd").await.unwrap();

        // A fresh store over the same file sees the session.
        let store = SessionStore::new(dir.path().join("session.json"));
        let persisted = store.load().unwrap().unwrap();
        assert_eq!(persisted.profile.email, "test@example.com");
    }

    #[tokio::test]
    async fn test_failed_login_leaves_prior_session_untouched() {
        let identity = FakeIdentity {
            fail_create_session: Some(WayfindError::rejected(
                RejectionKind::Unauthorized,
                "Invalid credentials",
            )),
            ..Default::default()
        };
        let temp_dir = TempDir::new().unwrap();
        let store = Arc::new(SessionStore::new(temp_dir.path().join("session.json")));
        let holder = Arc::new(SessionHolder::new());
        let prior = Session::new("tok-old", profile("old@example.com"));
        store.save(&prior).unwrap();
        holder.set(prior.clone()).await;

        let usecase = AuthUseCase::new(Arc::new(identity), store.clone(), holder);
        let err = usecase.login("new@example.com", "abcd").await.unwrap_err();
        assert!(err.is_unauthorized());

        assert_eq!(usecase.current_user().await.unwrap().email, "old@example.com");
        assert_eq!(store.load().unwrap().unwrap().token, "tok-old");
    }

    #[tokio::test]
    async fn test_login_preclears_existing_session_best_effort() {
        let identity = FakeIdentity {
            fail_delete_session: true,
            ..Default::default()
        };
        let temp_dir = TempDir::new().unwrap();
        let store = Arc::new(SessionStore::new(temp_dir.path().join("session.json")));
        let holder = Arc::new(SessionHolder::new());
        holder.set(Session::new("tok-old", profile("old@example.com"))).await;

        let identity = Arc::new(identity);
        let usecase = AuthUseCase::new(identity.clone(), store, holder);

        // Pre-clear failure is tolerated; login still succeeds.
        usecase.login("new@example.com", "abcd").await.unwrap();
        assert_eq!(
            identity.recorded(),
            vec!["delete_current_session", "create_session", "fetch_account"]
        );
    }

    #[tokio::test]
    async fn test_logout_clears_locally_even_when_remote_fails() {
        let identity = FakeIdentity {
            fail_delete_session: true,
            ..Default::default()
        };
        let (usecase, _, dir) = usecase_with(identity);

        usecase.login("test@example.com", "abcd").await.unwrap();
        usecase.logout().await.unwrap();

        assert!(usecase.current_user().await.is_none());
        let store = SessionStore::new(dir.path().join("session.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_logout_is_idempotent() {
        let (usecase, _, _dir) = usecase_with(FakeIdentity::default());
        usecase.logout().await.unwrap();
        usecase.logout().await.unwrap();
        assert!(usecase.current_user().await.is_none());
    }

    #[tokio::test]
    async fn test_register_validates_before_network() {
        let (usecase, identity, _dir) = usecase_with(FakeIdentity::default());

        let form = RegistrationForm {
            email: "test@example.com".to_string(),
            password: "abcd".to_string(),
            confirm_password: "abcd".to_string(),
            name: "Test User".to_string(),
            phone: None,
        };
        assert!(usecase.register(&form).await.is_err());
        assert!(identity.recorded().is_empty());
    }

    #[tokio::test]
    async fn test_register_does_not_log_in() {
        let (usecase, _, _dir) = usecase_with(FakeIdentity::default());

        let form = RegistrationForm {
            email: "test@example.com".to_string(),
            password: "abcdefgh".to_string(),
            confirm_password: "abcdefgh".to_string(),
            name: "Test User".to_string(),
            phone: None,
        };
        let created = usecase.register(&form).await.unwrap();
        assert_eq!(created.email, "test@example.com");
        assert!(usecase.current_user().await.is_none());
    }

    #[tokio::test]
    async fn test_restore_reads_persisted_pair() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.json");
        SessionStore::new(path.clone())
            .save(&Session::new("tok-1", profile("test@example.com")))
            .unwrap();

        let store = Arc::new(SessionStore::new(path));
        let holder = Arc::new(SessionHolder::new());
        let usecase = AuthUseCase::new(Arc::new(FakeIdentity::default()), store, holder);

        let restored = usecase.restore().await.unwrap().unwrap();
        assert_eq!(restored.email, "test@example.com");
        assert!(usecase.current_user().await.is_some());
    }

    #[tokio::test]
    async fn test_unauthorized_refresh_clears_session() {
        let identity = FakeIdentity {
            fail_fetch_account: Some(WayfindError::rejected(
                RejectionKind::Unauthorized,
                "session expired",
            )),
            ..Default::default()
        };
        let temp_dir = TempDir::new().unwrap();
        let store = Arc::new(SessionStore::new(temp_dir.path().join("session.json")));
        let holder = Arc::new(SessionHolder::new());
        let session = Session::new("tok-1", profile("test@example.com"));
        store.save(&session).unwrap();
        holder.set(session).await;

        let usecase = AuthUseCase::new(Arc::new(identity), store.clone(), holder);
        let err = usecase.refresh_profile().await.unwrap_err();
        assert!(err.is_unauthorized());

        // The hook cleared both the holder and the store; no retry happened.
        assert!(usecase.current_user().await.is_none());
        assert!(store.load().unwrap().is_none());
    }
}
