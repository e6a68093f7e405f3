use std::fmt;

use blog_api::error::BlogApiError;
use blog_api::types::{Role, User};
use session_store::{SessionStore, SessionStoreError};
use tracing::{info, warn};

use crate::gateway::Gateway;

/// The client-held pair of authenticated user record and bearer token.
///
/// Constructed only through [`Session::signed_in`] / [`Session::signed_out`],
/// so both halves are always set together or both absent; no consumer ever
/// observes a partial session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    user: Option<User>,
    token: Option<String>,
}

impl Session {
    #[must_use]
    pub fn signed_out() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn signed_in(user: User, token: impl Into<String>) -> Self {
        Self {
            user: Some(user),
            token: Some(token.into()),
        }
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.token.is_some()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user
            .as_ref()
            .is_some_and(|user| user.role == Role::Admin)
    }

    fn replace_user(&mut self, user: User) {
        if self.token.is_some() {
            self.user = Some(user);
        }
    }
}

/// Single-writer owner of the session: hydrates it once from the store,
/// mutates it through login/register/logout/refresh, and hands out read-only
/// views to everything else.
pub struct SessionContext {
    store: SessionStore,
    session: Session,
}

impl SessionContext {
    /// Reads persisted state once, synchronously, with no network call. The
    /// stored user is trusted as-is until an explicit refresh. Partial or
    /// unreadable state is cleared and degrades to signed-out.
    pub fn hydrate(store: SessionStore) -> Self {
        let session = match store.load() {
            Ok(Some(persisted)) => {
                info!(target: "blog_console", "session hydrated for {}", persisted.user.email);
                Session::signed_in(persisted.user, persisted.token)
            }
            Ok(None) => Session::signed_out(),
            Err(error) => {
                warn!(target: "blog_console", "discarding unusable session state: {error}");
                if let Err(error) = store.clear() {
                    warn!(target: "blog_console", "failed to clear session state: {error}");
                }
                Session::signed_out()
            }
        };

        Self { store, session }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.session.user()
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.session.token()
    }

    /// Exchanges credentials for a session. On success the pair is persisted
    /// and then installed in memory; on failure the backend error is
    /// surfaced unchanged and the session is untouched.
    pub fn login(
        &mut self,
        gateway: &mut dyn Gateway,
        email: &str,
        password: &str,
    ) -> Result<(), SessionOpError> {
        let auth = gateway.login(self.session.token(), email, password)?;
        self.install(auth.user, auth.token)
    }

    /// Same contract as [`SessionContext::login`], different endpoint.
    pub fn register(
        &mut self,
        gateway: &mut dyn Gateway,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), SessionOpError> {
        let auth = gateway.register(self.session.token(), name, email, password)?;
        self.install(auth.user, auth.token)
    }

    fn install(&mut self, user: User, token: String) -> Result<(), SessionOpError> {
        self.store.save(&user, &token)?;
        self.session = Session::signed_in(user, token);
        Ok(())
    }

    /// Clears persisted and in-memory state. Idempotent: a signed-out
    /// session stays signed out.
    pub fn logout(&mut self) -> Result<(), SessionStoreError> {
        self.store.clear()?;
        self.session = Session::signed_out();
        Ok(())
    }

    /// Re-fetches the current user and replaces only the `user` half,
    /// re-persisting it. Without a token this is a no-op that issues no
    /// network call. The token is never rotated.
    pub fn refresh_me(&mut self, gateway: &mut dyn Gateway) -> Result<(), SessionOpError> {
        let Some(token) = self.session.token().map(str::to_string) else {
            return Ok(());
        };

        let user = gateway.me(&token)?;
        self.store.save_user(&user)?;
        self.session.replace_user(user);
        Ok(())
    }
}

/// Failure of a session operation: either the backend rejected the call or
/// the local store could not be updated.
#[derive(Debug)]
pub enum SessionOpError {
    Api(BlogApiError),
    Store(SessionStoreError),
}

impl fmt::Display for SessionOpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(error) => write!(f, "{error}"),
            Self::Store(error) => write!(f, "session store: {error}"),
        }
    }
}

impl std::error::Error for SessionOpError {}

impl From<BlogApiError> for SessionOpError {
    fn from(error: BlogApiError) -> Self {
        Self::Api(error)
    }
}

impl From<SessionStoreError> for SessionOpError {
    fn from(error: SessionStoreError) -> Self {
        Self::Store(error)
    }
}

#[cfg(test)]
mod tests {
    use blog_api::types::{Role, User};

    use super::Session;

    fn sample_user(role: Role) -> User {
        User {
            id: "u1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            role,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn signed_out_session_has_neither_half() {
        let session = Session::signed_out();
        assert_eq!(session.user(), None);
        assert_eq!(session.token(), None);
        assert!(!session.is_signed_in());
        assert!(!session.is_admin());
    }

    #[test]
    fn signed_in_session_has_both_halves() {
        let session = Session::signed_in(sample_user(Role::Admin), "tok-1");
        assert!(session.is_signed_in());
        assert!(session.is_admin());
        assert_eq!(session.token(), Some("tok-1"));
        assert_eq!(session.user().map(|user| user.id.as_str()), Some("u1"));
    }

    #[test]
    fn replace_user_is_ignored_without_a_token() {
        let mut session = Session::signed_out();
        session.replace_user(sample_user(Role::User));
        assert_eq!(session.user(), None);
    }
}
