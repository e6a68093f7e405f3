use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use blog_api::types::User;

use crate::error::SessionStoreError;
use crate::paths::{TOKEN_ENTRY, USER_ENTRY};
use crate::schema::PersistedSession;

/// On-disk session persistence: two entries under a root directory, the raw
/// bearer token and the serialized user. Both exist or neither does.
#[derive(Debug, Clone)]
pub struct SessionStore {
    root: PathBuf,
}

impl SessionStore {
    #[must_use]
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn token_path(&self) -> PathBuf {
        self.root.join(TOKEN_ENTRY)
    }

    fn user_path(&self) -> PathBuf {
        self.root.join(USER_ENTRY)
    }

    /// Reads the persisted session, if any. A missing store or both entries
    /// absent is a clean `None`; exactly one entry present is an error so the
    /// caller can decide how to recover.
    pub fn load(&self) -> Result<Option<PersistedSession>, SessionStoreError> {
        let token = read_entry(&self.token_path())?;
        let user_raw = read_entry(&self.user_path())?;

        match (token, user_raw) {
            (None, None) => Ok(None),
            (Some(token), Some(user_raw)) => {
                let token = token.trim().to_string();
                if token.is_empty() {
                    return Err(SessionStoreError::EmptyToken {
                        path: self.token_path(),
                    });
                }

                let user = serde_json::from_str::<User>(&user_raw)
                    .map_err(|source| SessionStoreError::user_parse(self.user_path(), source))?;
                Ok(Some(PersistedSession::new(user, token)))
            }
            (token, _) => Err(SessionStoreError::PartialState {
                root: self.root.clone(),
                present: if token.is_some() {
                    TOKEN_ENTRY
                } else {
                    USER_ENTRY
                },
            }),
        }
    }

    /// Persists a full session. The user entry lands before the token entry;
    /// `load` requires both, so a crash in between reads back as partial
    /// state rather than as a stale session.
    pub fn save(&self, user: &User, token: &str) -> Result<(), SessionStoreError> {
        fs::create_dir_all(&self.root)
            .map_err(|source| SessionStoreError::io("creating session directory", &self.root, source))?;

        let raw = serde_json::to_string(user)
            .map_err(|source| SessionStoreError::user_serialize(self.user_path(), source))?;
        fs::write(self.user_path(), raw)
            .map_err(|source| SessionStoreError::io("writing user entry", self.user_path(), source))?;
        fs::write(self.token_path(), token)
            .map_err(|source| SessionStoreError::io("writing token entry", self.token_path(), source))?;
        Ok(())
    }

    /// Replaces only the user entry, leaving the token untouched. Refuses to
    /// run against a store with no token entry, which would create partial
    /// state.
    pub fn save_user(&self, user: &User) -> Result<(), SessionStoreError> {
        if !self.token_path().is_file() {
            return Err(SessionStoreError::NoActiveSession {
                root: self.root.clone(),
            });
        }

        let raw = serde_json::to_string(user)
            .map_err(|source| SessionStoreError::user_serialize(self.user_path(), source))?;
        fs::write(self.user_path(), raw)
            .map_err(|source| SessionStoreError::io("writing user entry", self.user_path(), source))?;
        Ok(())
    }

    /// Removes both entries. Idempotent: missing entries are not errors.
    pub fn clear(&self) -> Result<(), SessionStoreError> {
        remove_entry(&self.token_path())?;
        remove_entry(&self.user_path())?;
        Ok(())
    }
}

fn read_entry(path: &Path) -> Result<Option<String>, SessionStoreError> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(SessionStoreError::io("reading session entry", path, source)),
    }
}

fn remove_entry(path: &Path) -> Result<(), SessionStoreError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
        Err(source) => Err(SessionStoreError::io("removing session entry", path, source)),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use blog_api::types::{Role, User};

    use super::SessionStore;
    use crate::error::SessionStoreError;
    use crate::paths::{TOKEN_ENTRY, USER_ENTRY};

    fn sample_user() -> User {
        User {
            id: "u1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            role: Role::User,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn load_from_missing_root_is_signed_out() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SessionStore::open(dir.path().join("nope"));

        assert_eq!(store.load().expect("load should succeed"), None);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SessionStore::open(dir.path());

        store.save(&sample_user(), "tok-1").expect("save should succeed");

        let persisted = store
            .load()
            .expect("load should succeed")
            .expect("session should exist");
        assert_eq!(persisted.user, sample_user());
        assert_eq!(persisted.token, "tok-1");
    }

    #[test]
    fn clear_removes_both_entries_and_is_idempotent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SessionStore::open(dir.path());

        store.save(&sample_user(), "tok-1").expect("save should succeed");
        store.clear().expect("clear should succeed");

        assert!(!dir.path().join(TOKEN_ENTRY).exists());
        assert!(!dir.path().join(USER_ENTRY).exists());
        assert_eq!(store.load().expect("load should succeed"), None);

        store.clear().expect("second clear should also succeed");
    }

    #[test]
    fn token_without_user_is_partial_state() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SessionStore::open(dir.path());

        fs::write(dir.path().join(TOKEN_ENTRY), "tok-1").expect("write token");

        match store.load() {
            Err(SessionStoreError::PartialState { present, .. }) => {
                assert_eq!(present, TOKEN_ENTRY);
            }
            other => panic!("expected partial state error, got {other:?}"),
        }
    }

    #[test]
    fn user_without_token_is_partial_state() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SessionStore::open(dir.path());

        store.save(&sample_user(), "tok-1").expect("save should succeed");
        fs::remove_file(dir.path().join(TOKEN_ENTRY)).expect("remove token");

        match store.load() {
            Err(SessionStoreError::PartialState { present, .. }) => {
                assert_eq!(present, USER_ENTRY);
            }
            other => panic!("expected partial state error, got {other:?}"),
        }
    }

    #[test]
    fn blank_token_entry_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SessionStore::open(dir.path());

        store.save(&sample_user(), "   ").expect("save should succeed");

        assert!(matches!(
            store.load(),
            Err(SessionStoreError::EmptyToken { .. })
        ));
    }

    #[test]
    fn corrupt_user_entry_reports_parse_failure() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SessionStore::open(dir.path());

        store.save(&sample_user(), "tok-1").expect("save should succeed");
        fs::write(dir.path().join(USER_ENTRY), "{not json").expect("corrupt user");

        assert!(matches!(
            store.load(),
            Err(SessionStoreError::UserParse { .. })
        ));
    }

    #[test]
    fn save_user_requires_an_existing_token_entry() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SessionStore::open(dir.path());

        assert!(matches!(
            store.save_user(&sample_user()),
            Err(SessionStoreError::NoActiveSession { .. })
        ));

        store.save(&sample_user(), "tok-1").expect("save should succeed");
        let mut renamed = sample_user();
        renamed.name = "Ada L.".to_string();
        store.save_user(&renamed).expect("save_user should succeed");

        let persisted = store
            .load()
            .expect("load should succeed")
            .expect("session should exist");
        assert_eq!(persisted.user.name, "Ada L.");
        assert_eq!(persisted.token, "tok-1");
    }
}
