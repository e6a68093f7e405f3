use blog_api::types::User;

/// The pair read back from a populated store. Both halves are always present;
/// a store with only one entry never produces this value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedSession {
    pub user: User,
    pub token: String,
}

impl PersistedSession {
    #[must_use]
    pub fn new(user: User, token: impl Into<String>) -> Self {
        Self {
            user,
            token: token.into(),
        }
    }
}
