mod error;
mod paths;
mod schema;
mod store;

pub use error::SessionStoreError;
pub use paths::{session_root, SESSION_DIR, TOKEN_ENTRY, USER_ENTRY};
pub use schema::PersistedSession;
pub use store::SessionStore;
