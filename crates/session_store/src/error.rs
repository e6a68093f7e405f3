use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("I/O error while {operation} at {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse persisted user at {path}: {source}")]
    UserParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize user for {path}: {source}")]
    UserSerialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("session state at {root} is partial: only '{present}' exists")]
    PartialState {
        root: PathBuf,
        present: &'static str,
    },

    #[error("token entry at {path} is empty")]
    EmptyToken { path: PathBuf },

    #[error("cannot replace user at {root}: no token entry exists")]
    NoActiveSession { root: PathBuf },
}

impl SessionStoreError {
    #[must_use]
    pub fn io(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    #[must_use]
    pub fn user_parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::UserParse {
            path: path.into(),
            source,
        }
    }

    #[must_use]
    pub fn user_serialize(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::UserSerialize {
            path: path.into(),
            source,
        }
    }
}
