use std::path::PathBuf;

use standings_common::error::StandingsError;
use standings_model::TeamId;

/// Errors from the durable key-value medium.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Keys map to file names, so path separators and dot-prefixes are refused.
    #[error("invalid storage key: {key:?}")]
    InvalidKey { key: String },

    #[error("failed to encode value for {key}: {source}")]
    Encode {
        key: String,
        source: serde_json::Error,
    },
}

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Why a persisted value could not be turned back into an entity.
///
/// The store never surfaces these; it falls back to the defaults instead.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate team id {id:?} in persisted roster")]
    DuplicateTeamId { id: TeamId },
}

/// Misuse of a [`crate::StoreContext`].
#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    #[error("a tournament store is already installed in this context")]
    AlreadyInstalled,
}

/// The background writer is no longer running.
#[derive(Debug, thiserror::Error)]
#[error("persistence writer has stopped")]
pub struct WriterClosed;

impl From<StorageError> for StandingsError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Io { source, .. } => StandingsError::Io(source),
            other => StandingsError::storage(other.to_string()),
        }
    }
}
