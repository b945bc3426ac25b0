//! # Store Errors

use thiserror::Error;

/// Result type for store operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors surfaced by a patient store.
///
/// Loading never fails (it falls back to an empty collection), so these
/// only arise on writes and on initialization.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Store already exists: {0}")]
    AlreadyExists(String),

    #[error("Failed to serialize patient collection: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
