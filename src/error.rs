//! Error types for the list and its storage

use thiserror::Error;

/// Errors surfaced by list operations, storage backends and settings parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// Item text was empty after trimming surrounding whitespace
    #[error("item text is empty")]
    EmptyInput,

    /// Persisted blob exists but is not a JSON array of item strings
    #[error("stored list under '{key}' is corrupt: {reason}")]
    CorruptState { key: String, reason: String },

    /// Positional removal past the end of the list
    #[error("no item at index {index} (list has {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Backend rejected a read or write (quota, security error, ...)
    #[error("storage error on '{key}': {reason}")]
    Storage { key: String, reason: String },

    /// No persistent storage in this environment
    #[error("persistent storage is unavailable")]
    StorageUnavailable,

    /// Settings JSON could not be parsed
    #[error("invalid settings: {0}")]
    Settings(String),
}

impl ListError {
    pub fn corrupt(key: impl Into<String>, reason: impl ToString) -> Self {
        Self::CorruptState {
            key: key.into(),
            reason: reason.to_string(),
        }
    }

    pub fn storage(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Storage {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ListError>;
