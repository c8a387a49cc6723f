//! Engine and storage error types.
//!
//! `EngineError` is the taxonomy callers of the engine see. `StoreError` is
//! what key-value adapters report; the progress store converts it into a
//! soft `EngineError::StorageUnavailable` instead of propagating it.

use thiserror::Error;

/// Errors surfaced by the assessment and progress engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Malformed answer set, empty question bank, or unknown article.
    /// Fatal to the operation; nothing is persisted.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The key-value store could not be read or written. Non-fatal: the
    /// session continues on in-memory state.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// A stored value could not be decoded or failed validation. Treated as
    /// a cold start.
    #[error("malformed stored state under '{key}': {message}")]
    MalformedStoredState { key: String, message: String },
}

impl EngineError {
    /// Returns `true` for errors that leave the session usable.
    pub fn is_soft(&self) -> bool {
        matches!(
            self,
            EngineError::StorageUnavailable(_) | EngineError::MalformedStoredState { .. }
        )
    }
}

impl From<StoreError> for EngineError {
    fn from(err: StoreError) -> Self {
        EngineError::StorageUnavailable(err.to_string())
    }
}

/// Errors reported by a [`KeyValueStore`](crate::store::KeyValueStore) adapter.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying I/O failed.
    #[error("I/O error on key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The backend refused the operation or is not reachable.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
