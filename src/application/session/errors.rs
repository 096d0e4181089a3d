//! Session store error types.

use thiserror::Error;

use crate::domain::foundation::ValidationError;
use crate::ports::StorageError;

/// Errors surfaced by [`SessionStore`](super::SessionStore) operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The persisted record could not be read.
    ///
    /// Only returned by `try_initialize`; `initialize` degrades it to
    /// "no profile".
    #[error("Failed to read session record: {0}")]
    StorageRead(#[source] StorageError),

    /// The persisted record exists but is not a valid profile.
    #[error("Malformed session record: {0}")]
    MalformedRecord(#[source] serde_json::Error),

    /// A mutation could not be made durable. In-memory state is unchanged.
    #[error("Failed to persist session record: {0}")]
    StorageWrite(#[source] StorageError),

    #[error("Failed to serialize profile: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl SessionError {
    /// True for failures that `initialize` treats as "logged out".
    pub fn is_read_failure(&self) -> bool {
        matches!(
            self,
            SessionError::StorageRead(_) | SessionError::MalformedRecord(_)
        )
    }
}
