//! Key-Value Store Port - Interface for local durable persistence.
//!
//! The session record lives under a single well-known key. Operations are
//! synchronous: the store is local and in-process, so there is nothing to
//! await.

/// Errors that can occur during key-value store operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl StorageError {
    pub(crate) fn from_io(context: &str, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::PermissionDenied {
            StorageError::PermissionDenied(format!("{}: {}", context, err))
        } else {
            StorageError::Io(format!("{}: {}", context, err))
        }
    }
}

/// Port for reading and writing string records by key
pub trait KeyValueStore: Send + Sync {
    /// Read the record stored under `key`
    ///
    /// # Returns
    /// `None` if no record exists
    ///
    /// # Errors
    /// Returns `StorageError` if the store cannot be read
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, fully replacing any prior record
    ///
    /// Either the whole new value is stored or the prior record is left
    /// intact.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the record under `key`
    ///
    /// Deleting a missing record succeeds.
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Check if a record exists under `key`
    fn contains(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.get(key)?.is_some())
    }
}

/// Keys are restricted so they map safely onto file names.
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
