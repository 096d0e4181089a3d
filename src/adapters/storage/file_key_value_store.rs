//! File-based Key-Value Store Adapter
//!
//! Stores each record as `<base_path>/<key>.json`. Writes go to a temporary
//! file first and are renamed into place, so a crash mid-write leaves the
//! previous record intact.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::ports::{validate_key, KeyValueStore, StorageError};

/// File-based storage for session records
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    base_path: PathBuf,
}

impl FileKeyValueStore {
    /// Create a new file store rooted at `base_path`
    ///
    /// The directory is created lazily on first write.
    ///
    /// # Example
    /// ```ignore
    /// let store = FileKeyValueStore::new("./data");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Root directory of this store
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Get the record file path for a key
    fn record_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}.json", key))
    }

    /// Get the temporary file path used while writing a key
    fn temp_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!(".{}.json.tmp", key))
    }

    /// Ensure the base directory exists
    fn ensure_dir(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.base_path)
            .map_err(|e| StorageError::from_io("Failed to create data directory", e))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        let path = self.record_path(key);

        match fs::read_to_string(&path) {
            Ok(contents) => {
                tracing::debug!(path = %path.display(), bytes = contents.len(), "Read record");
                Ok(Some(contents))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::from_io("Failed to read record", e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        self.ensure_dir()?;

        let temp_path = self.temp_path(key);
        let path = self.record_path(key);

        fs::write(&temp_path, value)
            .map_err(|e| StorageError::from_io("Failed to write temporary file", e))?;

        // Rename is atomic on the same filesystem
        if let Err(e) = fs::rename(&temp_path, &path) {
            let _ = fs::remove_file(&temp_path);
            return Err(StorageError::from_io("Failed to move record into place", e));
        }

        tracing::debug!(path = %path.display(), bytes = value.len(), "Wrote record");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        let path = self.record_path(key);

        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "Removed record");
                Ok(())
            }
            // Idempotent delete
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::from_io("Failed to remove record", e)),
        }
    }

    fn contains(&self, key: &str) -> Result<bool, StorageError> {
        validate_key(key)?;
        Ok(self.record_path(key).is_file())
    }
}
