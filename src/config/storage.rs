//! Storage configuration (where the session record lives)

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::application::DEFAULT_SESSION_KEY;
use crate::ports::validate_key;

/// Storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Which key-value adapter backs the session
    #[serde(default)]
    pub backend: StorageBackend,

    /// Directory for the file backend
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Key the session record is stored under
    #[serde(default = "default_session_key")]
    pub session_key: String,
}

/// Key-value adapter selection
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// One JSON file per key under `data_dir`
    #[default]
    File,
    /// Process memory; nothing survives exit
    Memory,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if validate_key(&self.session_key).is_err() {
            return Err(ValidationError::InvalidSessionKey(self.session_key.clone()));
        }
        if self.backend == StorageBackend::File && self.data_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("storage.data_dir"));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: default_data_dir(),
            session_key: default_session_key(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_session_key() -> String {
    DEFAULT_SESSION_KEY.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_config_defaults() {
        let config = StorageConfig::default();
        assert_eq!(config.backend, StorageBackend::File);
        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.session_key, "rumi_user");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_path_like_key() {
        let config = StorageConfig {
            session_key: "../user".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidSessionKey("../user".to_string()))
        );
    }

    #[test]
    fn test_validation_requires_data_dir_for_file_backend() {
        let config = StorageConfig {
            data_dir: PathBuf::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = StorageConfig {
            backend: StorageBackend::Memory,
            data_dir: PathBuf::new(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_storage_backend_deserialization() {
        let backend: StorageBackend = serde_json::from_str("\"memory\"").unwrap();
        assert_eq!(backend, StorageBackend::Memory);
    }
}
