//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `RUMI_LODGE` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment is a valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use rumi_lodge::config::AppConfig;
//!
//! let config = AppConfig::load_validated().expect("Invalid configuration");
//!
//! println!("Session record in {}", config.storage.data_dir.display());
//! ```

mod error;
mod runtime;
mod storage;

pub use error::{ConfigError, ValidationError};
pub use runtime::{Environment, RuntimeConfig};
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Runtime configuration (environment, logging)
    #[serde(default)]
    pub runtime: RuntimeConfig,

    /// Storage configuration (backend, data directory, session key)
    #[serde(default)]
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `RUMI_LODGE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `RUMI_LODGE__STORAGE__DATA_DIR=/var/lib/rumi` -> `storage.data_dir`
    /// - `RUMI_LODGE__RUNTIME__LOG_JSON=true` -> `runtime.log_json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("RUMI_LODGE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.runtime.validate()?;
        self.storage.validate()?;
        Ok(())
    }

    /// Load and validate in one step
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::LoadError` if the environment cannot be parsed and
    /// `ConfigError::ValidationFailed` if a loaded value is invalid.
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }
}
