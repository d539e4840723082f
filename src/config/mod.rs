//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables use the `BUILDERS_DAO` prefix
//! and `__` between nested keys. Every section has defaults, so an empty
//! environment yields an in-memory ledger with pretty logs.
//!
//! # Example
//!
//! ```no_run
//! use builders_dao::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod logging;
mod storage;

pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Ledger state store
    #[serde(default)]
    pub storage: StorageConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `BUILDERS_DAO` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `BUILDERS_DAO__STORAGE__BACKEND=file` -> `storage.backend = file`
    /// - `BUILDERS_DAO__STORAGE__PATH=/var/lib/dao/ledger.yaml`
    /// - `BUILDERS_DAO__LOGGING__FORMAT=json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("BUILDERS_DAO")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.storage.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("BUILDERS_DAO__STORAGE__BACKEND");
        env::remove_var("BUILDERS_DAO__STORAGE__PATH");
        env::remove_var("BUILDERS_DAO__LOGGING__LEVEL");
        env::remove_var("BUILDERS_DAO__LOGGING__FORMAT");
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_file_backend_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("BUILDERS_DAO__STORAGE__BACKEND", "file");
        env::set_var("BUILDERS_DAO__STORAGE__PATH", "/tmp/dao/ledger.yaml");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert_eq!(config.storage.path, PathBuf::from("/tmp/dao/ledger.yaml"));
    }

    #[test]
    fn test_load_logging_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("BUILDERS_DAO__LOGGING__LEVEL", "warn");
        env::set_var("BUILDERS_DAO__LOGGING__FORMAT", "json");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_unknown_backend_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("BUILDERS_DAO__STORAGE__BACKEND", "postgres");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
