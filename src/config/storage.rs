//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where ledger state is kept
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Store implementation
    #[serde(default)]
    pub backend: StorageBackend,

    /// Snapshot file for the `file` backend
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

/// Store implementation
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process memory, lost on exit
    #[default]
    Memory,
    /// YAML snapshot on disk
    File,
}

impl StorageConfig {
    /// Check if state outlives the process
    pub fn is_durable(&self) -> bool {
        self.backend == StorageBackend::File
    }

    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.is_durable() && self.path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("storage.path"));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: default_path(),
        }
    }
}

fn default_path() -> PathBuf {
    PathBuf::from("./data/ledger.yaml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_config_defaults() {
        let config = StorageConfig::default();
        assert_eq!(config.backend, StorageBackend::Memory);
        assert_eq!(config.path, PathBuf::from("./data/ledger.yaml"));
        assert!(!config.is_durable());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_file_backend_requires_path() {
        let config = StorageConfig {
            backend: StorageBackend::File,
            path: PathBuf::new(),
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired("storage.path"))
        ));
    }

    #[test]
    fn test_storage_config_deserialization() {
        let json = r#"{ "backend": "file", "path": "/var/lib/dao/ledger.yaml" }"#;
        let config: StorageConfig = serde_json::from_str(json).unwrap();
        assert!(config.is_durable());
        assert_eq!(config.path, PathBuf::from("/var/lib/dao/ledger.yaml"));
    }
}
