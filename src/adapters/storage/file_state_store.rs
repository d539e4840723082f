//! File-based State Store Adapter
//!
//! Keeps the whole ledger as a single YAML snapshot on disk, mirrored in
//! memory for reads. Each commit writes a temporary file and renames it over
//! the snapshot, so the file always holds the last committed state.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::RwLock;

use crate::ports::{StateKey, StateStore, StateStoreError, WriteBatch};

/// File-backed storage for ledger state
#[derive(Debug)]
pub struct FileStateStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, Value>>,
}

impl FileStateStore {
    /// Open the snapshot at `path`, starting empty if it does not exist yet
    ///
    /// # Example
    /// ```ignore
    /// let store = FileStateStore::open("./data/ledger.yaml").await?;
    /// ```
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self, StateStoreError> {
        let path = path.as_ref().to_path_buf();

        let entries = if fs::try_exists(&path)
            .await
            .map_err(|e| StateStoreError::Io(e.to_string()))?
        {
            let yaml = fs::read_to_string(&path)
                .await
                .map_err(|e| StateStoreError::Io(e.to_string()))?;
            parse_snapshot(&path, &yaml)?
        } else {
            BTreeMap::new()
        };

        tracing::debug!(path = %path.display(), entries = entries.len(), "Opened ledger snapshot");

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Path of the snapshot file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn write_snapshot(&self, entries: &BTreeMap<String, Value>) -> Result<(), StateStoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StateStoreError::Io(e.to_string()))?;
        }

        let yaml = serde_yaml::to_string(entries).map_err(|e| StateStoreError::Serialization {
            key: self.path.display().to_string(),
            reason: e.to_string(),
        })?;

        let temp = self.temp_path();
        fs::write(&temp, yaml)
            .await
            .map_err(|e| StateStoreError::Io(e.to_string()))?;
        fs::rename(&temp, &self.path)
            .await
            .map_err(|e| StateStoreError::Io(e.to_string()))?;

        Ok(())
    }
}

fn parse_snapshot(path: &Path, yaml: &str) -> Result<BTreeMap<String, Value>, StateStoreError> {
    if yaml.trim().is_empty() {
        return Ok(BTreeMap::new());
    }
    serde_yaml::from_str(yaml).map_err(|e| StateStoreError::Deserialization {
        key: path.display().to_string(),
        reason: e.to_string(),
    })
}

#[async_trait]
impl StateStore for FileStateStore {
    async fn get(&self, key: &StateKey) -> Result<Option<Value>, StateStoreError> {
        let entries = self.entries.read().await;
        Ok(entries.get(&key.to_string()).cloned())
    }

    async fn contains(&self, key: &StateKey) -> Result<bool, StateStoreError> {
        let entries = self.entries.read().await;
        Ok(entries.contains_key(&key.to_string()))
    }

    async fn commit(&self, batch: WriteBatch) -> Result<(), StateStoreError> {
        let mut entries = self.entries.write().await;

        let mut next = entries.clone();
        for (key, value) in batch {
            next.insert(key.to_string(), value);
        }

        // Disk first: memory only moves once the snapshot is in place
        self.write_snapshot(&next).await?;
        *entries = next;

        tracing::debug!(path = %self.path.display(), "Committed ledger snapshot");
        Ok(())
    }
}
