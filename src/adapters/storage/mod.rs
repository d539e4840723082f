//! Storage Adapters
//!
//! Implementations of the StateStore port for persisting ledger state.
//!
//! ## Available Adapters
//!
//! - **FileStateStore** - Keeps the ledger as a YAML snapshot on disk
//! - **InMemoryStateStore** - Keeps the ledger in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use builders_dao::adapters::storage::open_state_store;
//!
//! let store = open_state_store(&config.storage).await?;
//! ```

mod file_state_store;
mod in_memory_state_store;

pub use file_state_store::FileStateStore;
pub use in_memory_state_store::InMemoryStateStore;

use std::sync::Arc;

use crate::config::{StorageBackend, StorageConfig};
use crate::ports::{StateStore, StateStoreError};

/// Build the store selected by `config`.
pub async fn open_state_store(config: &StorageConfig) -> Result<Arc<dyn StateStore>, StateStoreError> {
    match config.backend {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory ledger state");
            Ok(Arc::new(InMemoryStateStore::new()))
        }
        StorageBackend::File => {
            tracing::info!(path = %config.path.display(), "Using file-backed ledger state");
            Ok(Arc::new(FileStateStore::open(&config.path).await?))
        }
    }
}
