//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the ledger to where its state lives:
//! - `storage` - State store implementations (in-memory, YAML file)

pub mod storage;

pub use storage::{open_state_store, FileStateStore, InMemoryStateStore};
