//! Ports layer - Interfaces to the outside world.
//!
//! The ledger owns no storage itself. Persistent state is reached through
//! the [`StateStore`] port, implemented by the adapters layer.

mod state_store;

pub use state_store::{StateKey, StateStore, StateStoreError, WriteBatch};
