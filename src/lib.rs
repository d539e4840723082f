//! Builders DAO - membership and proposal voting ledger
//!
//! Members join, raise proposals, and vote yes or no until a proposal's
//! threshold resolves it. All state lives behind the `StateStore` port.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
