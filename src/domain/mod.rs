//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, state machine trait, errors)
//! - `governance` - Proposal aggregate, status lifecycle, and governance errors

pub mod foundation;
pub mod governance;
