//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `story` - User story aggregate, status lifecycle and vote aggregation

pub mod foundation;
pub mod story;
