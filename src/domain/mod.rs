//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `session` - Focus session lifecycle and daily statistics

pub mod foundation;
pub mod session;
