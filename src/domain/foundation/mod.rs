//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the focus session domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ErrorSubject};
pub use ids::SessionId;
pub use timestamp::Timestamp;
