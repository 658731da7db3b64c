//! Session domain module.
//!
//! Handles focus session lifecycle (creation and completion) and the
//! derived per-day statistics over completed sessions.

mod aggregate;
mod duration;
mod errors;
mod stats;

pub use aggregate::{Completion, NewSession, Session, MAX_TITLE_LENGTH};
pub use duration::{elapsed_minutes, MIN_DURATION_MINUTES};
pub use errors::SessionError;
pub use stats::{aggregate_daily, DailyStats};
