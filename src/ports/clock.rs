//! Clock port.
//!
//! Start and end times are always taken from the server clock, never from
//! the caller. Handlers read time through this trait so tests can pin it.

use crate::domain::foundation::Timestamp;

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}
