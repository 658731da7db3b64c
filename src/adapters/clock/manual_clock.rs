//! Manually driven clock for tests.
//!
//! # Example
//!
//! ```ignore
//! use focus_sessions::adapters::clock::ManualClock;
//!
//! let clock = ManualClock::at(start);
//! // ... create a session ...
//! clock.advance_secs(90);
//! // ... complete it: duration is 2 minutes ...
//! ```

use std::sync::RwLock;

use crate::domain::foundation::Timestamp;
use crate::ports::Clock;

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: RwLock<Timestamp>,
}

impl ManualClock {
    /// Creates a clock frozen at `now`.
    pub fn at(now: Timestamp) -> Self {
        Self {
            now: RwLock::new(now),
        }
    }

    /// Moves the clock by `secs` (negative values move it backwards).
    pub fn advance_secs(&self, secs: i64) {
        let mut now = self.now.write().unwrap_or_else(|e| e.into_inner());
        *now = now.plus_secs(secs);
    }

    /// Jumps to an absolute instant.
    pub fn set(&self, to: Timestamp) {
        *self.now.write().unwrap_or_else(|e| e.into_inner()) = to;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.now.read().unwrap_or_else(|e| e.into_inner())
    }
}
