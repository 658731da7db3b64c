//! Elapsed-duration rounding for completed sessions.
//!
//! Elapsed time is rounded to the nearest whole minute, with exact half
//! minutes rounding away from zero (30s -> 1, 90s -> 2). The result is
//! floored at [`MIN_DURATION_MINUTES`], so a session completed almost
//! immediately, or one whose end precedes its start because the clock
//! moved backwards, still records one minute.

use crate::domain::foundation::Timestamp;

/// Smallest duration a session can record, planned or actual.
pub const MIN_DURATION_MINUTES: i32 = 1;

const MILLIS_PER_MINUTE: i64 = 60_000;
const HALF_MINUTE_MILLIS: i64 = MILLIS_PER_MINUTE / 2;

/// Whole minutes between `start` and `end`, rounded half away from zero
/// and never below [`MIN_DURATION_MINUTES`].
pub fn elapsed_minutes(start: &Timestamp, end: &Timestamp) -> i32 {
    let millis = end.duration_since(start).num_milliseconds();
    if millis <= 0 {
        return MIN_DURATION_MINUTES;
    }

    let minutes = millis.saturating_add(HALF_MINUTE_MILLIS) / MILLIS_PER_MINUTE;
    i32::try_from(minutes)
        .unwrap_or(i32::MAX)
        .max(MIN_DURATION_MINUTES)
}
