//! Per-day aggregation of completed sessions.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::Session;

/// Count and total minutes of completed sessions on one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyStats {
    pub date: NaiveDate,
    pub session_count: u32,
    pub total_minutes: i64,
}

/// Group completed sessions by date, most recent date first.
///
/// Open sessions are ignored. Dates without a completed session are
/// absent rather than zero-filled.
pub fn aggregate_daily<'a, I>(sessions: I) -> Vec<DailyStats>
where
    I: IntoIterator<Item = &'a Session>,
{
    let mut by_date: BTreeMap<NaiveDate, DailyStats> = BTreeMap::new();

    for session in sessions.into_iter().filter(|s| s.is_completed()) {
        let entry = by_date.entry(session.date()).or_insert(DailyStats {
            date: session.date(),
            session_count: 0,
            total_minutes: 0,
        });
        entry.session_count += 1;
        entry.total_minutes += i64::from(session.duration_minutes());
    }

    by_date.into_values().rev().collect()
}
