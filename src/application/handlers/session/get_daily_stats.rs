//! GetDailyStatsHandler - Query handler for per-day totals.

use std::sync::Arc;

use tracing::debug;

use crate::domain::session::{aggregate_daily, DailyStats, SessionError};
use crate::ports::SessionStore;

/// Query for per-day statistics over completed sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetDailyStatsQuery;

/// Handler producing one entry per date with completed sessions, newest first.
pub struct GetDailyStatsHandler {
    store: Arc<dyn SessionStore>,
}

impl GetDailyStatsHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, _query: GetDailyStatsQuery) -> Result<Vec<DailyStats>, SessionError> {
        let completed = self.store.list_completed().await?;
        let stats = aggregate_daily(&completed);
        debug!(days = stats.len(), sessions = completed.len(), "Computed daily stats");
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemorySessionStore;
    use crate::domain::foundation::Timestamp;
    use crate::domain::session::{Completion, NewSession};
    use chrono::{DateTime, NaiveDate, Utc};

    fn at(rfc3339: &str) -> Timestamp {
        Timestamp::from_datetime(
            DateTime::parse_from_rfc3339(rfc3339)
                .unwrap()
                .with_timezone(&Utc),
        )
    }

    async fn add(store: &InMemorySessionStore, start: &str, minutes: Option<i64>) {
        let start = at(start);
        let mut session = store
            .insert(&NewSession::new("Focus".to_string(), 25, start).unwrap())
            .await
            .unwrap();
        if let Some(minutes) = minutes {
            session.complete(start.plus_secs(minutes * 60), Completion::default());
            store.update(&session).await.unwrap();
        }
    }

    #[tokio::test]
    async fn aggregates_completed_sessions_per_date() {
        let store = Arc::new(InMemorySessionStore::new());
        add(&store, "2024-05-01T09:00:00Z", Some(10)).await;
        add(&store, "2024-05-01T11:00:00Z", Some(15)).await;
        add(&store, "2024-05-01T13:00:00Z", None).await;
        add(&store, "2024-05-03T09:00:00Z", Some(30)).await;
        add(&store, "2024-05-02T09:00:00Z", None).await;

        let stats = GetDailyStatsHandler::new(store)
            .handle(GetDailyStatsQuery)
            .await
            .unwrap();

        assert_eq!(
            stats,
            vec![
                DailyStats {
                    date: NaiveDate::from_ymd_opt(2024, 5, 3).unwrap(),
                    session_count: 1,
                    total_minutes: 30,
                },
                DailyStats {
                    date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
                    session_count: 2,
                    total_minutes: 25,
                },
            ]
        );
    }

    #[tokio::test]
    async fn empty_store_has_no_stats() {
        let stats = GetDailyStatsHandler::new(Arc::new(InMemorySessionStore::new()))
            .handle(GetDailyStatsQuery)
            .await
            .unwrap();
        assert!(stats.is_empty());
    }
}
