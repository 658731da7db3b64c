//! ListSessionsHandler - Query handler for listing sessions.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::session::{Session, SessionError};
use crate::ports::SessionStore;

/// Query to list sessions, optionally restricted to one date.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListSessionsQuery {
    pub date: Option<NaiveDate>,
}

/// Handler for listing sessions, most recent start first.
pub struct ListSessionsHandler {
    store: Arc<dyn SessionStore>,
}

impl ListSessionsHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: ListSessionsQuery) -> Result<Vec<Session>, SessionError> {
        let sessions = self.store.list(query.date).await?;
        debug!(date = ?query.date, count = sessions.len(), "Listed sessions");
        Ok(sessions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemorySessionStore;
    use crate::domain::foundation::Timestamp;
    use crate::domain::session::NewSession;
    use chrono::{DateTime, Utc};

    fn at(rfc3339: &str) -> Timestamp {
        Timestamp::from_datetime(
            DateTime::parse_from_rfc3339(rfc3339)
                .unwrap()
                .with_timezone(&Utc),
        )
    }

    async fn seeded_store() -> Arc<InMemorySessionStore> {
        let store = Arc::new(InMemorySessionStore::new());
        for (title, start) in [
            ("Mon morning", "2024-05-06T08:00:00Z"),
            ("Tue", "2024-05-07T09:00:00Z"),
            ("Mon evening", "2024-05-06T19:30:00Z"),
        ] {
            store
                .insert(&NewSession::new(title.to_string(), 25, at(start)).unwrap())
                .await
                .unwrap();
        }
        store
    }

    fn titles(sessions: &[Session]) -> Vec<&str> {
        sessions.iter().map(|s| s.title()).collect()
    }

    #[tokio::test]
    async fn lists_all_sessions_most_recent_first() {
        let handler = ListSessionsHandler::new(seeded_store().await);

        let sessions = handler.handle(ListSessionsQuery::default()).await.unwrap();

        assert_eq!(titles(&sessions), vec!["Tue", "Mon evening", "Mon morning"]);
    }

    #[tokio::test]
    async fn filters_by_date() {
        let handler = ListSessionsHandler::new(seeded_store().await);

        let sessions = handler
            .handle(ListSessionsQuery {
                date: NaiveDate::from_ymd_opt(2024, 5, 6),
            })
            .await
            .unwrap();

        assert_eq!(titles(&sessions), vec!["Mon evening", "Mon morning"]);
    }

    #[tokio::test]
    async fn date_without_sessions_is_empty() {
        let handler = ListSessionsHandler::new(seeded_store().await);

        let sessions = handler
            .handle(ListSessionsQuery {
                date: NaiveDate::from_ymd_opt(2023, 1, 1),
            })
            .await
            .unwrap();

        assert!(sessions.is_empty());
    }
}
