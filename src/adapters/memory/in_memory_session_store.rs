//! In-Memory Session Store Adapter
//!
//! Keeps sessions in a map behind an async lock.
//! Useful for testing and development.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::session::{NewSession, Session};
use crate::ports::SessionStore;

#[derive(Debug, Default)]
struct Inner {
    sessions: BTreeMap<SessionId, Session>,
    last_id: i64,
}

/// In-memory storage for sessions.
///
/// Ids start at 1 and keep counting across deletes, matching the
/// no-reuse guarantee of the SQLite store.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    inner: Arc<RwLock<Inner>>,
}

impl InMemorySessionStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored sessions
    pub async fn len(&self) -> usize {
        self.inner.read().await.sessions.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

fn most_recent_first(a: &Session, b: &Session) -> std::cmp::Ordering {
    b.start_time()
        .cmp(a.start_time())
        .then_with(|| b.id().cmp(&a.id()))
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn insert(&self, session: &NewSession) -> Result<Session, DomainError> {
        let mut inner = self.inner.write().await;
        let next = inner.last_id.checked_add(1).ok_or_else(|| {
            DomainError::new(ErrorCode::InternalError, "Session id space exhausted")
        })?;
        inner.last_id = next;

        let stored = session.clone().into_session(SessionId::from_i64(next));
        inner.sessions.insert(stored.id(), stored.clone());
        Ok(stored)
    }

    async fn get(&self, id: SessionId) -> Result<Option<Session>, DomainError> {
        Ok(self.inner.read().await.sessions.get(&id).cloned())
    }

    async fn list(&self, date: Option<NaiveDate>) -> Result<Vec<Session>, DomainError> {
        let inner = self.inner.read().await;
        let mut sessions: Vec<Session> = inner
            .sessions
            .values()
            .filter(|s| date.map_or(true, |d| s.date() == d))
            .cloned()
            .collect();
        sessions.sort_by(most_recent_first);
        Ok(sessions)
    }

    async fn list_completed(&self) -> Result<Vec<Session>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner
            .sessions
            .values()
            .filter(|s| s.is_completed())
            .cloned()
            .collect())
    }

    async fn update(&self, session: &Session) -> Result<(), DomainError> {
        let mut inner = self.inner.write().await;
        match inner.sessions.get_mut(&session.id()) {
            Some(existing) => {
                *existing = session.clone();
                Ok(())
            }
            None => Err(DomainError::session_not_found(session.id())),
        }
    }

    async fn delete(&self, id: SessionId) -> Result<(), DomainError> {
        let mut inner = self.inner.write().await;
        inner
            .sessions
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::session_not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use crate::domain::session::Completion;
    use chrono::{DateTime, Utc};

    fn at(rfc3339: &str) -> Timestamp {
        Timestamp::from_datetime(
            DateTime::parse_from_rfc3339(rfc3339)
                .unwrap()
                .with_timezone(&Utc),
        )
    }

    fn new_session(title: &str, start: &str) -> NewSession {
        NewSession::new(title.to_string(), 25, at(start)).unwrap()
    }

    #[tokio::test]
    async fn insert_assigns_sequential_ids() {
        let store = InMemorySessionStore::new();
        let a = store.insert(&new_session("A", "2024-05-01T09:00:00Z")).await.unwrap();
        let b = store.insert(&new_session("B", "2024-05-01T10:00:00Z")).await.unwrap();

        assert_eq!(a.id(), SessionId::from_i64(1));
        assert_eq!(b.id(), SessionId::from_i64(2));
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = InMemorySessionStore::new();
        let a = store.insert(&new_session("A", "2024-05-01T09:00:00Z")).await.unwrap();
        store.delete(a.id()).await.unwrap();

        let b = store.insert(&new_session("B", "2024-05-01T10:00:00Z")).await.unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[tokio::test]
    async fn get_returns_inserted_session() {
        let store = InMemorySessionStore::new();
        let inserted = store
            .insert(&new_session("Deep work", "2024-05-01T09:00:00Z"))
            .await
            .unwrap();

        let found = store.get(inserted.id()).await.unwrap();
        assert_eq!(found, Some(inserted));
    }

    #[tokio::test]
    async fn list_orders_by_start_time_descending() {
        let store = InMemorySessionStore::new();
        store.insert(&new_session("Early", "2024-05-01T08:00:00Z")).await.unwrap();
        store.insert(&new_session("Late", "2024-05-01T18:00:00Z")).await.unwrap();
        store.insert(&new_session("Yesterday", "2024-04-30T12:00:00Z")).await.unwrap();

        let titles: Vec<String> = store
            .list(None)
            .await
            .unwrap()
            .iter()
            .map(|s| s.title().to_string())
            .collect();

        assert_eq!(titles, vec!["Late", "Early", "Yesterday"]);
    }

    #[tokio::test]
    async fn list_filters_by_date() {
        let store = InMemorySessionStore::new();
        store.insert(&new_session("Mon", "2024-05-06T09:00:00Z")).await.unwrap();
        store.insert(&new_session("Tue", "2024-05-07T09:00:00Z")).await.unwrap();

        let monday = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
        let sessions = store.list(Some(monday)).await.unwrap();

        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].title(), "Mon");
    }

    #[tokio::test]
    async fn list_completed_skips_open_sessions() {
        let store = InMemorySessionStore::new();
        let mut done = store.insert(&new_session("Done", "2024-05-01T09:00:00Z")).await.unwrap();
        store.insert(&new_session("Open", "2024-05-01T10:00:00Z")).await.unwrap();

        done.complete(at("2024-05-01T09:25:00Z"), Completion::default());
        store.update(&done).await.unwrap();

        let completed = store.list_completed().await.unwrap();
        assert_eq!(completed, vec![done]);
    }

    #[tokio::test]
    async fn update_missing_session_is_not_found() {
        let store = InMemorySessionStore::new();
        let ghost = new_session("Ghost", "2024-05-01T09:00:00Z").into_session(SessionId::from_i64(42));

        let err = store.update(&ghost).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::SessionNotFound);
        assert_eq!(err.session_id(), Some(SessionId::from_i64(42)));
    }

    #[tokio::test]
    async fn delete_missing_session_is_not_found() {
        let store = InMemorySessionStore::new();
        let err = store.delete(SessionId::from_i64(7)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::SessionNotFound);
    }

    #[tokio::test]
    async fn delete_removes_session() {
        let store = InMemorySessionStore::new();
        let s = store.insert(&new_session("A", "2024-05-01T09:00:00Z")).await.unwrap();

        store.delete(s.id()).await.unwrap();

        assert!(store.get(s.id()).await.unwrap().is_none());
        assert!(store.is_empty().await);
    }
}
