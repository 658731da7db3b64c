//! SQLite implementation of SessionStore.
//!
//! Timestamps are stored as fixed-width RFC 3339 UTC text with nanosecond
//! precision, so `ORDER BY start_time` is chronological and values
//! round-trip exactly.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;

use crate::domain::foundation::{DomainError, SessionId, Timestamp};
use crate::domain::session::{NewSession, Session};
use crate::ports::SessionStore;

const SELECT_COLUMNS: &str = "SELECT id, date, title, duration_minutes, start_time, end_time, \
     rating, notes, learnings FROM sessions";

/// SQLite implementation of SessionStore.
#[derive(Clone)]
pub struct SqliteSessionStore {
    pool: SqlitePool,
}

impl SqliteSessionStore {
    /// Creates a new SqliteSessionStore.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionStore for SqliteSessionStore {
    async fn insert(&self, session: &NewSession) -> Result<Session, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO sessions (date, title, duration_minutes, start_time)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(session.date())
        .bind(session.title())
        .bind(session.duration_minutes())
        .bind(encode_timestamp(session.start_time()))
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert session", e))?;

        let id = SessionId::from_i64(result.last_insert_rowid());
        Ok(session.clone().into_session(id))
    }

    async fn get(&self, id: SessionId) -> Result<Option<Session>, DomainError> {
        let sql = format!("{} WHERE id = ?1", SELECT_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch session", e))?;

        row.map(row_to_session).transpose()
    }

    async fn list(&self, date: Option<NaiveDate>) -> Result<Vec<Session>, DomainError> {
        let rows = match date {
            Some(date) => {
                let sql = format!(
                    "{} WHERE date = ?1 ORDER BY start_time DESC, id DESC",
                    SELECT_COLUMNS
                );
                sqlx::query(&sql).bind(date).fetch_all(&self.pool).await
            }
            None => {
                let sql = format!("{} ORDER BY start_time DESC, id DESC", SELECT_COLUMNS);
                sqlx::query(&sql).fetch_all(&self.pool).await
            }
        }
        .map_err(|e| DomainError::database("Failed to list sessions", e))?;

        rows.into_iter().map(row_to_session).collect()
    }

    async fn list_completed(&self) -> Result<Vec<Session>, DomainError> {
        let sql = format!("{} WHERE end_time IS NOT NULL", SELECT_COLUMNS);
        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to list completed sessions", e))?;

        rows.into_iter().map(row_to_session).collect()
    }

    async fn update(&self, session: &Session) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE sessions SET
                date = ?2,
                title = ?3,
                duration_minutes = ?4,
                start_time = ?5,
                end_time = ?6,
                rating = ?7,
                notes = ?8,
                learnings = ?9
            WHERE id = ?1
            "#,
        )
        .bind(session.id().as_i64())
        .bind(session.date())
        .bind(session.title())
        .bind(session.duration_minutes())
        .bind(encode_timestamp(session.start_time()))
        .bind(session.end_time().map(encode_timestamp))
        .bind(session.rating())
        .bind(session.notes())
        .bind(session.learnings())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update session", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::session_not_found(session.id()));
        }

        Ok(())
    }

    async fn delete(&self, id: SessionId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM sessions WHERE id = ?1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete session", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::session_not_found(id));
        }

        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Row mapping
// ════════════════════════════════════════════════════════════════════════════════

fn encode_timestamp(ts: &Timestamp) -> String {
    ts.as_datetime().to_rfc3339_opts(SecondsFormat::Nanos, true)
}

fn decode_timestamp(column: &str, raw: &str) -> Result<Timestamp, DomainError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| Timestamp::from_datetime(dt.with_timezone(&Utc)))
        .map_err(|e| DomainError::database(&format!("Invalid {} '{}'", column, raw), e))
}

fn row_to_session(row: SqliteRow) -> Result<Session, DomainError> {
    let column_err = |e: sqlx::Error| DomainError::database("Failed to read session row", e);

    let id: i64 = row.try_get("id").map_err(column_err)?;
    let date: NaiveDate = row.try_get("date").map_err(column_err)?;
    let title: String = row.try_get("title").map_err(column_err)?;
    let duration_minutes: i32 = row.try_get("duration_minutes").map_err(column_err)?;
    let start_time: String = row.try_get("start_time").map_err(column_err)?;
    let end_time: Option<String> = row.try_get("end_time").map_err(column_err)?;
    let rating: Option<i32> = row.try_get("rating").map_err(column_err)?;
    let notes: Option<String> = row.try_get("notes").map_err(column_err)?;
    let learnings: Option<String> = row.try_get("learnings").map_err(column_err)?;

    let start_time = decode_timestamp("start_time", &start_time)?;
    let end_time = end_time
        .as_deref()
        .map(|raw| decode_timestamp("end_time", raw))
        .transpose()?;

    Ok(Session::reconstitute(
        SessionId::from_i64(id),
        date,
        title,
        duration_minutes,
        start_time,
        end_time,
        rating,
        notes,
        learnings,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sqlite::{open_pool, run_migrations};
    use crate::config::DatabaseConfig;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::session::Completion;
    use tempfile::TempDir;

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

    async fn test_store() -> (SqliteSessionStore, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let config = DatabaseConfig {
            url: format!("sqlite://{}", dir.path().join("sessions.db").display()),
            ..Default::default()
        };
        let pool = open_pool(&config).await.unwrap();
        run_migrations(&pool).await.unwrap();
        (SqliteSessionStore::new(pool), dir)
    }

    #[tokio::test]
    async fn insert_then_get_round_trips() {
        let (store, _dir) = test_store().await;
        let inserted = store
            .insert(&new_session("Write report", "2024-05-01T09:00:00.123456789Z"))
            .await
            .unwrap();

        let found = store.get(inserted.id()).await.unwrap().unwrap();
        assert_eq!(found, inserted);
        assert_eq!(found.date(), NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert!(found.is_open());
    }

    #[tokio::test]
    async fn get_missing_returns_none() {
        let (store, _dir) = test_store().await;
        assert!(store.get(SessionId::from_i64(99)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let (store, _dir) = test_store().await;
        let a = store.insert(&new_session("A", "2024-05-01T09:00:00Z")).await.unwrap();
        let b = store.insert(&new_session("B", "2024-05-01T10:00:00Z")).await.unwrap();
        store.delete(b.id()).await.unwrap();

        let c = store.insert(&new_session("C", "2024-05-01T11:00:00Z")).await.unwrap();
        assert!(c.id() > b.id());
        assert!(b.id() > a.id());
    }

    #[tokio::test]
    async fn list_orders_most_recent_first_and_filters_by_date() {
        let (store, _dir) = test_store().await;
        store.insert(&new_session("Early", "2024-05-01T08:00:00Z")).await.unwrap();
        store.insert(&new_session("Late", "2024-05-01T18:00:00Z")).await.unwrap();
        store.insert(&new_session("Next day", "2024-05-02T07:00:00Z")).await.unwrap();

        let all: Vec<String> = store
            .list(None)
            .await
            .unwrap()
            .iter()
            .map(|s| s.title().to_string())
            .collect();
        assert_eq!(all, vec!["Next day", "Late", "Early"]);

        let may_first = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let filtered: Vec<String> = store
            .list(Some(may_first))
            .await
            .unwrap()
            .iter()
            .map(|s| s.title().to_string())
            .collect();
        assert_eq!(filtered, vec!["Late", "Early"]);
    }

    #[tokio::test]
    async fn list_breaks_start_time_ties_by_id() {
        let (store, _dir) = test_store().await;
        let first = store.insert(&new_session("First", "2024-05-01T09:00:00Z")).await.unwrap();
        let second = store.insert(&new_session("Second", "2024-05-01T09:00:00Z")).await.unwrap();

        let ids: Vec<SessionId> = store.list(None).await.unwrap().iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec![second.id(), first.id()]);
    }

    #[tokio::test]
    async fn update_persists_completion() {
        let (store, _dir) = test_store().await;
        let mut session = store.insert(&new_session("Study", "2024-05-01T09:00:00Z")).await.unwrap();

        session.complete(
            at("2024-05-01T09:45:10Z"),
            Completion {
                rating: Some(4),
                notes: Some("focused".to_string()),
                learnings: None,
            },
        );
        store.update(&session).await.unwrap();

        let found = store.get(session.id()).await.unwrap().unwrap();
        assert_eq!(found, session);
        assert_eq!(found.duration_minutes(), 45);
        assert_eq!(found.rating(), Some(4));

        let completed = store.list_completed().await.unwrap();
        assert_eq!(completed, vec![session]);
    }

    #[tokio::test]
    async fn update_missing_session_is_not_found() {
        let (store, _dir) = test_store().await;
        let ghost = new_session("Ghost", "2024-05-01T09:00:00Z").into_session(SessionId::from_i64(5));

        let err = store.update(&ghost).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::SessionNotFound);
        assert_eq!(err.session_id(), Some(SessionId::from_i64(5)));
    }

    #[tokio::test]
    async fn delete_missing_session_is_not_found() {
        let (store, _dir) = test_store().await;
        let err = store.delete(SessionId::from_i64(1)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::SessionNotFound);
    }

    #[tokio::test]
    async fn sessions_survive_reopening_the_database() {
        let dir = tempfile::tempdir().unwrap();
        let config = DatabaseConfig {
            url: format!("sqlite://{}", dir.path().join("sessions.db").display()),
            ..Default::default()
        };

        let pool = open_pool(&config).await.unwrap();
        run_migrations(&pool).await.unwrap();
        let inserted = SqliteSessionStore::new(pool.clone())
            .insert(&new_session("Persist me", "2024-05-01T09:00:00Z"))
            .await
            .unwrap();
        pool.close().await;

        let pool = open_pool(&config).await.unwrap();
        run_migrations(&pool).await.unwrap();
        let found = SqliteSessionStore::new(pool).get(inserted.id()).await.unwrap();
        assert_eq!(found, Some(inserted));
    }
}
