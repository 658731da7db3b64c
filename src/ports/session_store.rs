//! Session store port.
//!
//! Defines the contract for persisting and retrieving Session records.
//! Every read and write of session data goes through this trait.
//!
//! # Design
//!
//! - **Store-assigned ids**: `insert` allocates the id; ids are never reused
//! - **Ordered listing**: `list` returns most recent `start_time` first
//! - **Single-record atomicity**: each write commits on its own

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::{NewSession, Session};

/// Port for Session persistence.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Persist a new session and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, session: &NewSession) -> Result<Session, DomainError>;

    /// Find a session by its ID.
    ///
    /// Returns `None` if not found.
    async fn get(&self, id: SessionId) -> Result<Option<Session>, DomainError>;

    /// List sessions, optionally only those filed under `date`.
    ///
    /// Ordered by `start_time` descending, then by id descending.
    async fn list(&self, date: Option<NaiveDate>) -> Result<Vec<Session>, DomainError>;

    /// List every completed session (with an end time), in no particular order.
    async fn list_completed(&self) -> Result<Vec<Session>, DomainError>;

    /// Update an existing session.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if session doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, session: &Session) -> Result<(), DomainError>;

    /// Delete a session.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if session doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: SessionId) -> Result<(), DomainError>;
}
