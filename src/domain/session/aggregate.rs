//! Session aggregate entity.
//!
//! A session is one timed unit of focused work. It is created open, with
//! the planned duration, and completed exactly once with the actual
//! elapsed duration and optional reflection fields.
//!
//! # Lifecycle
//!
//! ```text
//! create ──► Open ──complete──► Completed
//!              │                    │
//!              └──────delete────────┴──► (gone)
//! ```

use chrono::NaiveDate;

use super::duration::{elapsed_minutes, MIN_DURATION_MINUTES};
use crate::domain::foundation::{DomainError, SessionId, Timestamp};

/// Maximum length for session title.
pub const MAX_TITLE_LENGTH: usize = 200;

/// A session that has been validated but not yet stored.
///
/// The store turns this into a [`Session`] by assigning an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSession {
    title: String,
    duration_minutes: i32,
    start_time: Timestamp,
}

impl NewSession {
    /// Validate caller input and stamp the start time.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the title is empty or too long
    /// - `ValidationFailed` if `duration_minutes` is below one
    pub fn new(
        title: String,
        duration_minutes: i32,
        start_time: Timestamp,
    ) -> Result<Self, DomainError> {
        Session::validate_title(&title)?;
        Session::validate_planned_duration(duration_minutes)?;

        Ok(Self {
            title,
            duration_minutes,
            start_time,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn duration_minutes(&self) -> i32 {
        self.duration_minutes
    }

    pub fn start_time(&self) -> &Timestamp {
        &self.start_time
    }

    /// Calendar date the session is filed under.
    pub fn date(&self) -> NaiveDate {
        self.start_time.date()
    }

    /// Attach the store-assigned id, producing an open session.
    pub fn into_session(self, id: SessionId) -> Session {
        Session {
            id,
            date: self.start_time.date(),
            title: self.title,
            duration_minutes: self.duration_minutes,
            start_time: self.start_time,
            end_time: None,
            rating: None,
            notes: None,
            learnings: None,
        }
    }
}

/// Optional reflection recorded when a session is completed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Completion {
    pub rating: Option<i32>,
    pub notes: Option<String>,
    pub learnings: Option<String>,
}

/// Session aggregate.
///
/// # Invariants
///
/// - `id` is assigned by the store and never changes
/// - `date` is the calendar date of `start_time`
/// - `duration_minutes >= 1`
/// - the session is open iff `end_time` is `None`; while open, `rating`,
///   `notes` and `learnings` are unset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    id: SessionId,
    date: NaiveDate,
    title: String,
    duration_minutes: i32,
    start_time: Timestamp,
    end_time: Option<Timestamp>,
    rating: Option<i32>,
    notes: Option<String>,
    learnings: Option<String>,
}

impl Session {
    /// Reconstitute a session from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: SessionId,
        date: NaiveDate,
        title: String,
        duration_minutes: i32,
        start_time: Timestamp,
        end_time: Option<Timestamp>,
        rating: Option<i32>,
        notes: Option<String>,
        learnings: Option<String>,
    ) -> Self {
        Self {
            id,
            date,
            title,
            duration_minutes,
            start_time,
            end_time,
            rating,
            notes,
            learnings,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Planned minutes while open, actual elapsed minutes once completed.
    pub fn duration_minutes(&self) -> i32 {
        self.duration_minutes
    }

    pub fn start_time(&self) -> &Timestamp {
        &self.start_time
    }

    pub fn end_time(&self) -> Option<&Timestamp> {
        self.end_time.as_ref()
    }

    pub fn rating(&self) -> Option<i32> {
        self.rating
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn learnings(&self) -> Option<&str> {
        self.learnings.as_deref()
    }

    /// True while the session has no recorded end time.
    pub fn is_open(&self) -> bool {
        self.end_time.is_none()
    }

    pub fn is_completed(&self) -> bool {
        !self.is_open()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Complete the session at `now`.
    ///
    /// Replaces the planned duration with the rounded elapsed minutes and
    /// records the reflection fields. Completing an already-completed
    /// session overwrites the previous completion.
    pub fn complete(&mut self, now: Timestamp, completion: Completion) {
        self.duration_minutes = elapsed_minutes(&self.start_time, &now);
        self.end_time = Some(now);
        self.rating = completion.rating;
        self.notes = completion.notes;
        self.learnings = completion.learnings;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn validate_title(title: &str) -> Result<(), DomainError> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("title", "Title cannot be empty"));
        }
        if trimmed.chars().count() > MAX_TITLE_LENGTH {
            return Err(DomainError::validation(
                "title",
                format!("Title must be {} characters or less", MAX_TITLE_LENGTH),
            ));
        }
        Ok(())
    }

    fn validate_planned_duration(duration_minutes: i32) -> Result<(), DomainError> {
        if duration_minutes < MIN_DURATION_MINUTES {
            return Err(DomainError::validation(
                "duration_minutes",
                format!("Duration must be at least {} minute", MIN_DURATION_MINUTES),
            ));
        }
        Ok(())
    }
}
