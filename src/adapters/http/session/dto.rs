//! HTTP DTOs for session endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.
//! Field names are the wire contract.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::session::{DailyStats, Session};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to start a new session.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSessionRequest {
    pub title: String,
    pub duration_minutes: i32,
}

/// Request to complete a session. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompleteSessionRequest {
    #[serde(default)]
    pub rating: Option<i32>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub learnings: Option<String>,
}

/// Query parameters for listing sessions.
///
/// `date` stays a raw string so an empty value (`?date=`) can mean
/// "no filter" while a malformed one is rejected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListSessionsParams {
    #[serde(default)]
    pub date: Option<String>,
}

impl ListSessionsParams {
    /// Parse the `date` filter as `YYYY-MM-DD`.
    pub fn parsed_date(&self) -> Result<Option<NaiveDate>, chrono::ParseError> {
        match self.date.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d").map(Some),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Full session record as returned by every session endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionResponse {
    pub id: i64,
    pub date: String,
    pub title: String,
    pub duration_minutes: i32,
    pub start_time: String,
    pub end_time: Option<String>,
    pub rating: Option<i32>,
    pub notes: Option<String>,
    pub learnings: Option<String>,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self {
            id: session.id().as_i64(),
            date: session.date().format("%Y-%m-%d").to_string(),
            title: session.title().to_string(),
            duration_minutes: session.duration_minutes(),
            start_time: session.start_time().to_rfc3339(),
            end_time: session.end_time().map(|t| t.to_rfc3339()),
            rating: session.rating(),
            notes: session.notes().map(str::to_string),
            learnings: session.learnings().map(str::to_string),
        }
    }
}

/// One day of completed-session statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyStatsResponse {
    pub date: String,
    pub session_count: u32,
    pub total_minutes: i64,
}

impl From<DailyStats> for DailyStatsResponse {
    fn from(stats: DailyStats) -> Self {
        Self {
            date: stats.date.format("%Y-%m-%d").to_string(),
            session_count: stats.session_count,
            total_minutes: stats.total_minutes,
        }
    }
}

/// Plain acknowledgement body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self {
            code: "VALIDATION_FAILED".to_string(),
            message: message.into(),
            details: Some(serde_json::json!({ "field": field })),
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}
