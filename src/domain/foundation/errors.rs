//! Error types for the domain layer.
//!
//! Ports and aggregates return [`DomainError`]; the application layer
//! narrows it into module errors such as `SessionError`.

use std::error::Error;
use std::fmt;

use super::SessionId;

/// Machine-readable error category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ValidationFailed,
    SessionNotFound,
    DatabaseError,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::SessionNotFound => "SESSION_NOT_FOUND",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the error is about, when that is more than the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorSubject {
    /// The request field that failed validation
    Field(String),
    /// The session that could not be found
    Session(SessionId),
}

#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub subject: Option<ErrorSubject>,
}

impl DomainError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            subject: None,
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            subject: Some(ErrorSubject::Field(field.into())),
            ..Self::new(ErrorCode::ValidationFailed, message)
        }
    }

    /// Wrap a storage driver error with what was being attempted.
    pub fn database(context: &str, err: impl fmt::Display) -> Self {
        Self::new(ErrorCode::DatabaseError, format!("{}: {}", context, err))
    }

    pub fn session_not_found(id: SessionId) -> Self {
        Self {
            subject: Some(ErrorSubject::Session(id)),
            ..Self::new(ErrorCode::SessionNotFound, format!("Session not found: {}", id))
        }
    }

    pub fn field(&self) -> Option<&str> {
        match &self.subject {
            Some(ErrorSubject::Field(field)) => Some(field),
            _ => None,
        }
    }

    pub fn session_id(&self) -> Option<SessionId> {
        match self.subject {
            Some(ErrorSubject::Session(id)) => Some(id),
            _ => None,
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_the_code() {
        let err = DomainError::new(ErrorCode::InternalError, "id space exhausted");
        assert_eq!(err.to_string(), "[INTERNAL_ERROR] id space exhausted");
    }

    #[test]
    fn validation_names_the_field() {
        let err = DomainError::validation("title", "Title cannot be empty");
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.field(), Some("title"));
        assert_eq!(err.session_id(), None);
    }

    #[test]
    fn database_message_keeps_driver_text() {
        let err = DomainError::database("Failed to insert session", "disk I/O error");
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.message, "Failed to insert session: disk I/O error");
        assert!(err.subject.is_none());
    }

    #[test]
    fn not_found_remembers_the_session() {
        let err = DomainError::session_not_found(SessionId::from_i64(12));
        assert_eq!(err.code, ErrorCode::SessionNotFound);
        assert_eq!(err.session_id(), Some(SessionId::from_i64(12)));
        assert_eq!(err.field(), None);
    }
}
