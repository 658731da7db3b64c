//! Errors surfaced by session commands and queries.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ErrorSubject, SessionId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(SessionId),

    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    /// Storage or other failure the caller cannot fix
    #[error("Error: {0}")]
    Infrastructure(String),
}

impl SessionError {
    pub fn not_found(id: SessionId) -> Self {
        SessionError::NotFound(id)
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        SessionError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<DomainError> for SessionError {
    fn from(err: DomainError) -> Self {
        let rendered = err.to_string();
        let DomainError {
            code,
            message,
            subject,
        } = err;
        match (code, subject) {
            (_, Some(ErrorSubject::Session(id))) => SessionError::NotFound(id),
            (ErrorCode::ValidationFailed, Some(ErrorSubject::Field(field))) => {
                SessionError::validation(field, message)
            }
            (ErrorCode::ValidationFailed, None) => SessionError::validation("unknown", message),
            _ => SessionError::Infrastructure(rendered),
        }
    }
}
