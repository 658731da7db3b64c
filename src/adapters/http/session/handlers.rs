//! HTTP handlers for session endpoints.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, warn};

use crate::adapters::http::AppState;
use crate::application::handlers::session::{
    CompleteSessionCommand, CompleteSessionHandler, CreateSessionCommand, CreateSessionHandler,
    DeleteSessionCommand, DeleteSessionHandler, GetDailyStatsHandler, GetDailyStatsQuery,
    GetSessionHandler, GetSessionQuery, ListSessionsHandler, ListSessionsQuery,
};
use crate::domain::foundation::SessionId;
use crate::domain::session::SessionError;
use crate::ports::{Clock, SessionStore};

use super::dto::{
    CompleteSessionRequest, CreateSessionRequest, DailyStatsResponse, ErrorResponse,
    ListSessionsParams, MessageResponse, SessionResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SessionHandlers {
    create_handler: Arc<CreateSessionHandler>,
    complete_handler: Arc<CompleteSessionHandler>,
    get_handler: Arc<GetSessionHandler>,
    list_handler: Arc<ListSessionsHandler>,
    delete_handler: Arc<DeleteSessionHandler>,
    stats_handler: Arc<GetDailyStatsHandler>,
}

impl SessionHandlers {
    /// Wire every session handler to one store and clock.
    pub fn new(store: Arc<dyn SessionStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            create_handler: Arc::new(CreateSessionHandler::new(store.clone(), clock.clone())),
            complete_handler: Arc::new(CompleteSessionHandler::new(store.clone(), clock)),
            get_handler: Arc::new(GetSessionHandler::new(store.clone())),
            list_handler: Arc::new(ListSessionsHandler::new(store.clone())),
            delete_handler: Arc::new(DeleteSessionHandler::new(store.clone())),
            stats_handler: Arc::new(GetDailyStatsHandler::new(store)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/dates - Per-day stats over completed sessions
pub async fn list_dates(
    State(state): State<AppState>,
) -> Result<Json<Vec<DailyStatsResponse>>, SessionApiError> {
    let stats = state
        .sessions
        .stats_handler
        .handle(GetDailyStatsQuery)
        .await?;
    Ok(Json(stats.into_iter().map(Into::into).collect()))
}

/// GET /api/sessions?date=YYYY-MM-DD - List sessions, most recent first
pub async fn list_sessions(
    State(state): State<AppState>,
    params: Result<Query<ListSessionsParams>, QueryRejection>,
) -> Result<Json<Vec<SessionResponse>>, SessionApiError> {
    let Query(params) = params?;
    let date = params.parsed_date().map_err(|e| {
        SessionApiError::BadRequest(format!("Invalid date (expected YYYY-MM-DD): {}", e))
    })?;

    let sessions = state
        .sessions
        .list_handler
        .handle(ListSessionsQuery { date })
        .await?;
    Ok(Json(sessions.into_iter().map(Into::into).collect()))
}

/// GET /api/sessions/:id - Get one session
pub async fn get_session(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<SessionResponse>, SessionApiError> {
    let session_id = session_id(id)?;
    let session = state
        .sessions
        .get_handler
        .handle(GetSessionQuery { session_id })
        .await?;
    Ok(Json(session.into()))
}

/// POST /api/sessions - Start a new session
pub async fn create_session(
    State(state): State<AppState>,
    body: Result<Json<CreateSessionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SessionResponse>), SessionApiError> {
    let Json(req) = body?;
    let cmd = CreateSessionCommand {
        title: req.title,
        duration_minutes: req.duration_minutes,
    };

    let session = state.sessions.create_handler.handle(cmd).await?;
    Ok((StatusCode::CREATED, Json(session.into())))
}

/// POST /api/sessions/:id/complete - Finish a session with an optional reflection
pub async fn complete_session(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<CompleteSessionRequest>, JsonRejection>,
) -> Result<Json<SessionResponse>, SessionApiError> {
    let session_id = session_id(id)?;
    let Json(req) = body?;
    let cmd = CompleteSessionCommand {
        session_id,
        rating: req.rating,
        notes: req.notes,
        learnings: req.learnings,
    };

    let session = state.sessions.complete_handler.handle(cmd).await?;
    Ok(Json(session.into()))
}

/// DELETE /api/sessions/:id - Remove a session
pub async fn delete_session(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, SessionApiError> {
    let session_id = session_id(id)?;
    state
        .sessions
        .delete_handler
        .handle(DeleteSessionCommand { session_id })
        .await?;
    Ok(Json(MessageResponse::new("Deleted")))
}

fn session_id(id: Result<Path<i64>, PathRejection>) -> Result<SessionId, SessionApiError> {
    let Path(raw) = id?;
    Ok(SessionId::from_i64(raw))
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

/// Errors surfaced by the session endpoints.
#[derive(Debug)]
pub enum SessionApiError {
    /// Request could not be decoded (body, path or query).
    BadRequest(String),
    /// Failure reported by a session handler.
    Session(SessionError),
}

impl From<SessionError> for SessionApiError {
    fn from(err: SessionError) -> Self {
        SessionApiError::Session(err)
    }
}

impl From<JsonRejection> for SessionApiError {
    fn from(rejection: JsonRejection) -> Self {
        SessionApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for SessionApiError {
    fn from(rejection: PathRejection) -> Self {
        SessionApiError::BadRequest(format!("Invalid session ID: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for SessionApiError {
    fn from(rejection: QueryRejection) -> Self {
        SessionApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for SessionApiError {
    fn into_response(self) -> Response {
        match self {
            SessionApiError::BadRequest(message) => {
                warn!(%message, "Rejected malformed request");
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::bad_request(message))).into_response()
            }
            SessionApiError::Session(err) => handle_session_error(err),
        }
    }
}

fn handle_session_error(error: SessionError) -> Response {
    match error {
        SessionError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Session", &id.to_string())),
        )
            .into_response(),
        SessionError::ValidationFailed { field, message } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::validation(&field, message)),
        )
            .into_response(),
        SessionError::Infrastructure(msg) => {
            error!(error = %msg, "Session storage failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Internal server error")),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_error_not_found_maps_to_404() {
        let error = SessionError::NotFound(SessionId::from_i64(1));
        let response = handle_session_error(error);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn session_error_validation_failed_maps_to_400() {
        let error = SessionError::ValidationFailed {
            field: "title".to_string(),
            message: "Title cannot be empty".to_string(),
        };
        let response = handle_session_error(error);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn session_error_infrastructure_maps_to_500() {
        let error = SessionError::Infrastructure("disk full".to_string());
        let response = handle_session_error(error);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn bad_request_maps_to_400() {
        let response = SessionApiError::BadRequest("nope".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
