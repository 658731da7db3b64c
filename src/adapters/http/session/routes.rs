//! HTTP routes for session endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use crate::adapters::http::AppState;

use super::handlers::{
    complete_session, create_session, delete_session, get_session, list_dates, list_sessions,
};

/// Creates the session router with all endpoints, to be nested under `/api`.
pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/dates", get(list_dates))
        .route("/sessions", get(list_sessions).post(create_session))
        .route("/sessions/:id", get(get_session).delete(delete_session))
        .route("/sessions/:id/complete", post(complete_session))
}
