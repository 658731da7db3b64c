//! HTTP adapter for session endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CompleteSessionRequest, CreateSessionRequest, DailyStatsResponse, ErrorResponse,
    ListSessionsParams, MessageResponse, SessionResponse,
};
pub use handlers::{SessionApiError, SessionHandlers};
pub use routes::session_routes;
