//! HTTP adapters - REST API implementations.
//!
//! `app_router` assembles the session endpoints and the operational
//! endpoints behind tracing, CORS and timeout layers.

pub mod session;
mod system;

use axum::http::{header, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::ServerConfig;

pub use session::{session_routes, SessionHandlers};
pub use system::{health_routes, system_routes, ShutdownSignal};

/// Shared state for every route.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionHandlers,
    pub shutdown: ShutdownSignal,
}

impl AppState {
    pub fn new(sessions: SessionHandlers, shutdown: ShutdownSignal) -> Self {
        Self { sessions, shutdown }
    }
}

/// Build the full application router.
pub fn app_router(state: AppState, server: &ServerConfig) -> Router {
    Router::new()
        .nest("/api", session_routes().merge(system_routes()))
        .merge(health_routes())
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(std::time::Duration::from_secs(3600));

    let origins = server.cors_header_values();
    if origins.len() < server.cors_origins.len() {
        warn!("Ignoring CORS origins that are not valid header values");
    }

    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(origins)
    }
}
