//! Operational endpoints: health probe and remote shutdown.

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::sync::watch;
use tracing::info;

use super::AppState;

/// One-shot trigger that asks the server to stop accepting connections.
///
/// Cloned into the router state; the serve loop awaits [`ShutdownSignal::triggered`].
#[derive(Clone, Debug)]
pub struct ShutdownSignal {
    tx: Arc<watch::Sender<bool>>,
}

impl ShutdownSignal {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Request shutdown. Repeated calls are harmless.
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_triggered(&self) -> bool {
        *self.tx.borrow()
    }

    /// Resolves once [`ShutdownSignal::trigger`] has been called.
    pub async fn triggered(&self) {
        let mut rx = self.tx.subscribe();
        loop {
            let fired = *rx.borrow_and_update();
            if fired || rx.changed().await.is_err() {
                return;
            }
        }
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// GET /health
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// POST /api/shutdown - Reply, then stop gracefully
async fn shutdown(State(state): State<AppState>) -> &'static str {
    info!("Shutdown requested over HTTP");
    state.shutdown.trigger();
    "Server shutting down..."
}

/// Liveness probe, mounted at the root.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// Operational API routes, to be nested under `/api`.
pub fn system_routes() -> Router<AppState> {
    Router::new().route("/shutdown", post(shutdown))
}
