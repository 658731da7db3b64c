//! CreateSessionHandler - Command handler for starting new sessions.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::session::{NewSession, Session, SessionError};
use crate::ports::{Clock, SessionStore};

/// Command to start a new session.
#[derive(Debug, Clone)]
pub struct CreateSessionCommand {
    pub title: String,
    pub duration_minutes: i32,
}

/// Handler for starting sessions.
///
/// The start time comes from the clock, never from the caller.
pub struct CreateSessionHandler {
    store: Arc<dyn SessionStore>,
    clock: Arc<dyn Clock>,
}

impl CreateSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn handle(&self, cmd: CreateSessionCommand) -> Result<Session, SessionError> {
        // 1. Validate input and stamp the start time
        let new_session = NewSession::new(cmd.title, cmd.duration_minutes, self.clock.now())
            .map_err(|e| {
                let err = SessionError::from(e);
                warn!(error = %err, "Rejected session creation");
                err
            })?;

        // 2. Persist; the store assigns the id
        let session = self.store.insert(&new_session).await?;

        info!(
            session_id = %session.id(),
            date = %session.date(),
            duration_minutes = session.duration_minutes(),
            "Session started"
        );

        Ok(session)
    }
}
