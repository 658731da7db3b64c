//! CompleteSessionHandler - Command handler for finishing a session.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::SessionId;
use crate::domain::session::{Completion, Session, SessionError};
use crate::ports::{Clock, SessionStore};

/// Command to complete a session with an optional reflection.
#[derive(Debug, Clone)]
pub struct CompleteSessionCommand {
    pub session_id: SessionId,
    pub rating: Option<i32>,
    pub notes: Option<String>,
    pub learnings: Option<String>,
}

/// Handler for completing sessions.
///
/// The recorded duration becomes the elapsed time between start and the
/// clock's `now`, rounded to whole minutes. Completing twice overwrites
/// the earlier completion.
pub struct CompleteSessionHandler {
    store: Arc<dyn SessionStore>,
    clock: Arc<dyn Clock>,
}

impl CompleteSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn handle(&self, cmd: CompleteSessionCommand) -> Result<Session, SessionError> {
        let mut session = self
            .store
            .get(cmd.session_id)
            .await?
            .ok_or_else(|| SessionError::not_found(cmd.session_id))?;

        let recompleted = session.is_completed();
        session.complete(
            self.clock.now(),
            Completion {
                rating: cmd.rating,
                notes: cmd.notes,
                learnings: cmd.learnings,
            },
        );

        self.store.update(&session).await?;

        info!(
            session_id = %session.id(),
            duration_minutes = session.duration_minutes(),
            recompleted,
            "Session completed"
        );

        Ok(session)
    }
}
