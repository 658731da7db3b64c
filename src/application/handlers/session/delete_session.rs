//! DeleteSessionHandler - Command handler for removing a session.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::SessionId;
use crate::domain::session::SessionError;
use crate::ports::SessionStore;

/// Command to delete a session.
#[derive(Debug, Clone, Copy)]
pub struct DeleteSessionCommand {
    pub session_id: SessionId,
}

/// Handler for deleting sessions.
pub struct DeleteSessionHandler {
    store: Arc<dyn SessionStore>,
}

impl DeleteSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: DeleteSessionCommand) -> Result<(), SessionError> {
        self.store.delete(cmd.session_id).await?;
        info!(session_id = %cmd.session_id, "Session deleted");
        Ok(())
    }
}
