//! GetSessionHandler - Query handler for retrieving one session.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::SessionId;
use crate::domain::session::{Session, SessionError};
use crate::ports::SessionStore;

/// Query to get a session by ID.
#[derive(Debug, Clone, Copy)]
pub struct GetSessionQuery {
    pub session_id: SessionId,
}

/// Handler for retrieving session details.
pub struct GetSessionHandler {
    store: Arc<dyn SessionStore>,
}

impl GetSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetSessionQuery) -> Result<Session, SessionError> {
        debug!(session_id = %query.session_id, "Fetching session");

        self.store
            .get(query.session_id)
            .await?
            .ok_or_else(|| SessionError::not_found(query.session_id))
    }
}
