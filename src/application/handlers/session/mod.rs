//! Session command and query handlers.

mod complete_session;
mod create_session;
mod delete_session;
mod get_daily_stats;
mod get_session;
mod list_sessions;

pub use complete_session::{CompleteSessionCommand, CompleteSessionHandler};
pub use create_session::{CreateSessionCommand, CreateSessionHandler};
pub use delete_session::{DeleteSessionCommand, DeleteSessionHandler};
pub use get_daily_stats::{GetDailyStatsHandler, GetDailyStatsQuery};
pub use get_session::{GetSessionHandler, GetSessionQuery};
pub use list_sessions::{ListSessionsHandler, ListSessionsQuery};
