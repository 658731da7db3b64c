//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod session;

pub use session::{
    CompleteSessionCommand, CompleteSessionHandler, CreateSessionCommand, CreateSessionHandler,
    DeleteSessionCommand, DeleteSessionHandler, GetDailyStatsHandler, GetDailyStatsQuery,
    GetSessionHandler, GetSessionQuery, ListSessionsHandler, ListSessionsQuery,
};
