//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (create, complete, delete) write through the store;
//! query handlers (get, list, daily stats) only read.

pub mod handlers;

pub use handlers::{
    CompleteSessionCommand, CompleteSessionHandler, CreateSessionCommand, CreateSessionHandler,
    DeleteSessionCommand, DeleteSessionHandler, GetDailyStatsHandler, GetDailyStatsQuery,
    GetSessionHandler, GetSessionQuery, ListSessionsHandler, ListSessionsQuery,
};
