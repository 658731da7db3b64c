//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `sqlite` - Durable session store
//! - `memory` - In-memory session store for tests and local runs
//! - `clock` - System and manual clocks
//! - `http` - REST API

pub mod clock;
pub mod http;
pub mod memory;
pub mod sqlite;

pub use clock::{ManualClock, SystemClock};
pub use memory::InMemorySessionStore;
pub use sqlite::SqliteSessionStore;
