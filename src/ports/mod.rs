//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SessionStore` - Durable collection of sessions
//! - `Clock` - Server time

mod clock;
mod session_store;

pub use clock::Clock;
pub use session_store::SessionStore;
