//! Runtime configuration
//!
//! Everything is read from `FOCUS_SESSIONS__<SECTION>__<KEY>` environment
//! variables (a `.env` file is honoured in development). Every key has a
//! default, so an empty environment serves on `127.0.0.1:5001` against
//! `sqlite://sessions.db`.
//!
//! ```no_run
//! use focus_sessions::config::AppConfig;
//!
//! let config = AppConfig::load().expect("configuration");
//! config.validate().expect("valid configuration");
//! ```

mod database;
mod error;
mod server;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{LogFormat, LoggingConfig, ServerConfig};

use serde::Deserialize;

const ENV_PREFIX: &str = "FOCUS_SESSIONS";
const ENV_SEPARATOR: &str = "__";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Read the environment into typed sections.
    ///
    /// Fails only when a value cannot be parsed into its field's type;
    /// range checks live in [`AppConfig::validate`].
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let source = config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator(ENV_SEPARATOR)
            .separator(ENV_SEPARATOR);

        Ok(config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()?)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()
    }
}
