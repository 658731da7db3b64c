//! SQLite connection settings

use std::time::Duration;

use serde::Deserialize;

use super::error::{check_range, ValidationError};

/// How to reach the session database.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `sqlite:` URL; the file is created on first use
    pub url: String,
    pub min_connections: u32,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    /// How long a connection waits on a locked database before failing
    pub busy_timeout_ms: u64,
    /// Apply embedded migrations at startup
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://sessions.db".to_string(),
            min_connections: 1,
            max_connections: 5,
            acquire_timeout_secs: 30,
            busy_timeout_ms: 5_000,
            run_migrations: true,
        }
    }
}

impl DatabaseConfig {
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.url.starts_with("sqlite:") {
            return Err(ValidationError::UnsupportedDatabaseUrl(self.url.clone()));
        }
        check_range("database.max_connections", u64::from(self.max_connections), 1, 100)?;
        if self.min_connections > self.max_connections {
            return Err(ValidationError::PoolBounds {
                min: self.min_connections,
                max: self.max_connections,
            });
        }
        check_range("database.acquire_timeout_secs", self.acquire_timeout_secs, 1, 300)?;
        Ok(())
    }
}
