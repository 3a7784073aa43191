// ABOUTME: Configuration loading for the roster server.
// ABOUTME: Reads ROSTER_* environment variables with defaults suited to local use.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("ROSTER_BIND is not a valid socket address: {0}")]
    InvalidBind(String),
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct RosterConfig {
    pub home: PathBuf,
    pub bind: SocketAddr,
}

impl RosterConfig {
    /// Load configuration from environment variables with sensible defaults.
    ///
    /// Environment variables:
    /// - ROSTER_HOME: data directory (default: ~/.roster)
    /// - ROSTER_BIND: socket address to bind (default: 127.0.0.1:7001)
    pub fn from_env() -> Result<Self, ConfigError> {
        let home = std::env::var("ROSTER_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                std::env::var("HOME")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("/tmp"))
                    .join(".roster")
            });

        let bind_str =
            std::env::var("ROSTER_BIND").unwrap_or_else(|_| "127.0.0.1:7001".to_string());
        let bind: SocketAddr = bind_str
            .parse()
            .map_err(|_| ConfigError::InvalidBind(bind_str))?;

        Ok(Self { home, bind })
    }

    /// Path of the SQLite database file inside the data directory.
    pub fn db_path(&self) -> PathBuf {
        self.home.join("roster.db")
    }
}
