//! Server configuration from the environment.

use std::{path::PathBuf, time::Duration};

use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DATA_PATH: &str = "data/suicide_rates.csv";
pub const DEFAULT_SESSION_IDLE_SECS: u64 = 30 * 60;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid PORT value: {value:?}")]
    InvalidPort { value: String },
    #[error("Invalid SESSION_IDLE_SECS value: {value:?}")]
    InvalidSessionIdle { value: String },
}

/// Where to listen and which dataset to serve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub port: u16,
    /// Rate CSV, optionally gzip-compressed (`.gz`).
    pub data_path: PathBuf,
    /// How long a session with no gestures and no event stream lives.
    pub session_idle: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            port: DEFAULT_PORT,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            session_idle: Duration::from_secs(DEFAULT_SESSION_IDLE_SECS),
        }
    }
}

impl ServerConfig {
    /// Reads `BIND_ADDR`, `PORT`, `RATES_CSV`, and `SESSION_IDLE_SECS`,
    /// falling back to the defaults for any that are unset.
    ///
    /// # Errors
    ///
    /// * If `PORT` is set but is not a valid port number
    /// * If `SESSION_IDLE_SECS` is set but is not a positive whole number
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort { value })?,
            None => defaults.port,
        };

        let session_idle = match lookup("SESSION_IDLE_SECS") {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidSessionIdle { value }),
            },
            None => defaults.session_idle,
        };

        Ok(Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            port,
            data_path: lookup("RATES_CSV").map_or(defaults.data_path, PathBuf::from),
            session_idle,
        })
    }

    /// Replaces any field for which an override is given.
    #[must_use]
    pub fn with_overrides(
        mut self,
        bind_addr: Option<String>,
        port: Option<u16>,
        data_path: Option<PathBuf>,
    ) -> Self {
        if let Some(bind_addr) = bind_addr {
            self.bind_addr = bind_addr;
        }
        if let Some(port) = port {
            self.port = port;
        }
        if let Some(data_path) = data_path {
            self.data_path = data_path;
        }
        self
    }
}
