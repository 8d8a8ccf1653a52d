//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use akkad_deck::DeckConfig;

use crate::error::AppError;

/// Runtime configuration for the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Interface to bind (`HOST`, default `0.0.0.0`).
    pub host: String,
    /// Port to bind (`PORT`, default `3000`).
    pub port: u16,
    /// Directory holding the persisted deck (`AKKAD_STATE_DIR`, default `./state`).
    pub state_dir: PathBuf,
    /// Card catalog file (`AKKAD_CATALOG`, required).
    pub catalog_path: PathBuf,
    /// Lock retry cap override (`AKKAD_LOCK_ATTEMPTS`).
    pub lock_attempts: Option<usize>,
}

impl AppConfig {
    /// Reads the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is missing or invalid.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is missing or invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_owned());
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
            None => 3000,
        };
        let state_dir = lookup("AKKAD_STATE_DIR").map_or_else(|| PathBuf::from("./state"), PathBuf::from);
        let catalog_path = lookup("AKKAD_CATALOG")
            .map(PathBuf::from)
            .ok_or_else(|| AppError::Config("AKKAD_CATALOG environment variable must be set".to_owned()))?;
        let lock_attempts = match lookup("AKKAD_LOCK_ATTEMPTS") {
            Some(raw) => Some(raw.parse().map_err(|e| {
                AppError::Config(format!("AKKAD_LOCK_ATTEMPTS must be a positive integer: {e}"))
            })?),
            None => None,
        };
        if lock_attempts == Some(0) {
            return Err(AppError::Config(
                "AKKAD_LOCK_ATTEMPTS must be a positive integer".to_owned(),
            ));
        }
        Ok(Self {
            host,
            port,
            state_dir,
            catalog_path,
            lock_attempts,
        })
    }

    /// Deck settings derived from this configuration.
    #[must_use]
    pub fn deck_config(&self) -> DeckConfig {
        let config = DeckConfig::default();
        match self.lock_attempts {
            Some(attempts) => config.with_lock_attempts(attempts),
            None => config,
        }
    }

    /// Address to listen on.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `host` and `port` do not form a valid
    /// socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }
}
