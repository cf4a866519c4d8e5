//! Server configuration from environment variables.

use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

/// Environment variable naming the network description file.
pub const NETWORK_FILE_VAR: &str = "TRAM_NETWORK_FILE";
/// Environment variable holding the listen address.
pub const BIND_ADDR_VAR: &str = "TRAM_BIND_ADDR";

const DEFAULT_NETWORK_FILE: &str = "TramsInfo.txt";
const DEFAULT_BIND_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 3000);

/// Errors from reading the configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var}={value:?} is not a socket address: {source}")]
    InvalidBindAddr {
        var: &'static str,
        value: String,
        source: AddrParseError,
    },
}

/// Settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Path of the network description file.
    pub network_file: PathBuf,
    /// Address to listen on.
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, falling back to defaults
    /// for unset or blank variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(path) = get(NETWORK_FILE_VAR) {
            config.network_file = PathBuf::from(path);
        }

        if let Some(value) = get(BIND_ADDR_VAR) {
            config.bind_addr = value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidBindAddr {
                    var: BIND_ADDR_VAR,
                    value,
                    source,
                })?;
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            network_file: PathBuf::from(DEFAULT_NETWORK_FILE),
            bind_addr: SocketAddr::from(DEFAULT_BIND_ADDR),
        }
    }
}
