use std::{net::SocketAddr, path::PathBuf, str::FromStr, time::Duration};

use serde::Deserialize;
use strum::AsRefStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreUriError {
    #[error("store uri has no scheme: {0}")]
    MissingScheme(String),

    #[error("unsupported store uri scheme: {0}")]
    UnsupportedScheme(String),

    #[error("sled store uri has an empty path")]
    EmptyPath,
}

/// Location of the todo document store.
///
/// `sled://<path>` opens an on-disk store, `memory://` a temporary one that is
/// removed once the store is closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreUri {
    Sled(PathBuf),
    Memory,
}

impl FromStr for StoreUri {
    type Err = StoreUriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (scheme, rest) = s
            .trim()
            .split_once("://")
            .ok_or_else(|| StoreUriError::MissingScheme(s.to_string()))?;

        match scheme {
            "sled" => {
                if rest.is_empty() {
                    return Err(StoreUriError::EmptyPath);
                }
                Ok(Self::Sled(PathBuf::from(rest)))
            }
            "memory" => Ok(Self::Memory),
            other => Err(StoreUriError::UnsupportedScheme(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// Raw value from config or `STORE_URI`, parsed once every source is merged.
    pub uri: Option<String>,
    pub open_timeout_sec: u64,
    #[serde(skip)]
    pub store_uri: Option<StoreUri>,
}

impl StorageSettings {
    pub fn open_timeout(&self) -> Duration {
        Duration::from_secs(self.open_timeout_sec)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub request_timeout_sec: u64,
    pub shutdown_grace_sec: u64,
    pub home_page: PathBuf,
}

#[derive(Debug, Deserialize, Copy, Clone, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StdoutFormat {
    Compact,
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub filter: String,
    pub stdout_format: StdoutFormat,
}
