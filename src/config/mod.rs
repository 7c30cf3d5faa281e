pub(crate) mod types;

use std::{net::SocketAddr, path::Path, time::Duration};

use config::{Config, Environment, File};
use serde::Deserialize;
pub(crate) use types::{LoggingConfig, ServerConfig, StdoutFormat, StorageSettings};
pub use types::{StoreUri, StoreUriError};

use crate::{init::StartupError, trace_err, utils::STORE_URI_KEY};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub(crate) storage: StorageSettings,
    pub(crate) server: ServerConfig,
    pub(crate) logging: LoggingConfig,
}

impl Settings {
    pub fn new() -> Result<Self, StartupError> {
        dotenv::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or("development".into());

        Settings::from_file(&run_mode)
    }

    pub fn from_file(file_name: &str) -> Result<Self, StartupError> {
        let mut builder = Config::builder()
            .add_source(File::with_name("config/default"))
            .add_source(File::with_name(&format!("config/{file_name}")).required(false))
            .add_source(Environment::with_prefix("APP").separator("__"));

        if let Ok(raw_uri) = std::env::var(STORE_URI_KEY) {
            builder = builder.set_override("storage.uri", raw_uri)?;
        }

        let mut settings: Settings = trace_err!(
            builder.build()?.try_deserialize(),
            "failed to build app settings"
        )?;

        let raw_uri = settings
            .storage
            .uri
            .as_deref()
            .ok_or(StartupError::MissingStoreUri(STORE_URI_KEY))?;
        settings.storage.store_uri = Some(trace_err!(
            raw_uri.parse::<StoreUri>(),
            "invalid store uri"
        )?);

        Ok(settings)
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server.addr
    }

    pub fn store_uri(&self) -> Option<&StoreUri> {
        self.storage.store_uri.as_ref()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.server.request_timeout_sec)
    }

    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.server.shutdown_grace_sec)
    }

    pub fn home_page(&self) -> &Path {
        &self.server.home_page
    }

    #[cfg(feature = "integration_tests")]
    pub fn with_home_page(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.server.home_page = path.into();
        self
    }
}
