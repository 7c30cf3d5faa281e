mod observability;
mod storage;

use std::time::Duration;

use crate::{config::StoreUriError, storage::SledStartupError};
use thiserror::Error;

pub use observability::init_tracing;
pub use storage::init_storage;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Store uri not configured: set {0} or storage.uri")]
    MissingStoreUri(&'static str),

    #[error("Invalid store uri")]
    InvalidStoreUri(#[from] StoreUriError),

    #[error("Failed to open sled storage")]
    OpenSledStorage(#[from] SledStartupError),

    #[error("Store did not open within {0:?}")]
    StoreUnreachable(Duration),

    #[error("Failed joining store open task")]
    JoinTask(#[from] tokio::task::JoinError),

    #[error("Failed to load configs")]
    LoadConfig(#[from] config::ConfigError),

    #[error("Failed to set log tracer")]
    SetLogTracer(#[from] tracing_log::log::SetLoggerError),

    #[error("Failed to set global tracing subscriber")]
    SetGlobalTracingSubscriber(#[from] tracing::subscriber::SetGlobalDefaultError),
}
