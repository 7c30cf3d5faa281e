mod app;
mod config;
pub(crate) mod handlers;
mod init;
pub(crate) mod middleware;
mod server;
pub(crate) mod service;
pub(crate) mod storage;
pub(crate) mod utils;

mod docs;

pub use config::{Settings, StoreUri, StoreUriError};
pub use handlers::error::AppError;
pub use init::{init_tracing, StartupError};
pub use server::{serve, ShutdownError};
pub use service::Service;

use axum::Router;

#[cfg(feature = "integration_tests")]
pub use app::build_app;

#[cfg(feature = "integration_tests")]
pub use init::init_storage;

#[cfg(feature = "integration_tests")]
pub use storage::{StorageError, Todo, TodoId};

#[cfg(feature = "integration_tests")]
pub use storage::test_util::TestStorageBuilder;

#[cfg(feature = "integration_tests")]
pub use handlers::types::{
    CreatedResponse, DeleteResult, DeletedResponse, ErrorResponse, TodoItem, TodosResponse,
    UpdatedResponse,
};

use tracing::{info, instrument};

#[instrument(name = "init_app", skip_all)]
pub async fn init_app(settings: Settings) -> Result<(Router, Service), StartupError> {
    info!(settings = ?settings, "init_app with settings");

    let service = init::init_storage(&settings).await?;

    Ok((app::build_app(service.clone(), settings), service))
}
