use crate::{
    service::Service,
    storage::{SledStorage, StoreConnection, TodoStorage},
    Settings,
};
use std::sync::Arc;

use tracing::{info, instrument};

use super::StartupError;
use crate::utils::STORE_URI_KEY;

#[instrument(name = "init_storage", skip_all)]
pub async fn init_storage(settings: &Settings) -> Result<Service, StartupError> {
    let uri = settings
        .store_uri()
        .cloned()
        .ok_or(StartupError::MissingStoreUri(STORE_URI_KEY))?;
    let open_timeout = settings.storage.open_timeout();

    info!(uri = ?uri, ?open_timeout, "connecting to store");

    let open = tokio::task::spawn_blocking(move || SledStorage::open(&uri));
    let sled_storage = match tokio::time::timeout(open_timeout, open).await {
        Ok(joined) => Arc::new(joined??),
        Err(_) => {
            tracing::error!(?open_timeout, "store did not open in time");
            return Err(StartupError::StoreUnreachable(open_timeout));
        }
    };

    Ok(Service::new(
        sled_storage.clone() as Arc<dyn TodoStorage>,
        sled_storage as Arc<dyn StoreConnection>,
    ))
}
