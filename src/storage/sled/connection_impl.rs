use std::sync::atomic::Ordering;

use super::internal::span_wrappers::flush_db_in_span;
use super::SledStorage;
use crate::{
    storage::{StorageError, StoreConnection},
    trace_err,
};
use async_trait::async_trait;
use tracing::{info, instrument, warn, Span};

#[async_trait]
impl StoreConnection for SledStorage {
    #[instrument(name = "SledStorage::disconnect", skip_all)]
    async fn disconnect(&self) -> Result<(), StorageError> {
        if !self.connected.swap(false, Ordering::AcqRel) {
            warn!("store already disconnected");
            return Ok(());
        }

        // cloning db should be cheap: it is a handle over shared state
        let db = self.db.clone();
        let span = Span::current();
        tokio::task::spawn_blocking(move || {
            span.in_scope(|| trace_err!(flush_db_in_span(&db), "failed to flush sled db"))
        })
        .await??;

        info!("store disconnected");
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Acquire)
    }
}
