pub(crate) mod todo;

use std::sync::Arc;

use crate::storage::{StorageError, StoreConnection, TodoStorage};
use todo::ServiceTodoRef;
use tracing::instrument;

/// Handles shared by every request. Built once at startup and handed to the
/// router as state.
#[derive(Clone)]
pub struct Service {
    todo_storage: Arc<dyn TodoStorage>,
    connection: Arc<dyn StoreConnection>,
}

impl Service {
    #[instrument(name = "Service::new", skip_all)]
    pub fn new(todo_storage: Arc<dyn TodoStorage>, connection: Arc<dyn StoreConnection>) -> Self {
        Self {
            todo_storage,
            connection,
        }
    }

    pub fn todo(&self) -> ServiceTodoRef {
        ServiceTodoRef::new(self.todo_storage.clone())
    }

    #[instrument(name = "Service::disconnect", skip_all)]
    pub async fn disconnect(&self) -> Result<(), StorageError> {
        self.connection.disconnect().await
    }

    pub fn is_connected(&self) -> bool {
        self.connection.is_connected()
    }
}
