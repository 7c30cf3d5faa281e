mod error;
mod id;
mod sled;
mod todo;

#[cfg(feature = "integration_tests")]
pub use sled::test_util;
pub(crate) use sled::{error::SledStartupError, SledStorage};

use async_trait::async_trait;
pub use error::{SledStorageError, StorageError};
pub use id::TodoId;
pub use todo::{Todo, UpdateTodo};

#[async_trait]
pub trait TodoStorage: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Todo>, StorageError>;

    /// Inserts a new item. Fails if the id is already taken.
    async fn insert(&self, item: Todo) -> Result<TodoId, StorageError>;

    /// Returns the number of modified items: 0 when nothing matched `id` or
    /// the patch did not change any field.
    async fn update(&self, id: TodoId, patch: UpdateTodo) -> Result<u64, StorageError>;

    /// Returns the number of deleted items.
    async fn delete(&self, id: TodoId) -> Result<u64, StorageError>;
}

#[async_trait]
pub trait StoreConnection: Send + Sync {
    /// Flushes pending writes and refuses every later operation.
    async fn disconnect(&self) -> Result<(), StorageError>;

    fn is_connected(&self) -> bool;
}
