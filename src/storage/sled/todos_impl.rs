use crate::storage::TodoId;
use crate::trace_err;

use super::error::SledStorageError;
use super::internal::{
    span_wrappers::{
        deserialize_in_span, get_value_in_transaction_with_span,
        insert_new_value_with_span, insert_value_in_transaction_with_span,
        remove_value_with_span, serialize_in_span,
    },
    Key, KeyPrefix, TreeScan,
};
use super::{BincodeConfig, FromBytesWithConfig, SledStorage, TodoRecord};
use super::{StorageError, Todo, TodoStorage, UpdateTodo};
use async_trait::async_trait;
use sled::{transaction::ConflictableTransactionResult, Tree};
use tracing::{info, info_span, instrument, Span};

#[async_trait]
impl TodoStorage for SledStorage {
    #[instrument(name = "SledStorage::get_all_todos", skip_all)]
    async fn get_all(&self) -> Result<Vec<Todo>, StorageError> {
        info!("get all todos");
        self.ensure_connected()?;

        let todos = info_span!("TreeScan::within::collect").in_scope(|| {
            trace_err!(
                TreeScan::within(&self.todo_tree, KeyPrefix::todo()).collect(
                    &self.bincode_config,
                    |_, bytes, config| Todo::try_from(TodoRecord::from_bytes(bytes, config)?),
                ),
                "failed to do tree scan to get todo-s"
            )
        })?;

        Ok(todos)
    }

    #[instrument(name = "SledStorage::insert_todo", skip_all)]
    async fn insert(&self, item: Todo) -> Result<TodoId, StorageError> {
        let todo_id = item.id;
        info!(todo_id = %todo_id, "insert todo");

        self.ensure_connected()?;

        let key = Key::todo(&todo_id);
        let encoded: Vec<u8> = trace_err!(
            serialize_in_span(&self.bincode_config, &TodoRecord::from(item)),
            "failed to bin encode todo"
        )?;

        trace_err!(
            insert_new_value_with_span(&key, &encoded, &self.todo_tree),
            "failed to write todo into storage"
        )?;

        Ok(todo_id)
    }

    #[instrument(name = "SledStorage::update_todo", skip_all)]
    async fn update(&self, todo_id: TodoId, patch: UpdateTodo) -> Result<u64, StorageError> {
        self.ensure_connected()?;

        // cloning tree should be cheap: struct Tree{inner: Arc<TreeInner>}
        let (todo_tree, bincode_config) = info_span!("Cloning tree and config")
            .in_scope(|| (self.todo_tree.clone(), self.bincode_config));

        let span = Span::current();
        tokio::task::spawn_blocking(move || {
            span.in_scope(|| update_todo(todo_id, patch, &todo_tree, &bincode_config))
        })
        .await?
    }

    #[instrument(name = "SledStorage::delete_todo", skip_all)]
    async fn delete(&self, todo_id: TodoId) -> Result<u64, StorageError> {
        info!(todo_id = %todo_id, "delete todo");

        self.ensure_connected()?;

        let key = Key::todo(&todo_id);
        let removed = trace_err!(
            remove_value_with_span(&key, &self.todo_tree),
            "failed to remove todo from storage"
        )?;

        Ok(u64::from(removed))
    }
}

#[instrument(name = "update_todo", skip_all)]
fn update_todo(
    todo_id: TodoId,
    patch: UpdateTodo,
    todo_tree: &Tree,
    bincode_config: &BincodeConfig,
) -> Result<u64, StorageError> {
    info!(todo_id = %todo_id, "update todo");

    let modified = todo_tree
        .transaction(|tx| -> ConflictableTransactionResult<u64, SledStorageError> {
            let key = Key::todo(&todo_id);
            let value = trace_err!(
                get_value_in_transaction_with_span(&key, tx),
                "failed to read todo from storage"
            )?;

            let Some(value) = value else {
                info!("no todo matched the id");
                return Ok(0);
            };

            let mut todo = trace_err!(
                deserialize_in_span::<TodoRecord>(bincode_config, &value)
                    .and_then(Todo::try_from),
                "failed to bin decode todo"
            )?;

            if !todo.apply(&patch) {
                info!("todo already has the requested values");
                return Ok(0);
            }

            let encoded = trace_err!(
                serialize_in_span(bincode_config, &TodoRecord::from(todo)),
                "failed to bin encode todo"
            )?;

            trace_err!(
                insert_value_in_transaction_with_span(&key, &encoded, tx),
                "failed to write todo into storage"
            )?;

            Ok(1)
        })
        .map_err(SledStorageError::from)?;

    Ok(modified)
}
