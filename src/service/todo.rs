use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument};

use crate::{
    handlers::{
        error::{AppError, StoreOp},
        UpdateTodo,
    },
    storage::{Todo, TodoId, TodoStorage},
};

pub struct ServiceTodoRef {
    storage: Arc<dyn TodoStorage>,
}

impl ServiceTodoRef {
    pub(crate) fn new(storage: Arc<dyn TodoStorage>) -> Self {
        Self { storage }
    }

    #[instrument(name = "Service::todo::get_all", skip_all)]
    pub(crate) async fn get_all(&self) -> Result<Vec<Todo>, AppError> {
        self.storage
            .get_all()
            .await
            .map_err(AppError::store(StoreOp::List))
    }

    #[instrument(name = "Service::todo::add", skip_all)]
    pub(crate) async fn add(&self, title: &str) -> Result<TodoId, AppError> {
        if title.is_empty() {
            info!("no title added to request body");
            return Err(AppError::Validation("please add a title"));
        }

        let todo = Todo::new(TodoId::new(), title, Utc::now());
        info!(todo_id = %todo.id, "add todo");

        self.storage
            .insert(todo)
            .await
            .map_err(AppError::store(StoreOp::Insert))
    }

    #[instrument(name = "Service::todo::update", skip_all, fields(completed = patch.completed))]
    pub(crate) async fn update(&self, id: TodoId, patch: &UpdateTodo) -> Result<u64, AppError> {
        if patch.title.is_empty() {
            info!("empty title in update request");
            return Err(AppError::Validation("Title cannot be empty"));
        }

        info!(todo_id = %id, "update todo");

        let modified = self
            .storage
            .update(id, patch.into())
            .await
            .map_err(AppError::store(StoreOp::Update))?;

        info!(modified, "updated todos");
        Ok(modified)
    }

    #[instrument(name = "Service::todo::delete", skip_all)]
    pub(crate) async fn delete(&self, id: TodoId) -> Result<u64, AppError> {
        info!(todo_id = %id, "delete todo");

        let deleted = self
            .storage
            .delete(id)
            .await
            .map_err(AppError::store(StoreOp::Delete))?;

        info!(deleted, "deleted todos");
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_util::TestStorageBuilder;

    #[tokio::test]
    async fn add_rejects_empty_title() {
        let builder = TestStorageBuilder::new();
        let service = ServiceTodoRef::new(builder.build_todo().await);

        let err = service.add("").await.unwrap_err();
        assert!(matches!(err, AppError::Validation("please add a title")));
        assert!(service.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_rejects_empty_title() {
        let builder = TestStorageBuilder::new().with_todos(1);
        let service = ServiceTodoRef::new(builder.build_todo().await);
        let id = builder.todos()[0].id;

        let patch = UpdateTodo {
            title: String::new(),
            completed: true,
        };
        let err = service.update(id, &patch).await.unwrap_err();
        assert!(matches!(err, AppError::Validation("Title cannot be empty")));
        assert_eq!(service.get_all().await.unwrap(), builder.todos());
    }

    #[tokio::test]
    async fn add_then_delete() {
        let builder = TestStorageBuilder::new();
        let service = ServiceTodoRef::new(builder.build_todo().await);

        let id = service.add("water plants").await.unwrap();
        let todos = service.get_all().await.unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id, id);
        assert!(!todos[0].completed);

        assert_eq!(service.delete(id).await.unwrap(), 1);
        assert_eq!(service.delete(id).await.unwrap(), 0);
    }
}
