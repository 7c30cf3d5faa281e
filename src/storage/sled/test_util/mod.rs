#![allow(dead_code)]
use std::sync::Arc;

use crate::{
    config::StoreUri,
    storage::{StoreConnection, Todo, TodoId, TodoStorage},
};
use chrono::{Duration, Utc};

use super::{internal::Key, SledStorage};

pub struct TestStorageBuilder {
    todos: Vec<Todo>,
    corrupted: Vec<TodoId>,
    storage: Arc<SledStorage>,
}

impl TestStorageBuilder {
    pub fn new() -> Self {
        let storage = Arc::new(SledStorage::open(&StoreUri::Memory).unwrap());
        Self {
            todos: Vec::new(),
            corrupted: Vec::new(),
            storage,
        }
    }

    pub fn with_todos(mut self, count: usize) -> Self {
        let now = Utc::now();
        self.todos = (0..count)
            .map(|i| {
                Todo::new(
                    TodoId::new(),
                    &format!("todo {}", i),
                    now - Duration::seconds((count - i) as i64),
                )
            })
            .collect();
        self
    }

    /// Stores a value under a valid todo key that does not decode as a todo.
    pub fn with_corrupted_record(mut self) -> Self {
        self.corrupted.push(TodoId::new());
        self
    }

    pub async fn build_todo(&self) -> Arc<dyn TodoStorage> {
        for todo in &self.todos {
            self.storage.insert(todo.clone()).await.unwrap();
        }
        for id in &self.corrupted {
            self.storage
                .todo_tree
                .insert(Key::todo(id).as_bytes(), &[0xff, 0xff, 0xff][..])
                .unwrap();
        }

        self.storage.clone() as Arc<dyn TodoStorage>
    }

    pub async fn build_connection(&self) -> Arc<dyn StoreConnection> {
        self.storage.clone() as Arc<dyn StoreConnection>
    }

    pub fn todos(&self) -> Vec<Todo> {
        self.todos.clone()
    }
}

impl Default for TestStorageBuilder {
    fn default() -> Self {
        Self::new()
    }
}
