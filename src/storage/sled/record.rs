use bincode::{Decode, Encode};
use chrono::DateTime;

use super::error::SledStorageError;
use crate::storage::{Todo, TodoId};

/// On-disk layout of a todo item. New layouts get a new variant so old
/// records keep decoding.
#[derive(Encode, Decode, Debug)]
pub(crate) enum TodoRecord {
    V1 {
        id: TodoId,
        title: String,
        completed: bool,
        created_at_micros: i64,
    },
}

impl TryFrom<TodoRecord> for Todo {
    type Error = SledStorageError;

    fn try_from(value: TodoRecord) -> Result<Self, Self::Error> {
        match value {
            TodoRecord::V1 {
                id,
                title,
                completed,
                created_at_micros,
            } => Ok(Self {
                id,
                title,
                completed,
                created_at: DateTime::from_timestamp_micros(created_at_micros)
                    .ok_or(SledStorageError::InvalidTimestamp(created_at_micros))?,
            }),
        }
    }
}

impl From<Todo> for TodoRecord {
    fn from(value: Todo) -> Self {
        Self::V1 {
            id: value.id,
            title: value.title,
            completed: value.completed,
            created_at_micros: value.created_at.timestamp_micros(),
        }
    }
}
