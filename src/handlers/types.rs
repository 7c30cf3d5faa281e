use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{error, instrument};
use utoipa::ToSchema;

use super::error::{error_chain, AppError};
use crate::storage::{Todo, TodoId};

#[derive(Debug, Default, Deserialize, ToSchema)]
pub(crate) struct CreateTodo {
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub(crate) struct UpdateTodo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// A todo item as it goes over the wire.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct TodoItem {
    pub id: String,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Todo> for TodoItem {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id.to_string(),
            title: todo.title,
            completed: todo.completed,
            created_at: todo.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct TodosResponse {
    pub message: String,
    pub data: Vec<TodoItem>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct CreatedResponse {
    pub message: String,
    #[serde(rename = "ID")]
    pub id: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct UpdatedResponse {
    pub message: String,
    /// Number of modified items.
    pub data: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
pub struct DeleteResult {
    #[serde(rename = "DeletedCount")]
    pub deleted_count: u64,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct DeletedResponse {
    pub message: String,
    pub data: DeleteResult,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// JSON request body, decoded whatever the request's content type. A `null`
/// body decodes as the default value.
#[derive(Debug)]
pub(crate) struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = AppError;

    #[instrument(name = "decode_json_body", skip_all)]
    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            error!(error = %e, "failed to read request body");
            AppError::Decode(e.body_text())
        })?;

        serde_json::from_slice::<Option<T>>(&bytes)
            .map(|body| JsonBody(body.unwrap_or_default()))
            .map_err(|e| {
                error!(error = %e, "failed to decode json data");
                AppError::Decode(e.to_string())
            })
    }
}

/// Todo id taken from the `{id}` path segment.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TodoIdPath(pub TodoId);

impl<S> FromRequestParts<S> for TodoIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    #[instrument(name = "parse_todo_id_from_path", skip_all)]
    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                error!(error = %e, "failed to extract id from path");
                AppError::InvalidId(e.body_text())
            })?;

        raw.parse::<TodoId>().map(TodoIdPath).map_err(|e| {
            error!(id = %raw, error = %e, "the id param is not a valid id");
            AppError::InvalidId(error_chain(&e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_item_field_names() {
        let todo = Todo::new(TodoId::new(), "buy milk", Utc::now());
        let value = serde_json::to_value(TodoItem::from(todo.clone())).unwrap();

        assert_eq!(value["id"], todo.id.to_string());
        assert_eq!(value["title"], "buy milk");
        assert_eq!(value["completed"], false);
        assert!(value["created_at"].is_string());
    }

    #[test]
    fn error_response_omits_missing_detail() {
        let body = serde_json::to_string(&ErrorResponse {
            message: "please add a title".to_string(),
            error: None,
        })
        .unwrap();
        assert_eq!(body, r#"{"message":"please add a title"}"#);
    }

    #[test]
    fn envelope_field_names() {
        let created = serde_json::to_value(CreatedResponse {
            message: "Todo created successfully".to_string(),
            id: "x".to_string(),
        })
        .unwrap();
        assert_eq!(created["ID"], "x");

        let deleted = serde_json::to_value(DeletedResponse {
            message: "item deleted successfully".to_string(),
            data: DeleteResult { deleted_count: 1 },
        })
        .unwrap();
        assert_eq!(deleted["data"]["DeletedCount"], 1);
    }

    #[test]
    fn missing_fields_default() {
        let create: CreateTodo = serde_json::from_str("{}").unwrap();
        assert!(create.title.is_empty());

        let update: UpdateTodo = serde_json::from_str(r#"{"title":"x"}"#).unwrap();
        assert_eq!(update.title, "x");
        assert!(!update.completed);
    }
}
