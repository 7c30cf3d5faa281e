use super::error::AppError;
use super::types::*;
use crate::{handlers::Service, utils::RootSpan};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension, Json};
use tracing::info;

#[utoipa::path(
    get,
    path = "/todo/",
    responses(
        (status = 200, description = "List all todos", body = TodosResponse),
        (status = 400, description = "Store query failed", body = ErrorResponse),
        (status = 500, description = "Stored todos could not be read", body = ErrorResponse),
    ),
    tag = "todo"
)]
#[tracing::instrument(name = "handlers::todo::get_all", skip_all)]
pub(crate) async fn get_all(State(service): State<Service>) -> Result<impl IntoResponse, AppError> {
    let todos = service.todo().get_all().await?;

    info!("Get {} ToDos", todos.len());

    Ok(Json(TodosResponse {
        message: "All todos retrieved".to_string(),
        data: todos.into_iter().map(TodoItem::from).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/todo/",
    request_body(
        content = CreateTodo,
        description = "New ToDo item",
        content_type = "application/json"
    ),
    responses(
        (status = 201, description = "ToDo created", body = CreatedResponse),
        (status = 400, description = "Malformed body, empty title or failed insert", body = ErrorResponse),
    ),
    tag = "todo"
)]
#[tracing::instrument(name = "handlers::todo::post", skip_all)]
pub(crate) async fn add(
    State(service): State<Service>,
    Extension(root_span): Extension<RootSpan>,
    JsonBody(input): JsonBody<CreateTodo>,
) -> Result<impl IntoResponse, AppError> {
    match service.todo().add(&input.title).await {
        Ok(id) => {
            root_span.record().todo_id(&id);
            Ok((
                StatusCode::CREATED,
                Json(CreatedResponse {
                    message: "Todo created successfully".to_string(),
                    id: id.to_string(),
                }),
            ))
        }
        Err(e) => {
            tracing::error!(err = ?e, "failed to add new ToDo");
            Err(e)
        }
    }
}

#[utoipa::path(
    put,
    path = "/todo/{id}",
    params(
        ("id" = String, Path, description = "ToDo ID")
    ),
    request_body(
        content = UpdateTodo,
        description = "New title and completion state",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Number of modified todos", body = UpdatedResponse),
        (status = 400, description = "Invalid id, malformed body or empty title", body = ErrorResponse),
        (status = 500, description = "Store update failed", body = ErrorResponse),
    ),
    tag = "todo"
)]
#[tracing::instrument(name = "handlers::todo::update", skip_all)]
pub(crate) async fn update(
    State(service): State<Service>,
    Extension(root_span): Extension<RootSpan>,
    TodoIdPath(id): TodoIdPath,
    JsonBody(input): JsonBody<UpdateTodo>,
) -> Result<impl IntoResponse, AppError> {
    root_span.record().todo_id(&id);

    let modified = service.todo().update(id, &input).await?;

    Ok(Json(UpdatedResponse {
        message: "Todo updated successfully".to_string(),
        data: modified,
    }))
}

#[utoipa::path(
    delete,
    path = "/todo/{id}",
    params(
        ("id" = String, Path, description = "ToDo ID")
    ),
    responses(
        (status = 200, description = "Number of deleted todos", body = DeletedResponse),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 500, description = "Store delete failed", body = ErrorResponse),
    ),
    tag = "todo"
)]
#[tracing::instrument(name = "handlers::todo::delete", skip_all)]
pub(crate) async fn delete(
    State(service): State<Service>,
    Extension(root_span): Extension<RootSpan>,
    TodoIdPath(id): TodoIdPath,
) -> Result<impl IntoResponse, AppError> {
    root_span.record().todo_id(&id);

    let deleted_count = service.todo().delete(id).await?;

    Ok(Json(DeletedResponse {
        message: "item deleted successfully".to_string(),
        data: DeleteResult { deleted_count },
    }))
}
