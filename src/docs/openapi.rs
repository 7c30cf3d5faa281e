use utoipa::OpenApi;

use crate::handlers::types::{
    CreateTodo, CreatedResponse, DeleteResult, DeletedResponse, ErrorResponse, TodoItem,
    TodosResponse, UpdateTodo, UpdatedResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::home::home,
        crate::handlers::todo::get_all,
        crate::handlers::todo::add,
        crate::handlers::todo::update,
        crate::handlers::todo::delete,
    ),
    components(
        schemas(
            CreateTodo,
            UpdateTodo,
            TodoItem,
            TodosResponse,
            CreatedResponse,
            UpdatedResponse,
            DeleteResult,
            DeletedResponse,
            ErrorResponse
        ),
    ),
    tags(
        (name = "home", description = "Landing page"),
        (name = "todo", description = "Endpoints to create and manage todo items")
    ),
    info(
        title = "Todo API",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;
