use crate::config::Settings;
use crate::docs::openapi::ApiDoc;
use crate::service::Service;
use crate::{handlers, middleware::trace_root::trace_root};
use axum::{
    http::StatusCode,
    middleware::from_fn,
    routing::{get, put},
    Extension, Router,
};

use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::instrument;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

fn todo_routes() -> OpenApiRouter<Service> {
    OpenApiRouter::new()
        .route(
            "/todo",
            get(handlers::todo::get_all).post(handlers::todo::add),
        )
        .route(
            "/todo/",
            get(handlers::todo::get_all).post(handlers::todo::add),
        )
        .route(
            "/todo/{id}",
            put(handlers::todo::update).delete(handlers::todo::delete),
        )
}

#[instrument(name = "build_app", skip_all)]
pub fn build_app(service: Service, settings: Settings) -> Router {
    let request_timeout = settings.request_timeout();

    let app_router = OpenApiRouter::new()
        .route("/", get(handlers::home::home))
        .merge(todo_routes())
        .layer(from_fn(trace_root))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(Extension(settings))
        .with_state(service);

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(app_router)
        .split_for_parts();

    router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
}
