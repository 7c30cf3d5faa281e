use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    Extension,
};
use tracing::info;

use super::error::AppError;
use crate::Settings;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Landing page", body = String, content_type = "text/markdown"),
        (status = 500, description = "Landing page could not be read", body = super::types::ErrorResponse),
    ),
    tag = "home"
)]
#[tracing::instrument(name = "handlers::home", skip_all)]
pub(crate) async fn home(
    Extension(settings): Extension<Settings>,
) -> Result<impl IntoResponse, AppError> {
    let path = settings.home_page();

    let page = tokio::fs::read(path).await.map_err(|e| {
        tracing::error!(error = %e, path = ?path, "failed to read landing page");
        AppError::HomePage(e)
    })?;

    info!(bytes = page.len(), "serve landing page");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/markdown; charset=utf-8"),
            (header::CONTENT_DISPOSITION, "inline; filename=\"readme.md\""),
        ],
        page,
    ))
}
