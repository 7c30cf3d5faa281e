use crate::storage::StorageError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use strum::AsRefStr;
use thiserror::Error;

use super::types::ErrorResponse;

/// Store operation that failed. Decides the message and status of the error
/// envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum StoreOp {
    List,
    Insert,
    Update,
    Delete,
}

#[derive(Debug, Error, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum AppError {
    #[error("could not decode data")]
    Decode(String),

    #[error("{0}")]
    Validation(&'static str),

    #[error("The id is invalid")]
    InvalidId(String),

    #[error("{}", store_message(.op, .source))]
    Store {
        op: StoreOp,
        #[source]
        source: StorageError,
    },

    #[error("Could not load the landing page")]
    HomePage(#[source] std::io::Error),
}

fn store_message(op: &StoreOp, source: &StorageError) -> &'static str {
    match (op, source) {
        (StoreOp::List, StorageError::Corrupted(_)) => "Could not read the todo collection",
        (StoreOp::List, _) => "Could not fetch the todo collection",
        (StoreOp::Insert, _) => "Failed to insert data into database",
        (StoreOp::Update, _) => "Failed to update data in database",
        (StoreOp::Delete, _) => "an error occurred while deleting todo item",
    }
}

/// Renders an error with all of its sources, outermost first.
pub(crate) fn error_chain(error: &dyn std::error::Error) -> String {
    let mut detail = error.to_string();
    let mut source = error.source();
    while let Some(e) = source {
        detail.push_str(": ");
        detail.push_str(&e.to_string());
        source = e.source();
    }
    detail
}

impl AppError {
    pub(crate) fn store(op: StoreOp) -> impl FnOnce(StorageError) -> Self {
        move |source| Self::Store { op, source }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::Decode(_) | AppError::Validation(_) | AppError::InvalidId(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Store { op, source } => match (op, source) {
                (StoreOp::List, StorageError::Corrupted(_)) => StatusCode::INTERNAL_SERVER_ERROR,
                (StoreOp::List | StoreOp::Insert, _) => StatusCode::BAD_REQUEST,
                (StoreOp::Update | StoreOp::Delete, _) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            AppError::HomePage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(&self) -> Option<String> {
        match self {
            AppError::Decode(detail) | AppError::InvalidId(detail) => Some(detail.clone()),
            AppError::Validation(_) => None,
            AppError::Store { source, .. } => Some(error_chain(source)),
            AppError::HomePage(e) => Some(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        tracing::error!(error = ?self, error_kind = self.as_ref(), %status, "AppError");

        let body = Json(ErrorResponse {
            message: self.to_string(),
            error: self.detail(),
        });
        (status, body).into_response()
    }
}
