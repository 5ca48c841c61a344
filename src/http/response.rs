//! Error responses.
//!
//! # Design Decisions
//! - Every upstream or rendering failure maps to 500 Internal Server Error
//! - The cause is logged, never sent to the client

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::directory::DirectoryError;
use crate::views::RenderError;

/// Failure of a route handler.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Directory(e) => tracing::error!(error = %e, "Content service request failed"),
            AppError::Render(e) => tracing::error!(error = %e, "Rendering failed"),
        }
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
