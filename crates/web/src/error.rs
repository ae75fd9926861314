use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::views;

/// Application-level error type for HTTP handlers.
///
/// Content fetch failures never surface here; they are rendered as a
/// fallback inside a normal page. This covers failures of the site itself.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// No route matches the requested path.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, heading, message) = match &self {
            AppError::NotFound(path) => {
                tracing::debug!(%path, "No route for path");
                (
                    StatusCode::NOT_FOUND,
                    "Página não encontrada",
                    "The page you are looking for does not exist.",
                )
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Erro",
                    "An internal error occurred.",
                )
            }
        };

        (status, views::fallback::error_page(heading, message)).into_response()
    }
}
