//! Error types for topshelf-ui
//!
//! Handler errors render as HTML error pages since every route in this
//! service is server-rendered.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::clients::ClientError;

/// Handler-facing error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Invalid request (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Upstream catalog service failure (502)
    #[error("External service error: {0}")]
    External(#[from] ClientError),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// topshelf-common error
    #[error("Common error: {0}")]
    Common(#[from] topshelf_common::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, heading) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "Not Found"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "Bad Request"),
            ApiError::External(_) => (StatusCode::BAD_GATEWAY, "External Service Error"),
            ApiError::Internal(_) | ApiError::Database(_) | ApiError::Common(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = crate::api::render::error_page(heading, &self.to_string());
        (status, Html(body)).into_response()
    }
}

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;
