//! Error types for the bookshelf server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::response::{ApiResponse, ResponseStatus};

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing required field or invalid field relationship
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Request could not be decoded
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Post-write integrity check failed
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Envelope status: `fail` for client faults, `error` for server faults
    pub fn response_status(&self) -> ResponseStatus {
        match self {
            AppError::Internal(_) => ResponseStatus::Error,
            _ => ResponseStatus::Fail,
        }
    }

    /// Message sent back to the client
    pub fn message(&self) -> &str {
        match self {
            AppError::Validation(msg)
            | AppError::NotFound(msg)
            | AppError::BadRequest(msg)
            | AppError::Internal(msg) => msg,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal(msg) = &self {
            tracing::error!("Internal error: {}", msg);
        }

        let status = self.status_code();
        let body = Json(ApiResponse::<()>::with_message(
            self.response_status(),
            self.message(),
        ));

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
