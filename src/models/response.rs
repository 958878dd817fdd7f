//! JSON response envelope shared by every book endpoint

use serde::Serialize;
use utoipa::ToSchema;

use super::book::{Book, BookSummary};

/// Outcome marker carried in every envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    /// Client-caused failure (validation, not found)
    Fail,
    /// Server-caused failure
    Error,
}

/// `{status, message?, data?}`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: ResponseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: Some(message.into()),
            data: Some(data),
        }
    }

    pub fn with_message(status: ResponseStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: Some(message.into()),
            data: None,
        }
    }
}

/// Envelope without a payload
pub type MessageResponse = ApiResponse<()>;

/// Data returned by a successful create
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookCreated {
    pub book_id: String,
}

/// Data returned by the list endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct BookList {
    pub books: Vec<BookSummary>,
}

/// Data returned by the detail endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct BookDetail {
    pub book: Book,
}
