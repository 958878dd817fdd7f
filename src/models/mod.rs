//! Data models for the bookshelf server

pub mod book;
pub mod response;

pub use book::{Book, BookPayload, BookQuery, BookSummary};
pub use response::{ApiResponse, MessageResponse, ResponseStatus};
