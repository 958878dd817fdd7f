//! Bookshelf service: validation, id generation and record lifecycle

use chrono::Utc;
use rand::{distributions::Alphanumeric, Rng};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookPayload, BookQuery, BookSummary, BOOK_ID_LEN},
    repository::Repository,
};

/// Mutation being validated; selects the client-facing message prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookAction {
    Add,
    Update,
}

impl BookAction {
    fn failure_prefix(self) -> &'static str {
        match self {
            BookAction::Add => "Failed to add book.",
            BookAction::Update => "Failed to update book.",
        }
    }
}

#[derive(Clone)]
pub struct BookshelfService {
    repository: Repository,
}

impl BookshelfService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create a book and return its generated ID
    pub async fn create(&self, payload: BookPayload) -> AppResult<String> {
        validate(&payload, BookAction::Add)?;

        let id = generate_book_id();
        let book = Book::new(id.clone(), payload, Utc::now());
        self.repository.books.insert(book).await;

        if !self.repository.books.exists(&id).await {
            return Err(AppError::Internal("Failed to add book".to_string()));
        }

        tracing::info!(book_id = %id, "Book added");
        Ok(id)
    }

    /// List books matching the query filters
    pub async fn list(&self, query: &BookQuery) -> AppResult<Vec<BookSummary>> {
        let books = self.repository.books.list(query).await;
        tracing::debug!(?query, count = books.len(), "Books listed");
        Ok(books)
    }

    /// Get a book by ID
    pub async fn get_by_id(&self, id: &str) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await.ok_or_else(|| {
            tracing::warn!(book_id = %id, "Book not found");
            AppError::NotFound("Book not found".to_string())
        })
    }

    /// Replace a book's fields. Validation failures take precedence over an unknown ID.
    pub async fn update(&self, id: &str, payload: BookPayload) -> AppResult<()> {
        validate(&payload, BookAction::Update)?;

        if !self.repository.books.update(id, payload, Utc::now()).await {
            tracing::warn!(book_id = %id, "Update of unknown book");
            return Err(AppError::NotFound(
                "Failed to update book. Id not found".to_string(),
            ));
        }

        tracing::info!(book_id = %id, "Book updated");
        Ok(())
    }

    /// Delete a book by ID
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        if !self.repository.books.delete(id).await {
            tracing::warn!(book_id = %id, "Delete of unknown book");
            return Err(AppError::NotFound(
                "Failed to delete book. Id not found".to_string(),
            ));
        }

        tracing::info!(book_id = %id, "Book deleted");
        Ok(())
    }

    /// Number of stored books
    pub async fn count(&self) -> usize {
        self.repository.books.count().await
    }
}

/// Check the name first, then the page relationship
pub fn validate(payload: &BookPayload, action: BookAction) -> AppResult<()> {
    let prefix = action.failure_prefix();

    if !payload.has_name() {
        tracing::warn!(?action, "Rejected book without a name");
        return Err(AppError::Validation(format!(
            "{} Please provide the book name",
            prefix
        )));
    }

    if payload.read_page > payload.page_count {
        tracing::warn!(
            ?action,
            read_page = payload.read_page,
            page_count = payload.page_count,
            "Rejected book with readPage over pageCount"
        );
        return Err(AppError::Validation(format!(
            "{} readPage must not be greater than pageCount",
            prefix
        )));
    }

    Ok(())
}

/// Random 16-character alphanumeric token
pub fn generate_book_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(BOOK_ID_LEN)
        .map(char::from)
        .collect()
}
