//! Book endpoints

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::{
        book::{BookPayload, BookQuery},
        response::{ApiResponse, BookCreated, BookDetail, BookList, MessageResponse, ResponseStatus},
    },
};

/// Turn axum's plain-text body rejection into an enveloped 400
fn payload_from(body: Result<Json<BookPayload>, JsonRejection>) -> AppResult<BookPayload> {
    body.map(|Json(payload)| payload)
        .map_err(|rejection| {
            AppError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
        })
}

/// Listing never fails: an undecodable query string means no filters
fn query_from(pairs: Result<Query<Vec<(String, String)>>, QueryRejection>) -> BookQuery {
    match pairs {
        Ok(Query(pairs)) => BookQuery::from_pairs(pairs),
        Err(rejection) => {
            tracing::warn!("Ignoring undecodable query string: {}", rejection.body_text());
            BookQuery::default()
        }
    }
}

/// Add a book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookPayload,
    responses(
        (status = 201, description = "Book added, envelope data carries the new bookId", body = BookCreated),
        (status = 400, description = "Missing name, readPage over pageCount or malformed body"),
        (status = 500, description = "Book could not be stored")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    body: Result<Json<BookPayload>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ApiResponse<BookCreated>>)> {
    let payload = payload_from(body)?;
    let book_id = state.services.bookshelf.create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            "Book added successfully",
            BookCreated { book_id },
        )),
    ))
}

/// List books, projected to id, name and publisher
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(BookQuery),
    responses(
        (status = 200, description = "Matching books in insertion order", body = BookList)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AppResult<Json<ApiResponse<BookList>>> {
    let query = query_from(pairs);
    let books = state.services.bookshelf.list(&query).await?;
    Ok(Json(ApiResponse::success(BookList { books })))
}

/// Get book details by ID
#[utoipa::path(
    get,
    path = "/books/{bookId}",
    tag = "books",
    params(
        ("bookId" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Full book record", body = BookDetail),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(book_id): Path<String>,
) -> AppResult<Json<ApiResponse<BookDetail>>> {
    let book = state.services.bookshelf.get_by_id(&book_id).await?;
    Ok(Json(ApiResponse::success(BookDetail { book })))
}

/// Replace a book's fields
#[utoipa::path(
    put,
    path = "/books/{bookId}",
    tag = "books",
    params(
        ("bookId" = String, Path, description = "Book ID")
    ),
    request_body = BookPayload,
    responses(
        (status = 200, description = "Book updated"),
        (status = 400, description = "Missing name, readPage over pageCount or malformed body"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(book_id): Path<String>,
    body: Result<Json<BookPayload>, JsonRejection>,
) -> AppResult<Json<MessageResponse>> {
    let payload = payload_from(body)?;
    state.services.bookshelf.update(&book_id, payload).await?;

    Ok(Json(MessageResponse::with_message(
        ResponseStatus::Success,
        "Book updated successfully",
    )))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{bookId}",
    tag = "books",
    params(
        ("bookId" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book deleted"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(book_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.services.bookshelf.delete(&book_id).await?;

    Ok(Json(MessageResponse::with_message(
        ResponseStatus::Success,
        "Book deleted successfully",
    )))
}
