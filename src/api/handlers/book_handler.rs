//! Book resource handlers.

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::parse_id;
use crate::api::extractors::JsonBody;
use crate::api::AppState;
use crate::domain::{BookData, BookPatch};
use crate::errors::AppResult;
use crate::types::MessageResponse;

/// Book creation request. Unset fields take zero values.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateBookRequest {
    /// Book title
    #[schema(example = "jalan jalan")]
    pub title: String,
    /// Publishing house
    #[schema(example = "gramed")]
    pub publisher: String,
    /// Book author
    #[schema(example = "ahmad")]
    pub author: String,
}

/// Partial book update request. Omitted fields are left unchanged.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateBookRequest {
    /// New title
    pub title: Option<String>,
    /// New publisher
    pub publisher: Option<String>,
    /// New author
    pub author: Option<String>,
}

/// List response for books
#[derive(Debug, Serialize, ToSchema)]
pub struct BookListResponse {
    /// Operation outcome literal
    #[schema(example = "success get all books")]
    pub message: String,
    /// All active books
    pub books: Vec<BookData>,
}

/// Detail response for a single book.
///
/// A missing row is still a 200 with a `null` book.
#[derive(Debug, Serialize, ToSchema)]
pub struct BookDetailResponse {
    /// Operation outcome literal
    #[schema(example = "success get book by id")]
    pub message: String,
    /// The matching active book, or `null` when none exists
    pub book: Option<BookData>,
}

/// List all active books
#[utoipa::path(
    get,
    path = "/v1/books",
    tag = "Books",
    responses(
        (status = 200, description = "All active books", body = BookListResponse),
        (status = 400, description = "Store error")
    )
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<BookListResponse>> {
    let books = state.book_service.list_books().await?;

    Ok(Json(BookListResponse {
        message: "success get all books".to_string(),
        books: books.into_iter().map(BookData::from).collect(),
    }))
}

/// Get a book by id
#[utoipa::path(
    get,
    path = "/v1/books/{id}",
    tag = "Books",
    params(("id" = String, Path, description = "Book ID (non-negative integer)")),
    responses(
        (status = 200, description = "Book by id, null when no row matches", body = BookDetailResponse),
        (status = 400, description = "Id is not a non-negative integer")
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<BookDetailResponse>> {
    let id = parse_id(&id)?;
    let book = state.book_service.get_book(id).await?;

    Ok(Json(BookDetailResponse {
        message: "success get book by id".to_string(),
        book: book.map(BookData::from),
    }))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/v1/books",
    tag = "Books",
    security(("bearer_auth" = [])),
    request_body = CreateBookRequest,
    responses(
        (status = 200, description = "Book created", body = MessageResponse),
        (status = 400, description = "Malformed body or store error"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateBookRequest>,
) -> AppResult<Json<MessageResponse>> {
    state
        .book_service
        .create_book(payload.title, payload.publisher, payload.author)
        .await?;

    Ok(Json(MessageResponse::new("success create new books")))
}

/// Update a book by id (partial merge)
#[utoipa::path(
    put,
    path = "/v1/books/{id}",
    tag = "Books",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Book ID (non-negative integer)")),
    request_body = UpdateBookRequest,
    responses(
        (status = 200, description = "Update applied; unknown ids succeed with zero rows affected", body = MessageResponse),
        (status = 400, description = "Malformed id/body or store error"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UpdateBookRequest>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_id(&id)?;

    let patch = BookPatch {
        title: payload.title,
        publisher: payload.publisher,
        author: payload.author,
    };
    state.book_service.update_book(id, patch).await?;

    Ok(Json(MessageResponse::new("success updated book by id")))
}

/// Soft delete a book by id
#[utoipa::path(
    delete,
    path = "/v1/books/{id}",
    tag = "Books",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Book ID (non-negative integer)")),
    responses(
        (status = 200, description = "Delete applied (idempotent)", body = MessageResponse),
        (status = 400, description = "Malformed id or store error"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_id(&id)?;
    state.book_service.delete_book(id).await?;

    Ok(Json(MessageResponse::new("success deleted book by id")))
}
