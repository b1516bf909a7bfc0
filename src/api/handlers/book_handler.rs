//! Book handlers.
//!
//! Every route here sits behind the auth middleware; the owner of each
//! operation is always the authenticated caller, never a body field.

use axum::{extract::State, response::Json, routing::get, Extension, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::{PathId, ValidatedJson};
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::{Book, BookContent, BookContentSummary, BookInput};
use crate::errors::AppResult;
use crate::types::Created;

/// Content write request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ContentRequest {
    /// New content; `null` or omitted clears it
    #[serde(default)]
    #[schema(example = "It was a dark and stormy night...")]
    pub content: Option<String>,
}

/// Deletion result
#[derive(Debug, Serialize, ToSchema)]
pub struct BookDeleted {
    #[schema(example = "Book deleted")]
    pub msg: String,
    pub book: Book,
}

/// Content write result
#[derive(Debug, Serialize, ToSchema)]
pub struct ContentSaved {
    #[schema(example = "Content saved")]
    pub msg: String,
    pub book: BookContentSummary,
}

/// Create book routes
pub fn book_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_books).post(create_book))
        .route("/:id", get(get_book).put(update_book).delete(delete_book))
        .route("/:id/content", get(get_content).put(set_content))
}

/// List the caller's books
#[utoipa::path(
    get,
    path = "/api/books",
    tag = "Books",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Books owned by the caller", body = Vec<Book>),
        (status = 401, description = "No token provided"),
        (status = 403, description = "Token expired or invalid")
    )
)]
pub async fn list_books(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.book_service.list(user.id).await?;
    Ok(Json(books))
}

/// Add a book
#[utoipa::path(
    post,
    path = "/api/books",
    tag = "Books",
    security(("bearer_auth" = [])),
    request_body = BookInput,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Missing title/author or duplicate ISBN")
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<BookInput>,
) -> AppResult<Created<Book>> {
    let book = state.book_service.create(user.id, payload).await?;
    Ok(Created(book))
}

/// Get one of the caller's books
#[utoipa::path(
    get,
    path = "/api/books/{id}",
    tag = "Books",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book found", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    PathId(id): PathId,
) -> AppResult<Json<Book>> {
    let book = state.book_service.get(user.id, id).await?;
    Ok(Json(book))
}

/// Replace a book's metadata
#[utoipa::path(
    put,
    path = "/api/books/{id}",
    tag = "Books",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Book ID")),
    request_body = BookInput,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Missing title/author or duplicate ISBN"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    PathId(id): PathId,
    ValidatedJson(payload): ValidatedJson<BookInput>,
) -> AppResult<Json<Book>> {
    let book = state.book_service.update(user.id, id, payload).await?;
    Ok(Json(book))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/api/books/{id}",
    tag = "Books",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted", body = BookDeleted),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    PathId(id): PathId,
) -> AppResult<Json<BookDeleted>> {
    let book = state.book_service.delete(user.id, id).await?;

    Ok(Json(BookDeleted {
        msg: "Book deleted".to_string(),
        book,
    }))
}

/// Read a book's content
#[utoipa::path(
    get,
    path = "/api/books/{id}/content",
    tag = "Books",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book content", body = BookContent),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_content(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    PathId(id): PathId,
) -> AppResult<Json<BookContent>> {
    let content = state.book_service.get_content(user.id, id).await?;
    Ok(Json(content))
}

/// Overwrite a book's content
#[utoipa::path(
    put,
    path = "/api/books/{id}/content",
    tag = "Books",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Book ID")),
    request_body = ContentRequest,
    responses(
        (status = 200, description = "Content saved", body = ContentSaved),
        (status = 403, description = "Book belongs to another user"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn set_content(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    PathId(id): PathId,
    ValidatedJson(payload): ValidatedJson<ContentRequest>,
) -> AppResult<Json<ContentSaved>> {
    let book = state
        .book_service
        .set_content(user.id, id, payload.content)
        .await?;

    Ok(Json(ContentSaved {
        msg: "Content saved".to_string(),
        book,
    }))
}
