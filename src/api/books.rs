//! Book endpoints

use axum::{extract::State, Json};

use super::extract::{AppJson, AppPath};
use crate::{
    error::AppResult,
    models::{AddAuthorToBook, Author, Book, BookWithAuthors, CreateBook, MessageResponse},
    AppState,
};

/// Create a book
#[utoipa::path(
    post,
    path = "/books/",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 200, description = "Book created", body = Book),
        (status = 400, description = "Title or ISBN missing", body = crate::error::ErrorResponse),
        (status = 409, description = "ISBN already used", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    AppJson(data): AppJson<CreateBook>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.create_book(data).await?;
    Ok(Json(book))
}

/// List all books with their authors
#[utoipa::path(
    get,
    path = "/books/",
    tag = "books",
    responses(
        (status = 200, description = "All books", body = Vec<BookWithAuthors>)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<Vec<BookWithAuthors>>> {
    let books = state.services.catalog.list_books().await?;
    Ok(Json(books))
}

/// Link an author to a book
#[utoipa::path(
    post,
    path = "/books/add-author/",
    tag = "books",
    request_body = AddAuthorToBook,
    responses(
        (status = 200, description = "Author linked (or already linked)", body = MessageResponse),
        (status = 400, description = "Book ID or Author ID missing", body = crate::error::ErrorResponse),
        (status = 404, description = "Book or author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_author_to_book(
    State(state): State<AppState>,
    AppJson(data): AppJson<AddAuthorToBook>,
) -> AppResult<Json<MessageResponse>> {
    let response = state.services.catalog.add_author_to_book(data).await?;
    Ok(Json(response))
}

/// Authors of a book
#[utoipa::path(
    get,
    path = "/books/{book_id}/authors/",
    tag = "books",
    params(("book_id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Authors linked to the book", body = Vec<Author>),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book_authors(
    State(state): State<AppState>,
    AppPath(book_id): AppPath<i32>,
) -> AppResult<Json<Vec<Author>>> {
    let authors = state.services.catalog.get_book_authors(book_id).await?;
    Ok(Json(authors))
}
