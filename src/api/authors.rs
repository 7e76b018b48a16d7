//! Author endpoints

use axum::{extract::State, Json};

use super::extract::{AppJson, AppPath};
use crate::{
    error::AppResult,
    models::{Author, AuthorWithBooks, Book, CreateAuthor},
    AppState,
};

/// Create an author
#[utoipa::path(
    post,
    path = "/authors/",
    tag = "authors",
    request_body = CreateAuthor,
    responses(
        (status = 200, description = "Author created", body = Author),
        (status = 400, description = "Name missing", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_author(
    State(state): State<AppState>,
    AppJson(data): AppJson<CreateAuthor>,
) -> AppResult<Json<Author>> {
    let author = state.services.catalog.create_author(data).await?;
    Ok(Json(author))
}

/// List all authors with their books
#[utoipa::path(
    get,
    path = "/authors/",
    tag = "authors",
    responses(
        (status = 200, description = "All authors", body = Vec<AuthorWithBooks>)
    )
)]
pub async fn list_authors(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<AuthorWithBooks>>> {
    let authors = state.services.catalog.list_authors().await?;
    Ok(Json(authors))
}

/// Books of an author
#[utoipa::path(
    get,
    path = "/authors/{author_id}/books/",
    tag = "authors",
    params(("author_id" = i32, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Books linked to the author", body = Vec<Book>),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_author_books(
    State(state): State<AppState>,
    AppPath(author_id): AppPath<i32>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.get_author_books(author_id).await?;
    Ok(Json(books))
}
