//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{authors, books, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Library Catalog API",
        version = "0.1.0",
        description = "Books, authors and their many-to-many links"
    ),
    paths(
        health::health_check,
        health::readiness_check,
        books::create_book,
        books::list_books,
        books::add_author_to_book,
        books::get_book_authors,
        authors::create_author,
        authors::list_authors,
        authors::get_author_books,
    ),
    components(
        schemas(
            crate::models::Book,
            crate::models::BookWithAuthors,
            crate::models::CreateBook,
            crate::models::Author,
            crate::models::AuthorWithBooks,
            crate::models::CreateAuthor,
            crate::models::AddAuthorToBook,
            crate::models::MessageResponse,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book management"),
        (name = "authors", description = "Author management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
