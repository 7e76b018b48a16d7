//! API handlers for the catalog REST endpoints

pub mod authors;
pub mod books;
pub mod extract;
pub mod health;
pub mod openapi;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    config::{CorsConfig, CorsOriginError},
    AppState,
};

/// CORS for the configured origins, with credentials and every method and header allowed.
pub fn cors_layer(config: &CorsConfig) -> Result<CorsLayer, CorsOriginError> {
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(config.origin_values()?))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

/// Create the application router with all routes
pub fn create_router(state: AppState, cors: CorsLayer) -> Router {
    let catalog = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Books
        .route("/books/", get(books::list_books).post(books::create_book))
        .route("/books/add-author/", post(books::add_author_to_book))
        .route("/books/:book_id/authors/", get(books::get_book_authors))
        // Authors
        .route("/authors/", get(authors::list_authors).post(authors::create_author))
        .route("/authors/:author_id/books/", get(authors::get_author_books))
        .with_state(state);

    Router::new()
        .merge(catalog)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
