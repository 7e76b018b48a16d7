//! Repository layer for database operations

pub mod authors;
pub mod books;
pub mod schema;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{Author, AuthorWithBooks, Book, BookAuthor, BookWithAuthors, LinkOutcome, NewBook},
};

/// Storage operations the catalog service depends on
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn create_book(&self, data: NewBook) -> AppResult<Book>;
    async fn create_author(&self, name: String) -> AppResult<Author>;
    async fn add_author_to_book(&self, link: BookAuthor) -> AppResult<LinkOutcome>;
    async fn book_authors(&self, book_id: i32) -> AppResult<Vec<Author>>;
    async fn author_books(&self, author_id: i32) -> AppResult<Vec<Book>>;
    async fn list_books(&self) -> AppResult<Vec<BookWithAuthors>>;
    async fn list_authors(&self) -> AppResult<Vec<AuthorWithBooks>>;
    /// Round trip to the storage engine
    async fn ping(&self) -> AppResult<()>;
}

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for Repository {
    async fn create_book(&self, data: NewBook) -> AppResult<Book> {
        self.books_create(&data).await
    }

    async fn create_author(&self, name: String) -> AppResult<Author> {
        self.authors_create(&name).await
    }

    async fn add_author_to_book(&self, link: BookAuthor) -> AppResult<LinkOutcome> {
        self.books_add_author(link).await
    }

    async fn book_authors(&self, book_id: i32) -> AppResult<Vec<Author>> {
        self.books_get_authors(book_id).await
    }

    async fn author_books(&self, author_id: i32) -> AppResult<Vec<Book>> {
        self.authors_get_books(author_id).await
    }

    async fn list_books(&self) -> AppResult<Vec<BookWithAuthors>> {
        self.books_list().await
    }

    async fn list_authors(&self) -> AppResult<Vec<AuthorWithBooks>> {
        self.authors_list().await
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
