//! Catalog service: books, authors and the links between them

use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{
        AddAuthorToBook, Author, AuthorWithBooks, Book, BookWithAuthors, CreateAuthor,
        CreateBook, MessageResponse,
    },
    repository::CatalogStore,
};

#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn CatalogStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Create a book. Title and ISBN must both be present and non-empty.
    pub async fn create_book(&self, data: CreateBook) -> AppResult<Book> {
        let new_book = data.into_new_book()?;
        let book = self.store.create_book(new_book).await?;
        tracing::info!(book_id = book.id, isbn = ?book.isbn, "Catalog: created book");
        Ok(book)
    }

    /// Create an author. Name must be present and non-empty.
    pub async fn create_author(&self, data: CreateAuthor) -> AppResult<Author> {
        let name = data.into_name()?;
        let author = self.store.create_author(name).await?;
        tracing::info!(author_id = author.id, "Catalog: created author");
        Ok(author)
    }

    /// Link an author to a book. Linking an already linked pair succeeds without change.
    pub async fn add_author_to_book(&self, data: AddAuthorToBook) -> AppResult<MessageResponse> {
        let link = data.into_link()?;
        let outcome = self.store.add_author_to_book(link).await?;
        if outcome.created {
            tracing::info!(
                book_id = link.book_id,
                author_id = link.author_id,
                "Catalog: linked author to book"
            );
        } else {
            tracing::debug!(
                book_id = link.book_id,
                author_id = link.author_id,
                "Catalog: author already linked to book"
            );
        }
        Ok(MessageResponse::from(&outcome))
    }

    pub async fn get_book_authors(&self, book_id: i32) -> AppResult<Vec<Author>> {
        self.store.book_authors(book_id).await
    }

    pub async fn get_author_books(&self, author_id: i32) -> AppResult<Vec<Book>> {
        self.store.author_books(author_id).await
    }

    pub async fn list_books(&self) -> AppResult<Vec<BookWithAuthors>> {
        self.store.list_books().await
    }

    pub async fn list_authors(&self) -> AppResult<Vec<AuthorWithBooks>> {
        self.store.list_authors().await
    }

    /// Check that storage is reachable
    pub async fn ping(&self) -> AppResult<()> {
        self.store.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::AppError,
        models::{BookAuthor, LinkOutcome, NewBook},
        repository::MockCatalogStore,
    };
    use mockall::predicate::eq;

    fn emma() -> Book {
        Book {
            id: 1,
            title: "Emma".into(),
            isbn: Some("9780141439587".into()),
        }
    }

    fn austen() -> Author {
        Author {
            id: 1,
            name: "Jane Austen".into(),
        }
    }

    #[tokio::test]
    async fn create_book_passes_validated_values_to_store() {
        let mut store = MockCatalogStore::new();
        store
            .expect_create_book()
            .with(eq(NewBook {
                title: "Emma".into(),
                isbn: "9780141439587".into(),
            }))
            .times(1)
            .returning(|_| Ok(emma()));

        let service = CatalogService::new(Arc::new(store));
        let book = service
            .create_book(CreateBook {
                title: Some("Emma".into()),
                isbn: Some("9780141439587".into()),
            })
            .await
            .unwrap();
        assert_eq!(book, emma());
    }

    #[tokio::test]
    async fn invalid_book_never_reaches_store() {
        let mut store = MockCatalogStore::new();
        store.expect_create_book().never();

        let service = CatalogService::new(Arc::new(store));
        let result = service
            .create_book(CreateBook {
                title: Some("Emma".into()),
                isbn: None,
            })
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn invalid_author_never_reaches_store() {
        let mut store = MockCatalogStore::new();
        store.expect_create_author().never();

        let service = CatalogService::new(Arc::new(store));
        let result = service.create_author(CreateAuthor { name: None }).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn duplicate_isbn_conflict_propagates() {
        let mut store = MockCatalogStore::new();
        store
            .expect_create_book()
            .returning(|_| Err(AppError::Conflict("A book with ISBN 1 already exists".into())));

        let service = CatalogService::new(Arc::new(store));
        let result = service
            .create_book(CreateBook {
                title: Some("Emma".into()),
                isbn: Some("1".into()),
            })
            .await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn repeat_link_returns_same_message() {
        let mut store = MockCatalogStore::new();
        let mut created = true;
        store
            .expect_add_author_to_book()
            .with(eq(BookAuthor { book_id: 1, author_id: 1 }))
            .times(2)
            .returning(move |_| {
                let outcome = LinkOutcome {
                    book: emma(),
                    author: austen(),
                    created,
                };
                created = false;
                Ok(outcome)
            });

        let service = CatalogService::new(Arc::new(store));
        for _ in 0..2 {
            let response = service
                .add_author_to_book(AddAuthorToBook {
                    book_id: Some(1),
                    author_id: Some(1),
                })
                .await
                .unwrap();
            assert_eq!(response.message, "Author Jane Austen added to book Emma");
        }
    }

    #[tokio::test]
    async fn link_requires_both_ids() {
        let mut store = MockCatalogStore::new();
        store.expect_add_author_to_book().never();

        let service = CatalogService::new(Arc::new(store));
        let result = service
            .add_author_to_book(AddAuthorToBook {
                book_id: None,
                author_id: Some(1),
            })
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
