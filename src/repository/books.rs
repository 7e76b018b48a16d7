//! Book domain methods on Repository

use indexmap::IndexMap;
use sqlx::FromRow;

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::{Author, Book, BookAuthor, BookWithAuthors, LinkOutcome, NewBook},
};

/// One row of the books LEFT JOIN authors listing
#[derive(Debug, FromRow)]
pub(crate) struct BookAuthorRow {
    pub id: i32,
    pub title: String,
    pub isbn: Option<String>,
    pub author_id: Option<i32>,
    pub author_name: Option<String>,
}

/// Fold joined rows into one entry per book, keeping row order.
pub(crate) fn group_books(rows: Vec<BookAuthorRow>) -> Vec<BookWithAuthors> {
    let mut books: IndexMap<i32, BookWithAuthors> = IndexMap::new();
    for row in rows {
        let entry = books.entry(row.id).or_insert_with(|| BookWithAuthors {
            id: row.id,
            title: row.title,
            isbn: row.isbn,
            authors: Vec::new(),
        });
        if let (Some(id), Some(name)) = (row.author_id, row.author_name) {
            entry.authors.push(Author { id, name });
        }
    }
    books.into_values().collect()
}

/// Name the ISBN in the unique-violation message; other errors map as usual.
fn isbn_conflict(err: sqlx::Error, isbn: &str) -> AppError {
    match AppError::from(err) {
        AppError::Conflict(_) => {
            AppError::Conflict(format!("A book with ISBN {} already exists", isbn))
        }
        other => other,
    }
}

impl Repository {
    /// Insert a book. A duplicate ISBN surfaces as a conflict from the unique constraint.
    pub async fn books_create(&self, data: &NewBook) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            "INSERT INTO books (title, isbn) VALUES ($1, $2) RETURNING id, title, isbn",
        )
        .bind(&data.title)
        .bind(&data.isbn)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| isbn_conflict(e, &data.isbn))
    }

    /// List all books with their authors
    pub async fn books_list(&self) -> AppResult<Vec<BookWithAuthors>> {
        let rows = sqlx::query_as::<_, BookAuthorRow>(
            r#"
            SELECT b.id, b.title, b.isbn, a.id AS author_id, a.name AS author_name
            FROM books b
            LEFT JOIN book_authors ba ON ba.book_id = b.id
            LEFT JOIN authors a ON a.id = ba.author_id
            ORDER BY b.id, a.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(group_books(rows))
    }

    /// Authors linked to a book. Fails with NotFound when the book does not exist.
    pub async fn books_get_authors(&self, book_id: i32) -> AppResult<Vec<Author>> {
        let mut conn = self.pool.acquire().await?;

        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE id = $1)")
            .bind(book_id)
            .fetch_one(&mut *conn)
            .await?;
        if !exists {
            return Err(AppError::NotFound("Book not found".to_string()));
        }

        let authors = sqlx::query_as::<_, Author>(
            r#"
            SELECT a.id, a.name
            FROM book_authors ba
            JOIN authors a ON a.id = ba.author_id
            WHERE ba.book_id = $1
            ORDER BY a.id
            "#,
        )
        .bind(book_id)
        .fetch_all(&mut *conn)
        .await?;
        Ok(authors)
    }

    /// Link an author to a book in a single transaction.
    ///
    /// Both ids must resolve, the book being checked first. The insert relies on
    /// the composite primary key, so linking an existing pair is a no-op.
    pub async fn books_add_author(&self, link: BookAuthor) -> AppResult<LinkOutcome> {
        let mut tx = self.pool.begin().await?;

        let book = sqlx::query_as::<_, Book>("SELECT id, title, isbn FROM books WHERE id = $1")
            .bind(link.book_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))?;

        let author = sqlx::query_as::<_, Author>("SELECT id, name FROM authors WHERE id = $1")
            .bind(link.author_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound("Author not found".to_string()))?;

        let inserted = sqlx::query_as::<_, BookAuthor>(
            r#"
            INSERT INTO book_authors (book_id, author_id)
            VALUES ($1, $2)
            ON CONFLICT (book_id, author_id) DO NOTHING
            RETURNING book_id, author_id
            "#,
        )
        .bind(link.book_id)
        .bind(link.author_id)
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(LinkOutcome {
            book,
            author,
            created: inserted.is_some(),
        })
    }
}
