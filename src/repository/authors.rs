//! Author domain methods on Repository

use indexmap::IndexMap;
use sqlx::FromRow;

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::{Author, AuthorWithBooks, Book},
};

/// One row of the authors LEFT JOIN books listing
#[derive(Debug, FromRow)]
pub(crate) struct AuthorBookRow {
    pub id: i32,
    pub name: String,
    pub book_id: Option<i32>,
    pub book_title: Option<String>,
    pub book_isbn: Option<String>,
}

pub(crate) fn group_authors(rows: Vec<AuthorBookRow>) -> Vec<AuthorWithBooks> {
    let mut authors: IndexMap<i32, AuthorWithBooks> = IndexMap::new();
    for row in rows {
        let entry = authors.entry(row.id).or_insert_with(|| AuthorWithBooks {
            id: row.id,
            name: row.name,
            books: Vec::new(),
        });
        if let (Some(id), Some(title)) = (row.book_id, row.book_title) {
            entry.books.push(Book {
                id,
                title,
                isbn: row.book_isbn,
            });
        }
    }
    authors.into_values().collect()
}

impl Repository {
    /// Insert an author
    pub async fn authors_create(&self, name: &str) -> AppResult<Author> {
        let row = sqlx::query_as::<_, Author>(
            "INSERT INTO authors (name) VALUES ($1) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// List all authors with their books
    pub async fn authors_list(&self) -> AppResult<Vec<AuthorWithBooks>> {
        let rows = sqlx::query_as::<_, AuthorBookRow>(
            r#"
            SELECT a.id, a.name,
                   b.id AS book_id, b.title AS book_title, b.isbn AS book_isbn
            FROM authors a
            LEFT JOIN book_authors ba ON ba.author_id = a.id
            LEFT JOIN books b ON b.id = ba.book_id
            ORDER BY a.id, b.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(group_authors(rows))
    }

    /// Books linked to an author. Fails with NotFound when the author does not exist.
    pub async fn authors_get_books(&self, author_id: i32) -> AppResult<Vec<Book>> {
        let mut conn = self.pool.acquire().await?;

        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM authors WHERE id = $1)")
                .bind(author_id)
                .fetch_one(&mut *conn)
                .await?;
        if !exists {
            return Err(AppError::NotFound("Author not found".to_string()));
        }

        let books = sqlx::query_as::<_, Book>(
            r#"
            SELECT b.id, b.title, b.isbn
            FROM book_authors ba
            JOIN books b ON b.id = ba.book_id
            WHERE ba.author_id = $1
            ORDER BY b.id
            "#,
        )
        .bind(author_id)
        .fetch_all(&mut *conn)
        .await?;
        Ok(books)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_books_under_their_author_keeping_null_isbn() {
        let authors = group_authors(vec![
            AuthorBookRow {
                id: 1,
                name: "Jane Austen".into(),
                book_id: Some(1),
                book_title: Some("Emma".into()),
                book_isbn: Some("9780141439587".into()),
            },
            AuthorBookRow {
                id: 1,
                name: "Jane Austen".into(),
                book_id: Some(2),
                book_title: Some("Persuasion".into()),
                book_isbn: None,
            },
            AuthorBookRow {
                id: 2,
                name: "Unpublished".into(),
                book_id: None,
                book_title: None,
                book_isbn: None,
            },
        ]);

        assert_eq!(authors.len(), 2);
        assert_eq!(authors[0].books.len(), 2);
        assert_eq!(authors[0].books[1].isbn, None);
        assert!(authors[1].books.is_empty());
    }
}
