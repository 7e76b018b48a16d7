//! Table declarations, created on startup when absent

use sqlx::{Pool, Postgres};

use crate::error::AppResult;

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS books (
        id SERIAL PRIMARY KEY,
        title VARCHAR(255) NOT NULL,
        isbn VARCHAR(13) UNIQUE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS authors (
        id SERIAL PRIMARY KEY,
        name VARCHAR(255) NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS book_authors (
        book_id INTEGER NOT NULL REFERENCES books(id),
        author_id INTEGER NOT NULL REFERENCES authors(id),
        PRIMARY KEY (book_id, author_id)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS book_authors_author_id_idx ON book_authors (author_id)",
];

/// Create the catalog tables if they do not exist yet.
pub async fn ensure_schema(pool: &Pool<Postgres>) -> AppResult<()> {
    let mut tx = pool.begin().await?;
    for statement in SCHEMA {
        sqlx::query(statement).execute(&mut *tx).await?;
    }
    tx.commit().await?;
    Ok(())
}
