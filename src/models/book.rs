//! Book model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::author::Author;
use crate::error::{AppError, AppResult};

/// Book row as stored in `books`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    /// ISBN-10 or ISBN-13, unique across books
    pub isbn: Option<String>,
}

/// Book with the authors linked to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookWithAuthors {
    pub id: i32,
    pub title: String,
    pub isbn: Option<String>,
    pub authors: Vec<Author>,
}

/// Create book request. Both fields are required and must be non-empty.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(required, length(min = 1))]
    pub title: Option<String>,
    #[validate(required, length(min = 1))]
    pub isbn: Option<String>,
}

/// Validated book values ready for insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub isbn: String,
}

impl CreateBook {
    pub fn into_new_book(self) -> AppResult<NewBook> {
        let missing = || AppError::Validation("Title and ISBN are required".to_string());
        self.validate().map_err(|_| missing())?;
        match (self.title, self.isbn) {
            (Some(title), Some(isbn)) => Ok(NewBook { title, isbn }),
            _ => Err(missing()),
        }
    }
}
