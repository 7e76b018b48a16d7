//! Author model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::book::Book;
use crate::error::{AppError, AppResult};

/// Author row as stored in `authors`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Author {
    pub id: i32,
    pub name: String,
}

/// Author with the books linked to them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthorWithBooks {
    pub id: i32,
    pub name: String,
    pub books: Vec<Book>,
}

/// Create author request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct CreateAuthor {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
}

impl CreateAuthor {
    /// Return the author name, or a validation error when it is absent or empty.
    pub fn into_name(self) -> AppResult<String> {
        let missing = || AppError::Validation("Author name is required".to_string());
        self.validate().map_err(|_| missing())?;
        self.name.ok_or_else(missing)
    }
}
