//! Book-Author junction model (N:M relationship)

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::{author::Author, book::Book};
use crate::error::{AppError, AppResult};

/// Junction row in `book_authors`, keyed by the pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow)]
pub struct BookAuthor {
    pub book_id: i32,
    pub author_id: i32,
}

/// Request linking an existing author to an existing book
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct AddAuthorToBook {
    pub book_id: Option<i32>,
    pub author_id: Option<i32>,
}

impl AddAuthorToBook {
    /// Both ids must be present; `0` never names a row and counts as missing.
    pub fn into_link(self) -> AppResult<BookAuthor> {
        let present = |id: Option<i32>| id.filter(|id| *id != 0);
        match (present(self.book_id), present(self.author_id)) {
            (Some(book_id), Some(author_id)) => Ok(BookAuthor { book_id, author_id }),
            _ => Err(AppError::Validation(
                "Book ID and Author ID are required".to_string(),
            )),
        }
    }
}

/// Result of a link operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkOutcome {
    pub book: Book,
    pub author: Author,
    /// False when the pair was already linked
    pub created: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl From<&LinkOutcome> for MessageResponse {
    fn from(outcome: &LinkOutcome) -> Self {
        Self {
            message: format!(
                "Author {} added to book {}",
                outcome.author.name, outcome.book.title
            ),
        }
    }
}
