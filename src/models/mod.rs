//! Data models for the catalog

pub mod author;
pub mod book;
pub mod book_author;

// Re-export commonly used types
pub use author::{Author, AuthorWithBooks, CreateAuthor};
pub use book::{Book, BookWithAuthors, CreateBook, NewBook};
pub use book_author::{AddAuthorToBook, BookAuthor, LinkOutcome, MessageResponse};
