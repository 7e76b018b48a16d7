//! Error types for the catalog server

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// PostgreSQL SQLSTATE for `string_data_right_truncation`
const SQLSTATE_VALUE_TOO_LONG: &str = "22001";

/// Application error codes carried in every error body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    DbFailure = 3,
    Duplicate = 8,
    BadValue = 18,
    NoSuchData = 20,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl From<sqlx::Error> for AppError {
    /// Constraint violations raised by the storage engine become client
    /// errors; anything else stays a database failure.
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &err {
            if db.is_unique_violation() {
                let constraint = db.constraint().unwrap_or("unique constraint");
                return AppError::Conflict(format!("Duplicate value violates {}", constraint));
            }
            if db.code().as_deref() == Some(SQLSTATE_VALUE_TOO_LONG) {
                return AppError::Validation(db.message().to_string());
            }
        }
        AppError::Database(err)
    }
}

impl From<JsonRejection> for AppError {
    /// Unreadable, mistyped, or non-JSON request bodies are client errors.
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, ErrorCode) {
        match self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, ErrorCode::NoSuchData),
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, ErrorCode::BadValue),
            AppError::Conflict(_) => (StatusCode::CONFLICT, ErrorCode::Duplicate),
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::DbFailure),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::Failure),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = match self {
            AppError::NotFound(msg) | AppError::Validation(msg) | AppError::Conflict(msg) => msg,
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "Database error".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal server error".to_string()
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use sqlx::error::{DatabaseError, ErrorKind};
    use std::borrow::Cow;

    /// Database error carrying a chosen SQLSTATE, shaped like the Postgres driver's
    #[derive(Debug)]
    struct FakeDbError {
        code: &'static str,
        constraint: Option<&'static str>,
    }

    impl std::fmt::Display for FakeDbError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "sqlstate {}", self.code)
        }
    }

    impl std::error::Error for FakeDbError {}

    impl DatabaseError for FakeDbError {
        fn message(&self) -> &str {
            "value too long for type character varying(13)"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed(self.code))
        }

        fn constraint(&self) -> Option<&str> {
            self.constraint
        }

        fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            match self.code {
                "23505" => ErrorKind::UniqueViolation,
                "23503" => ErrorKind::ForeignKeyViolation,
                _ => ErrorKind::Other,
            }
        }
    }

    /// A `sqlx::Error::Database` with the given SQLSTATE
    pub(crate) fn db_error(code: &'static str, constraint: Option<&'static str>) -> sqlx::Error {
        sqlx::Error::from(FakeDbError { code, constraint })
    }

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn validation_maps_to_bad_request() {
        let (status, body) =
            body_json(AppError::Validation("Author name is required".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 18);
        assert_eq!(body["error"], "BadValue");
        assert_eq!(body["message"], "Author name is required");
    }

    #[tokio::test]
    async fn not_found_maps_to_404() {
        let (status, body) = body_json(AppError::NotFound("Book not found".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Book not found");
    }

    #[tokio::test]
    async fn conflict_maps_to_409() {
        let (status, body) = body_json(AppError::Conflict("dup".into())).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "Duplicate");
    }

    #[tokio::test]
    async fn database_errors_hide_details() {
        let (status, body) = body_json(AppError::from(sqlx::Error::PoolTimedOut)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "DbFailure");
        assert_eq!(body["message"], "Database error");
    }

    #[tokio::test]
    async fn unique_violation_becomes_conflict() {
        let err = AppError::from(db_error("23505", Some("books_isbn_key")));
        match &err {
            AppError::Conflict(msg) => assert!(msg.contains("books_isbn_key")),
            other => panic!("expected conflict, got {:?}", other),
        }
        let (status, _) = body_json(err).await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn value_too_long_becomes_bad_request() {
        let err = AppError::from(db_error("22001", None));
        assert!(matches!(err, AppError::Validation(_)));
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["message"],
            "value too long for type character varying(13)"
        );
    }

    #[tokio::test]
    async fn other_database_codes_stay_server_errors() {
        let err = AppError::from(db_error("23503", Some("book_authors_book_id_fkey")));
        assert!(matches!(err, AppError::Database(_)));
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], 3);
    }

    #[tokio::test]
    async fn not_found_uses_no_such_data_code() {
        let (_, body) = body_json(AppError::NotFound("Author not found".into())).await;
        assert_eq!(body["code"], 20);
        assert_eq!(body["error"], "NoSuchData");
    }

    #[tokio::test]
    async fn internal_errors_hide_details() {
        let (status, body) = body_json(AppError::Internal("boom".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Internal server error");
    }
}
