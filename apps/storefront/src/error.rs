//! # Storefront Error Type
//!
//! One error type for every command, carrying a machine-readable code and
//! the message the terminal shows.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  CatalogError ──┐                                                       │
//! │  CoreError ─────┼──► AppError { code, message } ──► stderr + exit code  │
//! │  io::Error ─────┘                                                       │
//! │                                                                         │
//! │  folio book 999                                                         │
//! │    → "Book not found"            (stdout, the not-found view)           │
//! │    → exit code 2                 (ErrorCode::NotFound)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use folio_catalog::CatalogError;
use folio_core::CoreError;

/// Error returned from storefront commands.
#[derive(Debug, Clone)]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
}

/// Error categories, each with its own process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Unknown book, unknown cart line (exit 2)
    NotFound,

    /// Invalid form, draft file or command input (exit 3)
    ValidationError,

    /// The catalog could not be reached or answered badly (exit 4)
    CatalogUnavailable,

    /// Bad configuration (exit 5)
    ConfigError,

    /// Anything else (exit 1)
    Internal,
}

impl ErrorCode {
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorCode::Internal => 1,
            ErrorCode::NotFound => 2,
            ErrorCode::ValidationError => 3,
            ErrorCode::CatalogUnavailable => 4,
            ErrorCode::ConfigError => 5,
        }
    }
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        AppError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ValidationError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Internal, message)
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound { id } => AppError::not_found("Book", id.as_str()),
            CatalogError::InvalidUrl(_) | CatalogError::InvalidConfig(_) => {
                AppError::new(ErrorCode::ConfigError, err.to_string())
            }
            CatalogError::Network(_)
            | CatalogError::UnexpectedStatus { .. }
            | CatalogError::Decode(_) => {
                AppError::new(ErrorCode::CatalogUnavailable, err.to_string())
            }
        }
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::EditionNotFound { .. } => AppError::new(ErrorCode::NotFound, err.to_string()),
            CoreError::OutOfStock { .. }
            | CoreError::NothingInStock { .. }
            | CoreError::InvalidBook(_) => AppError::validation(err.to_string()),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::internal(format!("I/O error: {}", err))
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for AppError {}

pub type AppResult<T> = Result<T, AppError>;
