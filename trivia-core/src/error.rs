/// Structured error types for trivia-core.
///
/// Every failure carries one of four kinds (see [`ErrorKind`]). The HTTP layer maps
/// kinds to status codes; the variants stay distinct so logs keep the real cause.
use thiserror::Error;

use crate::models::ValidationError;

/// Coarse classification used at the HTTP boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    Unprocessable,
    Internal,
}

/// Main error type for trivia-core operations
#[derive(Error, Debug)]
pub enum TriviaError {
    /// A field failed validation when building a domain value
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Caller supplied a malformed or missing argument
    #[error("invalid argument '{field}': {reason}")]
    InvalidArgument { field: &'static str, reason: String },

    /// No record matched where one was expected
    #[error("{resource} '{id}' not found")]
    NotFound { resource: &'static str, id: String },

    /// Request was well-formed but could not be acted on
    #[error("unprocessable: {reason}")]
    Unprocessable { reason: String },

    /// Store or other unexpected failure
    #[error("internal error: {reason}")]
    Internal { reason: String },
}

/// Result type alias for trivia-core operations
pub type Result<T> = std::result::Result<T, TriviaError>;

impl TriviaError {
    pub fn invalid_argument(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }

    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    pub fn unprocessable(reason: impl Into<String>) -> Self {
        Self::Unprocessable {
            reason: reason.into(),
        }
    }

    pub fn internal(reason: impl Into<String>) -> Self {
        Self::Internal {
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) | Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Unprocessable { .. } => ErrorKind::Unprocessable,
            Self::Internal { .. } => ErrorKind::Internal,
        }
    }
}
