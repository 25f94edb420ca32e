//! Error types for table loading and quote handling.
//!
//! Pricing itself never fails; these errors cover the operations around it.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes reported to callers of the quote engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Price table file not found (-1)
    FileNotFound = -1,
    /// Price table file could not be read (-2)
    ReadError = -2,
    /// Price table file could not be parsed (-3)
    ParseError = -3,
    /// Product id has no registered pricing family (E100)
    UnknownProduct = 100,
    /// Loaded price table violates a table invariant (E101)
    InvalidTable = 101,
    /// Quote has validation errors and cannot be saved (E200)
    ValidationFailed = 200,
}

/// Main error type for the quote engine.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("Price table file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Failed to parse price tables: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No pricing family registered for product {id}")]
    UnknownProduct { id: u32 },

    #[error("Invalid price table '{table}': {message}")]
    InvalidTable { table: String, message: String },

    #[error("Quote cannot be saved: {}", errors.join("; "))]
    ValidationFailed { errors: Vec<String> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl QuoteError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            QuoteError::FileNotFound { .. } => ErrorCode::FileNotFound,
            QuoteError::Json(_) => ErrorCode::ParseError,
            QuoteError::UnknownProduct { .. } => ErrorCode::UnknownProduct,
            QuoteError::InvalidTable { .. } => ErrorCode::InvalidTable,
            QuoteError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            QuoteError::Io(_) => ErrorCode::ReadError,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for quote engine operations.
pub type Result<T> = std::result::Result<T, QuoteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(QuoteError::UnknownProduct { id: 99 }.code_value(), 100);
        assert_eq!(
            QuoteError::ValidationFailed { errors: vec![] }.code(),
            ErrorCode::ValidationFailed
        );
        assert_eq!(
            QuoteError::FileNotFound {
                path: PathBuf::from("tables.json")
            }
            .code_value(),
            -1
        );
    }

    #[test]
    fn test_io_error_is_not_reported_as_missing() {
        let err = QuoteError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(err.code(), ErrorCode::ReadError);
        assert_eq!(err.code_value(), -2);
    }

    #[test]
    fn test_validation_failed_message_joins_errors() {
        let err = QuoteError::ValidationFailed {
            errors: vec!["first".to_string(), "second".to_string()],
        };
        assert_eq!(err.to_string(), "Quote cannot be saved: first; second");
    }
}
