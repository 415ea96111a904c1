//! Custom error types for fintrack
//!
//! One error enum covers the whole crate. Model-level validation errors are
//! small typed enums that the service layer folds into
//! [`FintrackError::Validation`].

use thiserror::Error;

/// The main error type for fintrack operations
#[derive(Error, Debug)]
pub enum FintrackError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Caller supplied malformed input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Local JSON storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Failures talking to the external finance API
    #[error("API error: {0}")]
    Api(String),

    /// Report export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl FintrackError {
    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for investments
    pub fn investment_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Investment",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for FintrackError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FintrackError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<reqwest::Error> for FintrackError {
    fn from(err: reqwest::Error) -> Self {
        Self::Api(err.to_string())
    }
}

impl From<csv::Error> for FintrackError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for fintrack operations
pub type FintrackResult<T> = Result<T, FintrackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FintrackError::Config("missing base url".into());
        assert_eq!(err.to_string(), "Configuration error: missing base url");
    }

    #[test]
    fn test_not_found_error() {
        let err = FintrackError::transaction_not_found("txn-1234abcd");
        assert_eq!(err.to_string(), "Transaction not found: txn-1234abcd");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FintrackError = io_err.into();
        assert!(matches!(err, FintrackError::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: FintrackError = json_err.into();
        assert!(matches!(err, FintrackError::Json(_)));
    }
}
