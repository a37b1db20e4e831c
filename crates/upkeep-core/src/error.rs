//! Error types for the upkeep library.
//!
//! The schedule and window computations never fail. Errors only arise at the
//! edges: user input that has to be validated before it reaches the core,
//! and configuration loading.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for boundary operations.
#[derive(Error, Debug)]
pub enum UpkeepError {
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// A timestamp or date that could not be parsed
    #[error("Invalid timestamp '{value}': {source}")]
    Timestamp {
        value: String,
        #[source]
        source: jiff::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> UpkeepError {
        UpkeepError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl UpkeepError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Wraps a jiff parse failure together with the offending text.
    pub fn timestamp(value: impl Into<String>, source: jiff::Error) -> Self {
        Self::Timestamp {
            value: value.into(),
            source,
        }
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add lazy context to any error type, converting to UpkeepError.
    fn with_context_lazy<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context_lazy<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|e| UpkeepError::Configuration {
            message: format!("{}: {}", f(), e),
        })
    }
}

/// Result type alias for upkeep operations
pub type Result<T> = std::result::Result<T, UpkeepError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = UpkeepError::invalid_input("hours").with_reason("24 is outside 0-23");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'hours': 24 is outside 0-23"
        );
    }

    #[test]
    fn test_with_context_maps_to_configuration() {
        let raw: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        let err = raw.with_context_lazy(|| "Reading config").unwrap_err();
        assert!(matches!(err, UpkeepError::Configuration { .. }));
        assert!(err.to_string().contains("Reading config: missing"));
    }
}
