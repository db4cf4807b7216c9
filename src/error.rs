//! Error type for column resolution failures.

use std::error::Error;

use thiserror::Error;

/// Raised by table-access code when a column referenced by name or index
/// does not exist in the table's schema.
///
/// Fatal to the operation that raises it; the optional cause preserves
/// root-cause context and is reachable through [`Error::source`].
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ColumnNotFoundError {
    message: String,
    #[source]
    cause: Option<Box<dyn Error + Send + Sync>>,
}

impl ColumnNotFoundError {
    /// Create an error with a message and no underlying cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Create an error chaining to the underlying cause that triggered it.
    pub fn with_cause(
        message: impl Into<String>,
        cause: impl Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            cause: Some(Box::new(cause)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error, PartialEq)]
    #[error("schema read failed: {0}")]
    struct SchemaReadError(String);

    #[test]
    fn message_only_constructor_has_no_source() {
        let err = ColumnNotFoundError::new("Column 'cost' not found");
        assert_eq!(err.message(), "Column 'cost' not found");
        assert_eq!(err.to_string(), "Column 'cost' not found");
        assert!(err.source().is_none());
    }

    #[test]
    fn cause_is_preserved_and_reachable_through_source() {
        let err = ColumnNotFoundError::with_cause(
            "lookup failed",
            SchemaReadError("truncated header".to_string()),
        );
        assert_eq!(err.message(), "lookup failed");

        let source = err.source().expect("cause should be chained");
        let cause = source
            .downcast_ref::<SchemaReadError>()
            .expect("cause should keep its concrete type");
        assert_eq!(*cause, SchemaReadError("truncated header".to_string()));
    }

    #[test]
    fn display_renders_only_the_message() {
        let err = ColumnNotFoundError::with_cause(
            "column 'fx_rate' missing",
            SchemaReadError("io".to_string()),
        );
        assert_eq!(err.to_string(), "column 'fx_rate' missing");
    }
}
