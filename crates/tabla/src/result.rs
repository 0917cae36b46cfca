//! Result and error types for Tabla.

use thiserror::Error;

/// Result type for Tabla operations
pub type TablaResult<T> = Result<T, TablaError>;

/// Errors that can occur in Tabla
#[derive(Debug, Error)]
pub enum TablaError {
    /// Assertion failed: an expected piece of table content was absent
    #[error("Assertion failed: {message}")]
    AssertionFailed {
        /// Human-readable message naming the table and the expected content
        message: String,
    },

    /// Structural lookup failed: row/column out of range or malformed locator
    #[error("Structural lookup failed: {message}")]
    StructuralLookup {
        /// Error message
        message: String,
    },

    /// Driver-side error unrelated to element lookup
    #[error("Driver error: {message}")]
    Driver {
        /// Error message
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assertion_failed_display() {
        let err = TablaError::AssertionFailed {
            message: "Table identified by 't1' should have contained text 'x'.".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Assertion failed: Table identified by 't1' should have contained text 'x'."
        );
    }

    #[test]
    fn test_structural_lookup_display() {
        let err = TablaError::StructuralLookup {
            message: "column 5 out of range".to_string(),
        };
        assert!(err.to_string().starts_with("Structural lookup failed:"));
    }

    #[test]
    fn test_driver_display() {
        let err = TablaError::Driver {
            message: "session lost".to_string(),
        };
        assert_eq!(err.to_string(), "Driver error: session lost");
    }
}
