//! Abstract page-driver trait for table queries.
//!
//! Tabla owns no DOM traversal of its own: every assertion composes a
//! selector expression and delegates the actual lookup to a [`PageDriver`]
//! implementation (a WebDriver session, a CDP connection, or an in-memory
//! fake in tests). The trait abstraction allows swapping implementations
//! without touching the assertion layer.
//!
//! Failures come back as a [`PageFailure`] carrying a typed
//! [`FailureKind`] so callers branch on the reason explicitly instead of
//! substring-matching error text. The column-check fallback in
//! [`crate::TableAssertions`] retries only on
//! [`FailureKind::ContentNotFound`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::locator::CellPath;

/// Kind of page check being delegated.
///
/// Opaque tag forwarded to the driver; drivers may use it to pick a
/// lookup strategy or ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckKind {
    /// Element-presence check
    Element,
    /// Visible-text check
    Text,
}

/// Why a delegated page query failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureKind {
    /// The targeted subtree exists but the expected text was absent.
    /// The only kind that triggers the column-check header fallback.
    ContentNotFound,
    /// Nothing matched the base selector at all
    ElementNotFound,
    /// Row/column position out of range or malformed locator
    Structural,
    /// Any other driver-side error (lost session, protocol error, …)
    Other,
}

/// Failure raised by a page-driver capability
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct PageFailure {
    /// Typed reason, used for fallback/propagation decisions
    pub kind: FailureKind,
    /// Human-readable reason
    pub message: String,
}

impl PageFailure {
    /// Create a failure with an explicit kind
    #[must_use]
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Expected text absent from an existing subtree
    #[must_use]
    pub fn content_not_found(message: impl Into<String>) -> Self {
        Self::new(FailureKind::ContentNotFound, message)
    }

    /// No element matched the base selector
    #[must_use]
    pub fn element_not_found(message: impl Into<String>) -> Self {
        Self::new(FailureKind::ElementNotFound, message)
    }

    /// Position out of range or malformed locator
    #[must_use]
    pub fn structural(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Structural, message)
    }
}

/// External browser-driver capabilities the assertion layer delegates to
pub trait PageDriver {
    /// Fail with `message` when no element in the current page matches
    /// `selector`.
    ///
    /// # Errors
    ///
    /// Returns a [`PageFailure`] whose kind reflects why the lookup
    /// failed.
    fn assert_element_present(
        &self,
        selector: &str,
        kind: CheckKind,
        message: &str,
    ) -> Result<(), PageFailure>;

    /// Text of the table cell addressed by `path` (zero-based
    /// coordinates).
    ///
    /// # Errors
    ///
    /// Returns a [`PageFailure`] when the location does not exist.
    fn table_cell_text(&self, path: &CellPath) -> Result<String, PageFailure>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_display_is_message() {
        let failure = PageFailure::content_not_found("no 'X' in column 2");
        assert_eq!(failure.to_string(), "no 'X' in column 2");
    }

    #[test]
    fn test_constructor_kinds() {
        assert_eq!(
            PageFailure::content_not_found("m").kind,
            FailureKind::ContentNotFound
        );
        assert_eq!(
            PageFailure::element_not_found("m").kind,
            FailureKind::ElementNotFound
        );
        assert_eq!(PageFailure::structural("m").kind, FailureKind::Structural);
        assert_eq!(
            PageFailure::new(FailureKind::Other, "m").kind,
            FailureKind::Other
        );
    }
}
