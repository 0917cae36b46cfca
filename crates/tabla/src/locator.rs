//! Table locator normalization and selector composition.
//!
//! A table locator is either a pre-formed selector expression, recognized
//! by the reserved `css=` prefix and passed through unchanged, or a plain
//! identifier that gets wrapped into the default "table by id" selector.
//! The composed queries append a structural suffix (cell kind, positional
//! pseudo-selector) and a `:contains('…')` content filter; evaluating the
//! resulting expression against a live page is the driver's job.

use serde::{Deserialize, Serialize};

/// Reserved prefix marking a caller-supplied raw selector expression
pub const CSS_PREFIX: &str = "css=";

/// Normalize a caller-supplied table locator into a selector expression.
///
/// Locators starting with [`CSS_PREFIX`] are returned unchanged (the
/// caller has supplied a raw selector); anything else is treated as an
/// element id and wrapped into `css=table#<id>`. Never fails: any string
/// is accepted, including ones that denote nonexistent elements — failure
/// surfaces later, at query time.
#[must_use]
pub fn normalize(table_locator: &str) -> String {
    if table_locator.starts_with(CSS_PREFIX) {
        table_locator.to_string()
    } else {
        format!("{CSS_PREFIX}table#{table_locator}")
    }
}

/// Which cells a column query inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    /// Data cells (`td`)
    Data,
    /// Header cells (`th`)
    Header,
}

/// Region of a table targeted by a content query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableRegion {
    /// Anywhere in the table subtree
    Anywhere,
    /// Any `th` descendant
    Header,
    /// Any `td` descendant inside a `tfoot`
    Footer,
    /// The n-th row (1-based).
    ///
    /// The positional pseudo-selector counts every `tr` child of its
    /// parent; it is not structurally scoped to body rows, so a table
    /// whose header rows share a parent with its data rows counts them
    /// too. Use [`TableRegion::Header`] or [`TableRegion::Footer`] for
    /// header/footer content.
    Row(usize),
    /// The n-th cell position (1-based) within each row
    Column {
        /// 1-based column position; merged cells count as their leftmost
        /// column only
        index: usize,
        /// Whether to inspect data or header cells at that position
        cells: CellKind,
    },
}

/// A composed table content query: normalized locator, target region, and
/// the text expected somewhere inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableQuery {
    locator: String,
    region: TableRegion,
    content: String,
}

impl TableQuery {
    /// Create a query for a region of a table; the locator is normalized
    #[must_use]
    pub fn new(
        table_locator: &str,
        region: TableRegion,
        content: impl Into<String>,
    ) -> Self {
        Self {
            locator: normalize(table_locator),
            region,
            content: content.into(),
        }
    }

    /// Query for content anywhere in the table
    #[must_use]
    pub fn anywhere(table_locator: &str, content: impl Into<String>) -> Self {
        Self::new(table_locator, TableRegion::Anywhere, content)
    }

    /// Query for content in any header (`th`) cell
    #[must_use]
    pub fn header(table_locator: &str, content: impl Into<String>) -> Self {
        Self::new(table_locator, TableRegion::Header, content)
    }

    /// Query for content in any footer (`tfoot td`) cell
    #[must_use]
    pub fn footer(table_locator: &str, content: impl Into<String>) -> Self {
        Self::new(table_locator, TableRegion::Footer, content)
    }

    /// Query for content in the `row`-th row (1-based)
    #[must_use]
    pub fn row(table_locator: &str, row: usize, content: impl Into<String>) -> Self {
        Self::new(table_locator, TableRegion::Row(row), content)
    }

    /// Query for content at the `index`-th cell position (1-based) of the
    /// given cell kind
    #[must_use]
    pub fn column(
        table_locator: &str,
        index: usize,
        cells: CellKind,
        content: impl Into<String>,
    ) -> Self {
        Self::new(table_locator, TableRegion::Column { index, cells }, content)
    }

    /// The normalized table locator this query was built from
    #[must_use]
    pub fn locator(&self) -> &str {
        &self.locator
    }

    /// The region this query targets
    #[must_use]
    pub const fn region(&self) -> &TableRegion {
        &self.region
    }

    /// The expected content
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Compose the selector expression handed to the driver
    #[must_use]
    pub fn selector(&self) -> String {
        let base = &self.locator;
        let contains = format!(":contains('{}')", self.content);
        match &self.region {
            TableRegion::Anywhere => format!("{base}{contains}"),
            TableRegion::Header => format!("{base} th{contains}"),
            TableRegion::Footer => format!("{base} tfoot td{contains}"),
            TableRegion::Row(row) => format!("{base} tr:nth-child({row}){contains}"),
            TableRegion::Column { index, cells } => {
                let cell = match cells {
                    CellKind::Data => "td",
                    CellKind::Header => "th",
                };
                format!("{base} tr {cell}:nth-child({index}){contains}")
            }
        }
    }
}

/// Driver path addressing one table cell.
///
/// Callers use 1-based row/column numbers; the driver's cell-read
/// capability expects zero-based coordinates, so construction subtracts
/// one from each. The `Display` form is the driver wire encoding
/// `<locator>.<row>.<column>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellPath {
    locator: String,
    row: usize,
    column: usize,
}

impl CellPath {
    /// Address a cell by 1-based row and column numbers
    #[must_use]
    pub fn new(table_locator: &str, row: usize, column: usize) -> Self {
        Self {
            locator: normalize(table_locator),
            row: row.saturating_sub(1),
            column: column.saturating_sub(1),
        }
    }

    /// The normalized table locator
    #[must_use]
    pub fn locator(&self) -> &str {
        &self.locator
    }

    /// Zero-based row coordinate
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Zero-based column coordinate
    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }
}

impl std::fmt::Display for CellPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.locator, self.row, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    mod normalize_tests {
        use super::*;

        #[test]
        fn test_plain_id_wrapped() {
            assert_eq!(normalize("orders"), "css=table#orders");
        }

        #[test]
        fn test_css_prefix_passes_through() {
            assert_eq!(normalize("css=div.grid > table"), "css=div.grid > table");
        }

        #[test]
        fn test_pass_through_branch_is_idempotent() {
            let once = normalize("t1");
            assert_eq!(normalize(&once), once);
        }

        #[test]
        fn test_empty_locator_accepted() {
            assert_eq!(normalize(""), "css=table#");
        }

        proptest! {
            #[test]
            fn prop_non_prefixed_gets_default_selector(id in "[a-zA-Z][a-zA-Z0-9_-]{0,20}") {
                prop_assert_eq!(normalize(&id), format!("css=table#{id}"));
            }

            #[test]
            fn prop_prefixed_unchanged(rest in "[ -~]{0,40}") {
                let raw = format!("css={rest}");
                prop_assert_eq!(normalize(&raw), raw);
            }
        }
    }

    mod query_tests {
        use super::*;

        #[test]
        fn test_anywhere_selector() {
            let q = TableQuery::anywhere("t1", "Alice");
            assert_eq!(q.selector(), "css=table#t1:contains('Alice')");
        }

        #[test]
        fn test_header_selector() {
            let q = TableQuery::header("t1", "Name");
            assert_eq!(q.selector(), "css=table#t1 th:contains('Name')");
        }

        #[test]
        fn test_footer_selector() {
            let q = TableQuery::footer("t1", "Total");
            assert_eq!(q.selector(), "css=table#t1 tfoot td:contains('Total')");
        }

        #[test]
        fn test_row_selector() {
            let q = TableQuery::row("t1", 2, "Alice");
            assert_eq!(q.selector(), "css=table#t1 tr:nth-child(2):contains('Alice')");
        }

        #[test]
        fn test_column_data_selector() {
            let q = TableQuery::column("t1", 3, CellKind::Data, "C");
            assert_eq!(q.selector(), "css=table#t1 tr td:nth-child(3):contains('C')");
        }

        #[test]
        fn test_column_header_selector() {
            let q = TableQuery::column("t1", 3, CellKind::Header, "C");
            assert_eq!(q.selector(), "css=table#t1 tr th:nth-child(3):contains('C')");
        }

        #[test]
        fn test_raw_selector_locator_kept() {
            let q = TableQuery::header("css=.report table", "Qty");
            assert_eq!(q.selector(), "css=.report table th:contains('Qty')");
        }

        #[test]
        fn test_accessors() {
            let q = TableQuery::row("t1", 4, "x");
            assert_eq!(q.locator(), "css=table#t1");
            assert_eq!(q.region(), &TableRegion::Row(4));
            assert_eq!(q.content(), "x");
        }
    }

    mod cell_path_tests {
        use super::*;

        #[test]
        fn test_coordinates_are_zero_based() {
            let path = CellPath::new("t1", 2, 3);
            assert_eq!(path.row(), 1);
            assert_eq!(path.column(), 2);
        }

        #[test]
        fn test_display_encoding() {
            let path = CellPath::new("t1", 1, 1);
            assert_eq!(path.to_string(), "css=table#t1.0.0");
        }

        #[test]
        fn test_raw_selector_locator() {
            let path = CellPath::new("css=#report table", 3, 2);
            assert_eq!(path.to_string(), "css=#report table.2.1");
        }

        proptest! {
            #[test]
            fn prop_conversion_subtracts_one(r in 1usize..1000, c in 1usize..1000) {
                let path = CellPath::new("t1", r, c);
                prop_assert_eq!(path.row(), r - 1);
                prop_assert_eq!(path.column(), c - 1);
            }
        }
    }
}
