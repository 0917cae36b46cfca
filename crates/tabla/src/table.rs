//! Table-content assertion keywords.
//!
//! [`TableAssertions`] translates each high-level check into one (or, for
//! column checks, up to two) selector-based existence queries against the
//! injected [`PageDriver`], and cell reads into one delegated cell-text
//! fetch. Every operation is a stateless request/response round-trip: no
//! state is retained across calls, so a `TableAssertions` value is safe to
//! share as widely as its driver is.

use tracing::info;

use crate::driver::{CheckKind, FailureKind, PageDriver, PageFailure};
use crate::locator::{CellKind, CellPath, TableQuery};
use crate::result::{TablaError, TablaResult};

/// Table-inspection assertions over an injected page driver
#[derive(Debug, Clone)]
pub struct TableAssertions<D> {
    driver: D,
}

impl<D: PageDriver> TableAssertions<D> {
    /// Create an assertion surface over a driver
    #[must_use]
    pub const fn new(driver: D) -> Self {
        Self { driver }
    }

    /// The injected driver
    #[must_use]
    pub const fn driver(&self) -> &D {
        &self.driver
    }

    /// Assert that `expected` can be found somewhere in the table.
    ///
    /// # Errors
    ///
    /// Fails with `Table identified by '<locator>' should have contained
    /// text '<expected>'.` when the driver reports absence.
    pub fn table_should_contain(&self, table_locator: &str, expected: &str) -> TablaResult<()> {
        let message = format!(
            "Table identified by '{table_locator}' should have contained text '{expected}'."
        );
        self.check(&TableQuery::anywhere(table_locator, expected), &message)
    }

    /// Assert that the table header, i.e. any `th` element, contains
    /// `expected`.
    ///
    /// # Errors
    ///
    /// Fails when no header cell contains the text.
    pub fn table_header_should_contain(
        &self,
        table_locator: &str,
        expected: &str,
    ) -> TablaResult<()> {
        let message = format!(
            "Header in table identified by '{table_locator}' should have contained text '{expected}'."
        );
        self.check(&TableQuery::header(table_locator, expected), &message)
    }

    /// Assert that the table footer, i.e. any `td` element inside a
    /// `tfoot`, contains `expected`.
    ///
    /// # Errors
    ///
    /// Fails when no footer cell contains the text.
    pub fn table_footer_should_contain(
        &self,
        table_locator: &str,
        expected: &str,
    ) -> TablaResult<()> {
        let message = format!(
            "Footer in table identified by '{table_locator}' should have contained text '{expected}'."
        );
        self.check(&TableQuery::footer(table_locator, expected), &message)
    }

    /// Assert that the `row`-th table row contains `expected`. The
    /// uppermost row is row number 1; cells spanning multiple rows match
    /// only at their uppermost row.
    ///
    /// Intended for body rows; use [`Self::table_header_should_contain`]
    /// or [`Self::table_footer_should_contain`] for header/footer
    /// content. Known limitation: the positional selector counts every
    /// `tr` child of its parent, so header rows that share a parent with
    /// the data rows are counted too (see [`crate::TableRegion::Row`]).
    ///
    /// # Errors
    ///
    /// Fails when the row does not contain the text.
    pub fn table_row_should_contain(
        &self,
        table_locator: &str,
        row: usize,
        expected: &str,
    ) -> TablaResult<()> {
        let message = format!(
            "Row #{row} in table identified by '{table_locator}' should have contained text '{expected}'."
        );
        self.check(&TableQuery::row(table_locator, row, expected), &message)
    }

    /// Assert that the `column`-th column contains `expected`. The
    /// leftmost column is column number 1; cells spanning multiple
    /// columns count as a single column.
    ///
    /// Data cells are checked first. If that attempt fails because the
    /// content was not found, the same position is retried against header
    /// cells, so the check succeeds whether the matching cell lives in a
    /// data row or a header row. Any other failure kind propagates
    /// immediately without the retry.
    ///
    /// # Errors
    ///
    /// Fails with `Column #<column> in table identified by '<locator>'
    /// should have contained text '<expected>'.` when neither attempt
    /// finds the text.
    pub fn table_column_should_contain(
        &self,
        table_locator: &str,
        column: usize,
        expected: &str,
    ) -> TablaResult<()> {
        let message = format!(
            "Column #{column} in table identified by '{table_locator}' should have contained text '{expected}'."
        );
        let data = TableQuery::column(table_locator, column, CellKind::Data, expected);
        match self
            .driver
            .assert_element_present(&data.selector(), CheckKind::Element, &message)
        {
            Ok(()) => Ok(()),
            Err(failure) if failure.kind == FailureKind::ContentNotFound => {
                let header = TableQuery::column(table_locator, column, CellKind::Header, expected);
                self.driver
                    .assert_element_present(&header.selector(), CheckKind::Element, &message)
                    .map_err(Self::surface)
            }
            Err(failure) => Err(Self::surface(failure)),
        }
    }

    /// Read the content of a table cell. Row and column numbers start
    /// from 1; the driver is addressed with zero-based coordinates.
    ///
    /// # Errors
    ///
    /// Propagates the driver failure (out-of-range coordinates, no such
    /// table) untranslated.
    pub fn get_table_cell(
        &self,
        table_locator: &str,
        row: usize,
        column: usize,
    ) -> TablaResult<String> {
        let path = CellPath::new(table_locator, row, column);
        self.driver.table_cell_text(&path).map_err(Self::surface)
    }

    /// Assert that a certain cell contains `expected`. Row and column
    /// numbers start from 1.
    ///
    /// # Errors
    ///
    /// Fails with `Cell in table '<locator>' in row #<row> and column
    /// #<column> should have contained text '<expected>'.` — both when
    /// the cell read fails for any reason (the underlying failure is
    /// logged, not preserved) and when the retrieved content does not
    /// contain the text.
    pub fn table_cell_should_contain(
        &self,
        table_locator: &str,
        row: usize,
        column: usize,
        expected: &str,
    ) -> TablaResult<()> {
        let message = format!(
            "Cell in table '{table_locator}' in row #{row} and column #{column} should have contained text '{expected}'."
        );
        let content = match self.get_table_cell(table_locator, row, column) {
            Ok(content) => content,
            Err(err) => {
                info!("{err}");
                return Err(TablaError::AssertionFailed { message });
            }
        };
        info!("Cell contains {content}.");
        if content.contains(expected) {
            Ok(())
        } else {
            Err(TablaError::AssertionFailed { message })
        }
    }

    fn check(&self, query: &TableQuery, message: &str) -> TablaResult<()> {
        self.driver
            .assert_element_present(&query.selector(), CheckKind::Element, message)
            .map_err(Self::surface)
    }

    /// Map a driver failure onto the caller-visible error taxonomy.
    /// Lookup failures surface as assertion failures carrying the message
    /// the check was invoked with; everything else keeps its class.
    fn surface(failure: PageFailure) -> TablaError {
        match failure.kind {
            FailureKind::ContentNotFound | FailureKind::ElementNotFound => {
                TablaError::AssertionFailed {
                    message: failure.message,
                }
            }
            FailureKind::Structural => TablaError::StructuralLookup {
                message: failure.message,
            },
            FailureKind::Other => TablaError::Driver {
                message: failure.message,
            },
        }
    }
}
