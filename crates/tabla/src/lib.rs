//! Tabla: table-content assertions for browser-based end-to-end tests.
//!
//! Tabla (Spanish: "table/board") turns high-level table checks into CSS
//! selector expressions and delegates the actual lookup to an abstract
//! page driver:
//!
//! ```text
//! ┌────────────────┐    ┌─────────────────┐    ┌──────────────────┐
//! │ Test keyword   │    │ Selector        │    │ PageDriver       │
//! │ (row/column/   │───►│ composition     │───►│ (WebDriver, CDP, │
//! │  cell checks)  │    │ (TableQuery)    │    │  in-memory fake) │
//! └────────────────┘    └─────────────────┘    └──────────────────┘
//! ```
//!
//! Tables are identified either by element id or, with the `css=` prefix,
//! by an arbitrary selector expression:
//!
//! ```
//! use tabla::normalize;
//!
//! assert_eq!(normalize("orders"), "css=table#orders");
//! assert_eq!(normalize("css=div.grid > table"), "css=div.grid > table");
//! ```
//!
//! Row and column numbers are 1-based on the keyword surface; the
//! driver's cell-read capability is addressed with zero-based
//! coordinates.

#![warn(missing_docs)]

mod driver;
mod locator;
mod result;
mod table;

pub use driver::{CheckKind, FailureKind, PageDriver, PageFailure};
pub use locator::{normalize, CellKind, CellPath, TableQuery, TableRegion, CSS_PREFIX};
pub use result::{TablaError, TablaResult};
pub use table::TableAssertions;
