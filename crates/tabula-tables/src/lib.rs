//! Live filtering and click-to-sort for rendered HTML data tables
//!
//! A data table page carries a text input and a table with a header row and
//! a body. This crate wires two independent behaviors onto it:
//!
//! - **Filtering**: on every input change, each body row is shown or hidden
//!   depending on whether its text contains the query, ignoring case
//! - **Sorting**: clicking a header cell reorders the body rows by that
//!   column's cell text using natural collation (`"2"` before `"10"`),
//!   toggling between ascending and descending on repeated clicks
//!
//! Filtering only toggles inline `display`; sorting only moves rows. A hidden
//! row stays hidden when sorted, and filtering after a sort keeps the order.
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     A[DataTable] --> B[filter_rows]
//!     A --> C[ColumnSorter]
//!     A --> D[SortState]
//!     C --> E[collate::SortKey]
//!     B --> F[TableDom]
//!     C --> F
//!     F --> G[DocumentTable]
//!     F --> H[WebTable - wasm32]
//!     I[TableMarkup] --> G
//! ```
//!
//! # Example
//!
//! ```
//! use tabula_tables::{DataTable, TableConfig, TableMarkup};
//!
//! let config = TableConfig::default();
//! let markup = TableMarkup::new(
//!     vec!["Name".into(), "Age".into()],
//!     vec![vec!["Bob".into(), "30".into()], vec!["Amy".into(), "25".into()]],
//! );
//! let mut table = DataTable::new(markup.to_document(&config).unwrap(), config).unwrap();
//!
//! let summary = table.type_filter("am").unwrap();
//! assert_eq!((summary.visible, summary.hidden), (1, 1));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

#[macro_use]
mod logging;

pub mod collate;
pub mod config;
pub mod document;
pub mod error;
pub mod filtering;
pub mod host;
pub mod interactive;
pub mod markup;
pub mod sorting;
#[cfg(target_arch = "wasm32")]
pub mod web;

// Re-exports for convenience
pub use config::TableConfig;
pub use document::DocumentTable;
pub use error::{Result, TableError};
pub use filtering::{FilterSummary, Filterable, filter_rows};
pub use host::{RowDisplay, TableDom};
pub use interactive::DataTable;
pub use markup::TableMarkup;
pub use sorting::{ColumnSorter, SortDirection, SortState, Sortable};
#[cfg(target_arch = "wasm32")]
pub use web::{AttachedTable, WebTable, attach};
