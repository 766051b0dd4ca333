//! # Tabula
//!
//! Live filtering and click-to-sort for server-rendered HTML data tables.
//!
//! A page renders a text input and a table; Tabula attaches to them and keeps
//! the body rows filtered by the input text and ordered by the last clicked
//! header. The same table logic runs in the browser through `wasm-bindgen` and
//! natively over an in-memory document, which is how it is tested.
//!
//! ## Feature Flags
//!
//! - `toml-config` - Load [`TableConfig`] from TOML documents
//! - `full` - All features enabled
//!
//! ## Quick Example
//!
//! ```
//! use tabula::prelude::*;
//!
//! let config = TableConfig::default();
//! let markup = TableMarkup::from_nullable(
//!     vec!["name".into(), "email".into()],
//!     vec![
//!         vec![Some("Bob".into()), None],
//!         vec![Some("Amy".into()), Some("amy@example.com".into())],
//!     ],
//! );
//! let mut table = DataTable::new(markup.to_document(&config).unwrap(), config).unwrap();
//!
//! table.on_header_click(0).unwrap();
//! table.type_filter("null").unwrap();
//!
//! assert_eq!(table.host().visible_cell_texts().unwrap(), [["Bob", "NULL"]]);
//! ```
//!
//! In the browser, call `attachDataTable()` from the page once the table is
//! in the document.

pub mod dom;
pub mod tables;

pub use tabula_tables::{
	DataTable, DocumentTable, FilterSummary, Filterable, Result, SortDirection, SortState,
	Sortable, TableConfig, TableDom, TableError, TableMarkup,
};

/// Common imports for working with data tables
pub mod prelude {
	pub use tabula_dom::{Document, ElementBuilder, NodeId};
	pub use tabula_tables::{
		DataTable, DocumentTable, FilterSummary, Filterable, SortDirection, SortState, Sortable,
		TableConfig, TableDom, TableError, TableMarkup,
	};
}
