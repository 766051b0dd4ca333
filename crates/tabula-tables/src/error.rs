//! Error types for tabula-tables

use tabula_dom::DomError;
use thiserror::Error;

/// Error type for table interactivity
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
	/// An element the table is wired to could not be found by id
	#[error("Missing element with id `{id}`")]
	MissingElement {
		/// The id that was looked up
		id: String,
	},

	/// The table lacks its header row or body
	#[error("Table has no {section}")]
	MissingTableSection {
		/// `"header row"` or `"body"`
		section: &'static str,
	},

	/// A body row has fewer cells than the sorted column requires
	#[error("Row {row} has no cell in column {column}")]
	MissingCell {
		/// Zero-based position of the row in the body
		row: usize,
		/// Zero-based column index
		column: usize,
	},

	/// The column index does not address a header cell
	#[error("Column {column} is out of range for {columns} header cells")]
	ColumnOutOfRange {
		/// Requested column
		column: usize,
		/// Number of header cells
		columns: usize,
	},

	/// Invalid configuration
	#[error("Invalid configuration: {0}")]
	Config(String),

	/// Document tree error
	#[error(transparent)]
	Dom(#[from] DomError),

	/// Browser API failure
	#[error("JavaScript error: {0}")]
	Js(String),
}

/// Result type for table interactivity
pub type Result<T> = std::result::Result<T, TableError>;
