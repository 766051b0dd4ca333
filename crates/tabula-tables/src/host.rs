//! The seam between the table behaviors and a concrete document
//!
//! Filtering and sorting only ever touch a table through [`TableDom`]. The
//! in-memory [`DocumentTable`](crate::document::DocumentTable) and the browser
//! `WebTable` both implement it, so the same behavior code runs in unit tests
//! and on a live page.

use crate::error::Result;

/// Visibility of a body row, expressed through its inline `display` property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowDisplay {
	/// No inline `display`; the row renders with its stylesheet default
	#[default]
	Default,
	/// Inline `display: none`
	Hidden,
}

impl RowDisplay {
	/// Returns the inline `display` value written for this state
	pub fn as_css_value(&self) -> &'static str {
		match self {
			Self::Default => "",
			Self::Hidden => "none",
		}
	}

	/// Interprets an inline `display` value
	pub fn from_css_value(value: &str) -> Self {
		if value.trim().eq_ignore_ascii_case("none") {
			Self::Hidden
		} else {
			Self::Default
		}
	}

	/// Returns true unless hidden
	pub fn is_visible(&self) -> bool {
		matches!(self, Self::Default)
	}
}

/// Document operations a data table needs
///
/// Columns are zero-based and address header cells in document order. A
/// row handle stays valid when the row is moved, so visibility travels with
/// the row across reorders.
pub trait TableDom {
	/// Handle to one body row
	type Row: Clone;

	/// Returns the number of header cells
	fn header_count(&self) -> Result<usize>;

	/// Returns true if the header cell at `column` carries `class`
	fn header_has_class(&self, column: usize, class: &str) -> Result<bool>;

	/// Adds `class` to the header cell at `column`
	fn add_header_class(&mut self, column: usize, class: &str) -> Result<()>;

	/// Removes `class` from the header cell at `column`
	fn remove_header_class(&mut self, column: usize, class: &str) -> Result<()>;

	/// Returns the body rows in document order
	fn body_rows(&self) -> Result<Vec<Self::Row>>;

	/// Returns the full rendered text of a row
	fn row_text(&self, row: &Self::Row) -> Result<String>;

	/// Returns the untrimmed text of the `td` that is the `column + 1`-th
	/// element child of the row, or `None` if there is no such cell
	fn cell_text(&self, row: &Self::Row, column: usize) -> Result<Option<String>>;

	/// Returns the current inline visibility of a row
	fn row_display(&self, row: &Self::Row) -> Result<RowDisplay>;

	/// Sets the inline visibility of a row
	fn set_row_display(&mut self, row: &Self::Row, visibility: RowDisplay) -> Result<()>;

	/// Empties the body and re-appends `rows` in the given order
	fn replace_body_rows(&mut self, rows: &[Self::Row]) -> Result<()>;
}
