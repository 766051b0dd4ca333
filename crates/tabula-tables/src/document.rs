//! [`TableDom`] over the in-memory [`tabula_dom::Document`]

use tabula_dom::{Document, NodeId};
use tracing::trace;

use crate::config::TableConfig;
use crate::error::{Result, TableError};
use crate::host::{RowDisplay, TableDom};

/// A data table and its filter input located inside an owned [`Document`]
#[derive(Debug, Clone)]
pub struct DocumentTable {
	doc: Document,
	filter_input: NodeId,
	table: NodeId,
	body: NodeId,
}

impl DocumentTable {
	/// Locates the filter input, the table and its body by the configured ids
	///
	/// Fails with [`TableError::MissingElement`] when either element is absent
	/// and with [`TableError::MissingTableSection`] when the table has no `tbody`.
	pub fn locate(doc: Document, config: &TableConfig) -> Result<Self> {
		let filter_input =
			doc.get_element_by_id(&config.filter_input_id)
				.ok_or_else(|| TableError::MissingElement {
					id: config.filter_input_id.clone(),
				})?;
		let table = doc
			.get_element_by_id(&config.table_id)
			.ok_or_else(|| TableError::MissingElement {
				id: config.table_id.clone(),
			})?;
		let body = doc
			.first_descendant_by_tag(table, "tbody")?
			.ok_or(TableError::MissingTableSection { section: "body" })?;
		Ok(Self {
			doc,
			filter_input,
			table,
			body,
		})
	}

	/// Returns the underlying document
	pub fn document(&self) -> &Document {
		&self.doc
	}

	/// Returns the underlying document mutably
	pub fn document_mut(&mut self) -> &mut Document {
		&mut self.doc
	}

	/// Consumes the host and returns the document
	pub fn into_document(self) -> Document {
		self.doc
	}

	/// Returns the filter input element
	pub fn filter_input(&self) -> NodeId {
		self.filter_input
	}

	/// Returns the table element
	pub fn table(&self) -> NodeId {
		self.table
	}

	/// Returns the `tbody` element
	pub fn body(&self) -> NodeId {
		self.body
	}

	/// Returns the current value of the filter input
	pub fn filter_value(&self) -> Result<&str> {
		Ok(self.doc.value(self.filter_input)?)
	}

	/// Writes the filter input value, as typing would
	pub fn set_filter_value(&mut self, value: &str) -> Result<()> {
		Ok(self.doc.set_value(self.filter_input, value)?)
	}

	/// Returns every `th` in the table in document order
	pub fn headers(&self) -> Result<Vec<NodeId>> {
		Ok(self.doc.descendants_by_tag(self.table, "th")?)
	}

	/// Returns the column a header cell addresses: its position among its
	/// element siblings
	pub fn column_of(&self, header: NodeId) -> Result<Option<usize>> {
		Ok(self.doc.element_index(header)?)
	}

	fn header(&self, column: usize) -> Result<NodeId> {
		let headers = self.headers()?;
		headers
			.get(column)
			.copied()
			.ok_or(TableError::ColumnOutOfRange {
				column,
				columns: headers.len(),
			})
	}

	fn row_cells(&self, row: NodeId) -> Result<Vec<String>> {
		let mut cells = Vec::new();
		for cell in self.doc.element_children(row)? {
			cells.push(self.doc.text_content(cell)?.trim().to_string());
		}
		Ok(cells)
	}

	/// Returns the trimmed text of every cell, row by row, in current order
	pub fn cell_texts(&self) -> Result<Vec<Vec<String>>> {
		let mut rows = Vec::new();
		for row in self.body_rows()? {
			rows.push(self.row_cells(row)?);
		}
		Ok(rows)
	}

	/// Returns the trimmed cell texts of rows that are not hidden
	pub fn visible_cell_texts(&self) -> Result<Vec<Vec<String>>> {
		let mut rows = Vec::new();
		for row in self.body_rows()? {
			if self.row_display(&row)?.is_visible() {
				rows.push(self.row_cells(row)?);
			}
		}
		Ok(rows)
	}
}

impl TableDom for DocumentTable {
	type Row = NodeId;

	fn header_count(&self) -> Result<usize> {
		Ok(self.headers()?.len())
	}

	fn header_has_class(&self, column: usize, class: &str) -> Result<bool> {
		Ok(self.doc.has_class(self.header(column)?, class)?)
	}

	fn add_header_class(&mut self, column: usize, class: &str) -> Result<()> {
		let header = self.header(column)?;
		Ok(self.doc.add_class(header, class)?)
	}

	fn remove_header_class(&mut self, column: usize, class: &str) -> Result<()> {
		let header = self.header(column)?;
		Ok(self.doc.remove_class(header, class)?)
	}

	fn body_rows(&self) -> Result<Vec<NodeId>> {
		Ok(self.doc.descendants_by_tag(self.body, "tr")?)
	}

	fn row_text(&self, row: &NodeId) -> Result<String> {
		Ok(self.doc.text_content(*row)?)
	}

	fn cell_text(&self, row: &NodeId, column: usize) -> Result<Option<String>> {
		let Some(cell) = self.doc.element_children(*row)?.get(column).copied() else {
			return Ok(None);
		};
		if self.doc.tag_name(cell)? != "td" {
			return Ok(None);
		}
		Ok(Some(self.doc.text_content(cell)?))
	}

	fn row_display(&self, row: &NodeId) -> Result<RowDisplay> {
		Ok(self
			.doc
			.style_property(*row, "display")?
			.map(RowDisplay::from_css_value)
			.unwrap_or_default())
	}

	fn set_row_display(&mut self, row: &NodeId, visibility: RowDisplay) -> Result<()> {
		trace!(row = row.index(), ?visibility, "set row display");
		Ok(self
			.doc
			.set_style_property(*row, "display", visibility.as_css_value())?)
	}

	fn replace_body_rows(&mut self, rows: &[NodeId]) -> Result<()> {
		self.doc.clear_children(self.body)?;
		for row in rows {
			self.doc.append_child(self.body, *row)?;
		}
		Ok(())
	}
}
