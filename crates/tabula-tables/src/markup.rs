//! Server-side markup for a data table and its filter input
//!
//! Query results arrive as column names plus rows of optional values; SQL
//! `NULL` is rendered as the literal text `NULL`. The markup carries the ids
//! and structure the interactive table attaches to.

use tabula_dom::Document;
use tabula_dom::builder::{input, table, tbody, td, th, thead, tr};

use crate::config::TableConfig;
use crate::document::DocumentTable;
use crate::error::Result;

/// Text shown for SQL `NULL`
pub const NULL_TEXT: &str = "NULL";

/// Formats an optional cell value for display
pub fn format_value(value: Option<&str>) -> String {
	value.unwrap_or(NULL_TEXT).to_string()
}

/// Column headers and row cells of a rendered data table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableMarkup {
	columns: Vec<String>,
	rows: Vec<Vec<String>>,
	filter_placeholder: Option<String>,
}

impl TableMarkup {
	/// Creates markup from already formatted cells
	pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
		Self {
			columns,
			rows,
			filter_placeholder: None,
		}
	}

	/// Creates markup from nullable values, formatting `None` as `NULL`
	pub fn from_nullable(columns: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
		let rows: Vec<Vec<String>> = rows
			.into_iter()
			.map(|row| row.iter().map(|v| format_value(v.as_deref())).collect())
			.collect();
		Self::new(columns, rows)
	}

	/// Sets the filter input placeholder text
	pub fn filter_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.filter_placeholder = Some(placeholder.into());
		self
	}

	/// Returns the column headers
	pub fn columns(&self) -> &[String] {
		&self.columns
	}

	/// Returns the row cells
	pub fn rows(&self) -> &[Vec<String>] {
		&self.rows
	}

	fn build(&self, config: &TableConfig) -> Result<Document> {
		let mut doc = Document::new();
		let root = doc.root();

		let mut filter = input().attr("type", "text").id(&config.filter_input_id);
		if let Some(placeholder) = &self.filter_placeholder {
			filter = filter.attr("placeholder", placeholder);
		}
		filter.build_into(&mut doc, root)?;

		let header_row = tr().children(self.columns.iter().map(|name| th().text(name)));
		let body_rows = self
			.rows
			.iter()
			.map(|row| tr().children(row.iter().map(|cell| td().text(cell))));
		table()
			.id(&config.table_id)
			.child(thead().child(header_row))
			.child(tbody().children(body_rows))
			.build_into(&mut doc, root)?;
		Ok(doc)
	}

	/// Renders the filter input followed by the table as HTML
	pub fn render_html(&self, config: &TableConfig) -> Result<String> {
		let doc = self.build(config)?;
		Ok(doc.to_html(doc.root())?)
	}

	/// Builds the markup into a fresh document and locates the table in it
	pub fn to_document(&self, config: &TableConfig) -> Result<DocumentTable> {
		DocumentTable::locate(self.build(config)?, config)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(None, "NULL")]
	#[case(Some("42"), "42")]
	#[case(Some(""), "")]
	fn test_format_value(#[case] value: Option<&str>, #[case] expected: &str) {
		assert_eq!(format_value(value), expected);
	}

	#[rstest]
	fn test_render_html() {
		let markup = TableMarkup::from_nullable(
			vec!["id".to_string(), "note".to_string()],
			vec![vec![Some("1".to_string()), None]],
		)
		.filter_placeholder("Filter rows");

		let html = markup.render_html(&TableConfig::default()).unwrap();
		assert_eq!(
			html,
			"<input type=\"text\" id=\"tableFilter\" placeholder=\"Filter rows\">\
			 <table id=\"dataTable\"><thead><tr><th>id</th><th>note</th></tr></thead>\
			 <tbody><tr><td>1</td><td>NULL</td></tr></tbody></table>"
		);
	}

	#[rstest]
	fn test_render_escapes_cells() {
		let markup = TableMarkup::new(vec!["a<b".to_string()], vec![vec!["x & y".to_string()]]);
		let html = markup.render_html(&TableConfig::default()).unwrap();
		assert!(html.contains("<th>a&lt;b</th>"));
		assert!(html.contains("<td>x &amp; y</td>"));
	}

	#[rstest]
	fn test_to_document_uses_configured_ids() {
		let config = TableConfig::new().table_id("results").filter_input_id("q");
		let markup = TableMarkup::new(vec!["n".to_string()], vec![vec!["1".to_string()]]);
		let host = markup.to_document(&config).unwrap();
		assert_eq!(host.document().get_element_by_id("results"), Some(host.table()));
		assert_eq!(host.document().get_element_by_id("q"), Some(host.filter_input()));
	}

	#[rstest]
	fn test_empty_table_still_has_body() {
		let host = TableMarkup::default()
			.to_document(&TableConfig::default())
			.unwrap();
		assert_eq!(host.cell_texts().unwrap(), Vec::<Vec<String>>::new());
	}
}
