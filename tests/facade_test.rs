//! The facade re-exports the table components and the document model

use rstest::rstest;
use tabula::prelude::*;

#[rstest]
fn test_render_and_sort_through_facade() {
	let config = TableConfig::default();
	let markup = TableMarkup::new(
		vec!["n".to_string()],
		vec![vec!["b".to_string()], vec!["a".to_string()]],
	);

	let html = markup.render_html(&config).unwrap();
	assert!(html.starts_with("<input type=\"text\" id=\"tableFilter\">"));

	let mut table = DataTable::new(markup.to_document(&config).unwrap(), config).unwrap();
	table.on_header_click(0).unwrap();
	assert_eq!(table.host().cell_texts().unwrap(), [["a"], ["b"]]);
}

#[rstest]
fn test_module_paths() {
	let doc = tabula::dom::Document::new();
	assert!(doc.children(doc.root()).unwrap().is_empty());
	assert_eq!(tabula::tables::markup::NULL_TEXT, "NULL");
}
