//! Integration tests for the in-memory document

use proptest::prelude::*;
use rstest::*;
use tabula_dom::builder::{table, tbody, td, th, thead, tr};
use tabula_dom::{Document, NodeId};

#[fixture]
fn people_table() -> (Document, NodeId) {
	let mut doc = Document::new();
	let root = doc.root();
	let table_id = table()
		.id("dataTable")
		.child(thead().child(tr().child(th().text("Name")).child(th().text("Age"))))
		.child(
			tbody()
				.child(tr().child(td().text("Bob")).child(td().text("30")))
				.child(tr().child(td().text("Amy")).child(td().text("25"))),
		)
		.build_into(&mut doc, root)
		.unwrap();
	(doc, table_id)
}

#[rstest]
fn test_rows_reappended_in_new_order(people_table: (Document, NodeId)) {
	let (mut doc, table_id) = people_table;
	let body = doc.first_descendant_by_tag(table_id, "tbody").unwrap().unwrap();
	let mut rows = doc.element_children(body).unwrap();
	rows.reverse();

	doc.clear_children(body).unwrap();
	for row in &rows {
		doc.append_child(body, *row).unwrap();
	}

	assert_eq!(doc.element_children(body).unwrap(), rows);
	assert_eq!(doc.text_content(body).unwrap(), "Amy25Bob30");
}

#[rstest]
fn test_hidden_row_keeps_style_after_move(people_table: (Document, NodeId)) {
	let (mut doc, table_id) = people_table;
	let body = doc.first_descendant_by_tag(table_id, "tbody").unwrap().unwrap();
	let first = doc.element_children(body).unwrap()[0];
	doc.set_style_property(first, "display", "none").unwrap();

	doc.append_child(body, first).unwrap();

	assert_eq!(doc.element_children(body).unwrap()[1], first);
	assert_eq!(doc.style_property(first, "display").unwrap(), Some("none"));
}

#[rstest]
fn test_full_table_serialization(people_table: (Document, NodeId)) {
	let (doc, _) = people_table;
	let html = doc.to_html(doc.root()).unwrap();
	assert_eq!(
		html,
		"<table id=\"dataTable\"><thead><tr><th>Name</th><th>Age</th></tr></thead>\
		 <tbody><tr><td>Bob</td><td>30</td></tr><tr><td>Amy</td><td>25</td></tr></tbody></table>"
	);
}

proptest! {
	#[test]
	fn prop_text_content_is_concatenation(cells in prop::collection::vec("[a-zA-Z0-9 ]{0,8}", 0..6)) {
		let mut doc = Document::new();
		let row = doc.create_element("tr");
		for cell in &cells {
			let td = doc.create_element("td");
			let text = doc.create_text(cell);
			doc.append_child(td, text).unwrap();
			doc.append_child(row, td).unwrap();
		}
		prop_assert_eq!(doc.text_content(row).unwrap(), cells.concat());
	}
}
