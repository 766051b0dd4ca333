//! HTML Element Builder
//!
//! Fluent construction of element trees that are materialized into a
//! [`Document`] in one step.
//!
//! ## Example
//!
//! ```
//! use tabula_dom::Document;
//! use tabula_dom::builder::{td, tr};
//!
//! let mut doc = Document::new();
//! let root = doc.root();
//! let row = tr()
//!     .class("odd")
//!     .child(td().text("Bob"))
//!     .child(td().text("30"))
//!     .build_into(&mut doc, root)
//!     .unwrap();
//!
//! assert_eq!(doc.text_content(row).unwrap(), "Bob30");
//! ```

use crate::Document;
use crate::error::Result;
use crate::node::NodeId;

#[derive(Debug, Clone)]
enum Child {
	Element(ElementBuilder),
	Text(String),
}

/// Element description with a fluent API
#[derive(Debug, Clone)]
pub struct ElementBuilder {
	tag_name: String,
	attributes: Vec<(String, String)>,
	value: Option<String>,
	children: Vec<Child>,
}

impl ElementBuilder {
	/// Starts describing an element with the given tag
	pub fn new(tag_name: &str) -> Self {
		Self {
			tag_name: tag_name.to_string(),
			attributes: Vec::new(),
			value: None,
			children: Vec::new(),
		}
	}

	/// Set the class attribute
	///
	/// Multiple calls will overwrite the previous value.
	/// Use space-separated values for multiple classes.
	pub fn class(self, class: &str) -> Self {
		self.attr("class", class)
	}

	/// Set the id attribute
	pub fn id(self, id: &str) -> Self {
		self.attr("id", id)
	}

	/// Set the style attribute
	pub fn style(self, style: &str) -> Self {
		self.attr("style", style)
	}

	/// Set a custom attribute
	pub fn attr(mut self, name: &str, value: &str) -> Self {
		match self.attributes.iter_mut().find(|(key, _)| key == name) {
			Some((_, slot)) => *slot = value.to_string(),
			None => self.attributes.push((name.to_string(), value.to_string())),
		}
		self
	}

	/// Set the current value of an input-like element
	pub fn value(mut self, value: &str) -> Self {
		self.value = Some(value.to_string());
		self
	}

	/// Append a text node
	pub fn text(mut self, text: &str) -> Self {
		self.children.push(Child::Text(text.to_string()));
		self
	}

	/// Append a child element
	pub fn child(mut self, child: ElementBuilder) -> Self {
		self.children.push(Child::Element(child));
		self
	}

	/// Append several child elements
	pub fn children(mut self, children: impl IntoIterator<Item = ElementBuilder>) -> Self {
		self.children
			.extend(children.into_iter().map(Child::Element));
		self
	}

	/// Materializes the description as a new subtree appended under `parent`
	pub fn build_into(self, doc: &mut Document, parent: NodeId) -> Result<NodeId> {
		let id = self.build_detached(doc)?;
		doc.append_child(parent, id)?;
		Ok(id)
	}

	/// Materializes the description as a detached subtree
	pub fn build_detached(self, doc: &mut Document) -> Result<NodeId> {
		let id = doc.create_element(&self.tag_name);
		for (name, value) in &self.attributes {
			doc.set_attribute(id, name, value)?;
		}
		if let Some(value) = &self.value {
			doc.set_value(id, value)?;
		}
		for child in self.children {
			let child_id = match child {
				Child::Element(builder) => builder.build_detached(doc)?,
				Child::Text(text) => doc.create_text(&text),
			};
			doc.append_child(id, child_id)?;
		}
		Ok(id)
	}
}

/// Starts an element with an arbitrary tag
pub fn element(tag_name: &str) -> ElementBuilder {
	ElementBuilder::new(tag_name)
}

macro_rules! tag_fns {
	($($name:ident),* $(,)?) => {
		$(
			#[doc = concat!("Starts a `<", stringify!($name), ">` element")]
			pub fn $name() -> ElementBuilder {
				ElementBuilder::new(stringify!($name))
			}
		)*
	};
}

tag_fns!(div, span, input, table, thead, tbody, tr, th, td);

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_builder_materializes_nested_tree() {
		let mut doc = Document::new();
		let root = doc.root();
		let table_id = table()
			.id("dataTable")
			.child(thead().child(tr().child(th().text("Name"))))
			.child(tbody().child(tr().child(td().text("Amy"))))
			.build_into(&mut doc, root)
			.unwrap();

		assert_eq!(doc.get_element_by_id("dataTable"), Some(table_id));
		assert_eq!(doc.descendants_by_tag(table_id, "td").unwrap().len(), 1);
		assert_eq!(doc.text_content(table_id).unwrap(), "NameAmy");
	}

	#[rstest]
	fn test_builder_sets_classes_and_value() {
		let mut doc = Document::new();
		let id = input()
			.class("filter wide")
			.attr("type", "text")
			.value("am")
			.build_detached(&mut doc)
			.unwrap();

		assert!(doc.has_class(id, "wide").unwrap());
		assert_eq!(doc.value(id).unwrap(), "am");
		assert_eq!(doc.attribute(id, "type").unwrap().as_deref(), Some("text"));
	}

	#[rstest]
	fn test_attr_overwrites_previous_value() {
		let mut doc = Document::new();
		let id = div().id("a").id("b").build_detached(&mut doc).unwrap();
		assert_eq!(doc.attribute(id, "id").unwrap().as_deref(), Some("b"));
	}
}
