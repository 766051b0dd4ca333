//! Arena-backed document tree
//!
//! The [`Document`] owns every node; callers hold [`NodeId`] handles. Tree
//! mutation follows DOM semantics where it matters for table scripts:
//! appending a node that already has a parent moves it, and text content is
//! the concatenation of all descendant text nodes.

use tracing::trace;

use crate::error::{DomError, Result};
use crate::node::{ElementData, Node, NodeId, NodeKind};

/// An in-memory HTML document
#[derive(Debug, Clone)]
pub struct Document {
	nodes: Vec<Node>,
	root: NodeId,
}

impl Default for Document {
	fn default() -> Self {
		Self::new()
	}
}

impl Document {
	/// Creates an empty document containing only the root node
	pub fn new() -> Self {
		Self {
			nodes: vec![Node::new(NodeKind::Document)],
			root: NodeId(0),
		}
	}

	/// Returns the document root
	pub fn root(&self) -> NodeId {
		self.root
	}

	/// Creates a detached element
	pub fn create_element(&mut self, tag_name: &str) -> NodeId {
		self.insert(NodeKind::Element(ElementData::new(tag_name)))
	}

	/// Creates a detached text node
	pub fn create_text(&mut self, text: &str) -> NodeId {
		self.insert(NodeKind::Text(text.to_string()))
	}

	fn insert(&mut self, kind: NodeKind) -> NodeId {
		let id = NodeId(self.nodes.len());
		self.nodes.push(Node::new(kind));
		id
	}

	fn node(&self, id: NodeId) -> Result<&Node> {
		self.nodes.get(id.0).ok_or(DomError::UnknownNode(id))
	}

	fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
		self.nodes.get_mut(id.0).ok_or(DomError::UnknownNode(id))
	}

	fn element(&self, id: NodeId) -> Result<&ElementData> {
		match &self.node(id)?.kind {
			NodeKind::Element(data) => Ok(data),
			_ => Err(DomError::NotAnElement(id)),
		}
	}

	fn element_mut(&mut self, id: NodeId) -> Result<&mut ElementData> {
		match &mut self.node_mut(id)?.kind {
			NodeKind::Element(data) => Ok(data),
			_ => Err(DomError::NotAnElement(id)),
		}
	}

	/// Returns the node kind
	pub fn kind(&self, id: NodeId) -> Result<&NodeKind> {
		Ok(&self.node(id)?.kind)
	}

	/// Returns true if the node is an element
	pub fn is_element(&self, id: NodeId) -> bool {
		matches!(self.kind(id), Ok(NodeKind::Element(_)))
	}

	/// Returns the lowercased tag name of an element
	pub fn tag_name(&self, id: NodeId) -> Result<&str> {
		Ok(self.element(id)?.tag_name.as_str())
	}

	/// Returns the parent of a node, if attached
	pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>> {
		Ok(self.node(id)?.parent)
	}

	/// Returns all child nodes, text included
	pub fn children(&self, id: NodeId) -> Result<&[NodeId]> {
		Ok(&self.node(id)?.children)
	}

	/// Returns the element children of a node
	pub fn element_children(&self, id: NodeId) -> Result<Vec<NodeId>> {
		Ok(self
			.children(id)?
			.iter()
			.copied()
			.filter(|child| self.is_element(*child))
			.collect())
	}

	/// Returns the zero-based position of an element among its element siblings
	///
	/// Detached nodes have no position.
	pub fn element_index(&self, id: NodeId) -> Result<Option<usize>> {
		let Some(parent) = self.parent(id)? else {
			return Ok(None);
		};
		Ok(self
			.element_children(parent)?
			.iter()
			.position(|sibling| *sibling == id))
	}

	fn is_ancestor_or_self(&self, ancestor: NodeId, mut id: NodeId) -> Result<bool> {
		loop {
			if id == ancestor {
				return Ok(true);
			}
			match self.parent(id)? {
				Some(parent) => id = parent,
				None => return Ok(false),
			}
		}
	}

	/// Appends `child` as the last child of `parent`
	///
	/// A child that is already attached elsewhere is moved.
	pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
		self.node(child)?;
		if self.is_ancestor_or_self(child, parent)? {
			return Err(DomError::CycleDetected { parent, child });
		}
		if let Some(old_parent) = self.parent(child)? {
			self.remove_child(old_parent, child)?;
		}
		self.node_mut(parent)?.children.push(child);
		self.node_mut(child)?.parent = Some(parent);
		Ok(())
	}

	/// Detaches `child` from `parent`
	///
	/// The node stays in the arena and can be appended again.
	pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
		let children = &mut self.node_mut(parent)?.children;
		let Some(position) = children.iter().position(|c| *c == child) else {
			return Err(DomError::NotAChild { parent, child });
		};
		children.remove(position);
		self.node_mut(child)?.parent = None;
		Ok(())
	}

	/// Detaches every child of a node
	pub fn clear_children(&mut self, id: NodeId) -> Result<()> {
		let children = std::mem::take(&mut self.node_mut(id)?.children);
		for child in children {
			self.node_mut(child)?.parent = None;
		}
		Ok(())
	}

	/// Returns all descendant nodes in document order, excluding `id` itself
	pub fn descendants(&self, id: NodeId) -> Result<Vec<NodeId>> {
		let mut out = Vec::new();
		let mut stack: Vec<NodeId> = self.children(id)?.iter().rev().copied().collect();
		while let Some(next) = stack.pop() {
			out.push(next);
			stack.extend(self.children(next)?.iter().rev().copied());
		}
		Ok(out)
	}

	/// Returns descendant elements with the given tag name in document order
	pub fn descendants_by_tag(&self, id: NodeId, tag_name: &str) -> Result<Vec<NodeId>> {
		Ok(self
			.descendants(id)?
			.into_iter()
			.filter(|node| {
				self.tag_name(*node)
					.is_ok_and(|tag| tag.eq_ignore_ascii_case(tag_name))
			})
			.collect())
	}

	/// Returns the first descendant element with the given tag name
	pub fn first_descendant_by_tag(&self, id: NodeId, tag_name: &str) -> Result<Option<NodeId>> {
		Ok(self.descendants_by_tag(id, tag_name)?.into_iter().next())
	}

	/// Looks up the first attached element carrying `id` in document order
	pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
		self.descendants(self.root)
			.ok()?
			.into_iter()
			.find(|node| self.attribute(*node, "id").ok().flatten().as_deref() == Some(id))
	}

	/// Returns the concatenated text of all descendant text nodes
	pub fn text_content(&self, id: NodeId) -> Result<String> {
		if let NodeKind::Text(text) = &self.node(id)?.kind {
			return Ok(text.clone());
		}
		let mut out = String::new();
		for node in self.descendants(id)? {
			if let NodeKind::Text(text) = &self.node(node)?.kind {
				out.push_str(text);
			}
		}
		Ok(out)
	}

	/// Replaces all children with a single text node
	pub fn set_text_content(&mut self, id: NodeId, text: &str) -> Result<()> {
		if let NodeKind::Text(existing) = &mut self.node_mut(id)?.kind {
			*existing = text.to_string();
			return Ok(());
		}
		self.clear_children(id)?;
		if !text.is_empty() {
			let text_node = self.create_text(text);
			self.append_child(id, text_node)?;
		}
		Ok(())
	}

	/// Returns an attribute value
	///
	/// `class` and `style` are reconstructed from the class list and the
	/// inline declarations.
	pub fn attribute(&self, id: NodeId, name: &str) -> Result<Option<String>> {
		let element = self.element(id)?;
		if name.eq_ignore_ascii_case("class") {
			return Ok((!element.classes.is_empty()).then(|| element.classes.join(" ")));
		}
		if name.eq_ignore_ascii_case("style") {
			return Ok((!element.style.is_empty()).then(|| element.style_text()));
		}
		Ok(element.attribute(name).map(str::to_string))
	}

	/// Sets an attribute value
	pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> Result<()> {
		let element = self.element_mut(id)?;
		if name.eq_ignore_ascii_case("class") {
			element.classes.clear();
			for class in value.split_whitespace() {
				if !element.classes.iter().any(|c| c == class) {
					element.classes.push(class.to_string());
				}
			}
		} else if name.eq_ignore_ascii_case("style") {
			element.set_style_text(value);
		} else {
			element.set_attribute(name, value);
		}
		Ok(())
	}

	/// Returns the class list of an element
	pub fn classes(&self, id: NodeId) -> Result<&[String]> {
		Ok(&self.element(id)?.classes)
	}

	/// Returns true if the element carries the class
	pub fn has_class(&self, id: NodeId, class: &str) -> Result<bool> {
		Ok(self.element(id)?.classes.iter().any(|c| c == class))
	}

	/// Adds a class unless already present
	pub fn add_class(&mut self, id: NodeId, class: &str) -> Result<()> {
		let element = self.element_mut(id)?;
		if !element.classes.iter().any(|c| c == class) {
			element.classes.push(class.to_string());
		}
		Ok(())
	}

	/// Removes a class if present
	pub fn remove_class(&mut self, id: NodeId, class: &str) -> Result<()> {
		self.element_mut(id)?.classes.retain(|c| c != class);
		Ok(())
	}

	/// Returns an inline style property, if declared
	pub fn style_property(&self, id: NodeId, name: &str) -> Result<Option<&str>> {
		Ok(self
			.element(id)?
			.style
			.iter()
			.find(|(key, _)| key.eq_ignore_ascii_case(name))
			.map(|(_, value)| value.as_str()))
	}

	/// Sets an inline style property; an empty value removes the declaration
	pub fn set_style_property(&mut self, id: NodeId, name: &str, value: &str) -> Result<()> {
		let name = name.to_ascii_lowercase();
		let style = &mut self.element_mut(id)?.style;
		if value.is_empty() {
			style.retain(|(key, _)| *key != name);
			trace!(node = id.0, property = %name, "removed style property");
			return Ok(());
		}
		match style.iter_mut().find(|(key, _)| *key == name) {
			Some((_, slot)) => *slot = value.to_string(),
			None => style.push((name, value.to_string())),
		}
		Ok(())
	}

	/// Returns the current value of an input-like element
	pub fn value(&self, id: NodeId) -> Result<&str> {
		Ok(self.element(id)?.value.as_str())
	}

	/// Sets the current value of an input-like element
	pub fn set_value(&mut self, id: NodeId, value: &str) -> Result<()> {
		self.element_mut(id)?.value = value.to_string();
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn row_with_cells(doc: &mut Document, cells: &[&str]) -> NodeId {
		let tr = doc.create_element("tr");
		for cell in cells {
			let td = doc.create_element("td");
			let text = doc.create_text(cell);
			doc.append_child(td, text).unwrap();
			doc.append_child(tr, td).unwrap();
		}
		tr
	}

	#[rstest]
	fn test_text_content_concatenates_descendants() {
		let mut doc = Document::new();
		let tr = row_with_cells(&mut doc, &["Bob", "30"]);
		assert_eq!(doc.text_content(tr).unwrap(), "Bob30");
	}

	#[rstest]
	fn test_append_moves_attached_node() {
		let mut doc = Document::new();
		let a = doc.create_element("tbody");
		let b = doc.create_element("tbody");
		let tr = doc.create_element("tr");
		doc.append_child(a, tr).unwrap();
		doc.append_child(b, tr).unwrap();
		assert!(doc.children(a).unwrap().is_empty());
		assert_eq!(doc.children(b).unwrap(), &[tr]);
		assert_eq!(doc.parent(tr).unwrap(), Some(b));
	}

	#[rstest]
	fn test_append_rejects_cycle() {
		let mut doc = Document::new();
		let outer = doc.create_element("div");
		let inner = doc.create_element("div");
		doc.append_child(outer, inner).unwrap();
		let err = doc.append_child(inner, outer).unwrap_err();
		assert_eq!(
			err,
			DomError::CycleDetected {
				parent: inner,
				child: outer
			}
		);
	}

	#[rstest]
	fn test_element_index_skips_text_siblings() {
		let mut doc = Document::new();
		let tr = doc.create_element("tr");
		let ws = doc.create_text("\n  ");
		let th0 = doc.create_element("th");
		let ws2 = doc.create_text("\n  ");
		let th1 = doc.create_element("th");
		for child in [ws, th0, ws2, th1] {
			doc.append_child(tr, child).unwrap();
		}
		assert_eq!(doc.element_index(th0).unwrap(), Some(0));
		assert_eq!(doc.element_index(th1).unwrap(), Some(1));
	}

	#[rstest]
	fn test_class_list_has_no_duplicates() {
		let mut doc = Document::new();
		let th = doc.create_element("th");
		doc.add_class(th, "th-sort-asc").unwrap();
		doc.add_class(th, "th-sort-asc").unwrap();
		assert_eq!(doc.classes(th).unwrap().len(), 1);
		doc.remove_class(th, "th-sort-asc").unwrap();
		assert!(!doc.has_class(th, "th-sort-asc").unwrap());
		assert_eq!(doc.attribute(th, "class").unwrap(), None);
	}

	#[rstest]
	#[case("none", Some("none"))]
	#[case("", None)]
	fn test_set_display(#[case] value: &str, #[case] expected: Option<&str>) {
		let mut doc = Document::new();
		let tr = doc.create_element("tr");
		doc.set_style_property(tr, "display", "table-row").unwrap();
		doc.set_style_property(tr, "display", value).unwrap();
		assert_eq!(doc.style_property(tr, "display").unwrap(), expected);
	}

	#[rstest]
	fn test_style_attribute_round_trips_declarations() {
		let mut doc = Document::new();
		let td = doc.create_element("td");
		doc.set_attribute(td, "style", "color: red; DISPLAY:none").unwrap();
		assert_eq!(doc.style_property(td, "display").unwrap(), Some("none"));
		assert_eq!(
			doc.attribute(td, "style").unwrap().as_deref(),
			Some("color: red; display: none;")
		);
	}

	#[rstest]
	fn test_get_element_by_id_requires_attachment() {
		let mut doc = Document::new();
		let table = doc.create_element("table");
		doc.set_attribute(table, "id", "dataTable").unwrap();
		assert_eq!(doc.get_element_by_id("dataTable"), None);
		let root = doc.root();
		doc.append_child(root, table).unwrap();
		assert_eq!(doc.get_element_by_id("dataTable"), Some(table));
	}

	#[rstest]
	fn test_text_node_is_not_an_element() {
		let mut doc = Document::new();
		let text = doc.create_text("x");
		assert_eq!(doc.add_class(text, "a"), Err(DomError::NotAnElement(text)));
	}
}
