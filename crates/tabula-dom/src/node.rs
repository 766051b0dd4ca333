//! Node storage for the document arena

/// Handle to a node inside a [`Document`](crate::Document)
///
/// Handles are only meaningful for the document that created them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
	/// Returns the arena slot of this node
	pub fn index(&self) -> usize {
		self.0
	}
}

/// The kind of a node together with its kind-specific payload
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
	/// The document root
	Document,
	/// An element
	Element(ElementData),
	/// A text node
	Text(String),
}

/// Element payload: tag, attributes, class list, inline style and form value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementData {
	/// Lowercased tag name
	pub tag_name: String,
	/// Attributes other than `class` and `style`, in insertion order
	pub attributes: Vec<(String, String)>,
	/// Class list in insertion order
	pub classes: Vec<String>,
	/// Inline style declarations in insertion order
	pub style: Vec<(String, String)>,
	/// Current value of input-like elements
	pub value: String,
}

impl ElementData {
	pub(crate) fn new(tag_name: &str) -> Self {
		Self {
			tag_name: tag_name.to_ascii_lowercase(),
			..Self::default()
		}
	}

	pub(crate) fn attribute(&self, name: &str) -> Option<&str> {
		self.attributes
			.iter()
			.find(|(key, _)| key.eq_ignore_ascii_case(name))
			.map(|(_, value)| value.as_str())
	}

	pub(crate) fn set_attribute(&mut self, name: &str, value: &str) {
		let name = name.to_ascii_lowercase();
		match self.attributes.iter_mut().find(|(key, _)| *key == name) {
			Some((_, slot)) => *slot = value.to_string(),
			None => self.attributes.push((name, value.to_string())),
		}
	}

	pub(crate) fn style_text(&self) -> String {
		self.style
			.iter()
			.map(|(name, value)| format!("{name}: {value};"))
			.collect::<Vec<_>>()
			.join(" ")
	}

	pub(crate) fn set_style_text(&mut self, text: &str) {
		self.style = text
			.split(';')
			.filter_map(|decl| {
				let (name, value) = decl.split_once(':')?;
				let name = name.trim().to_ascii_lowercase();
				let value = value.trim();
				(!name.is_empty() && !value.is_empty()).then(|| (name, value.to_string()))
			})
			.collect();
	}
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
	pub(crate) parent: Option<NodeId>,
	pub(crate) children: Vec<NodeId>,
	pub(crate) kind: NodeKind,
}

impl Node {
	pub(crate) fn new(kind: NodeKind) -> Self {
		Self {
			parent: None,
			children: Vec::new(),
			kind,
		}
	}
}
