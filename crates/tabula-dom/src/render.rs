//! HTML serialization of document subtrees

use crate::Document;
use crate::error::Result;
use crate::node::{NodeId, NodeKind};

/// Elements that never have children or a closing tag
const VOID_ELEMENTS: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
	"wbr",
];

/// Escape HTML special characters
///
/// # Examples
///
/// ```
/// use tabula_dom::render::escape;
///
/// assert_eq!(escape("Hello, World!"), "Hello, World!");
/// assert_eq!(escape("5 < 10 & 10 > 5"), "5 &lt; 10 &amp; 10 &gt; 5");
/// assert_eq!(escape("it's \"quoted\""), "it&#x27;s &quot;quoted&quot;");
/// ```
pub fn escape(text: &str) -> String {
	let mut result = String::with_capacity(text.len() + 10);
	for ch in text.chars() {
		match ch {
			'&' => result.push_str("&amp;"),
			'<' => result.push_str("&lt;"),
			'>' => result.push_str("&gt;"),
			'"' => result.push_str("&quot;"),
			'\'' => result.push_str("&#x27;"),
			_ => result.push(ch),
		}
	}
	result
}

/// Returns true for elements serialized without a closing tag
pub fn is_void_element(tag_name: &str) -> bool {
	VOID_ELEMENTS
		.iter()
		.any(|void| void.eq_ignore_ascii_case(tag_name))
}

impl Document {
	/// Serializes a node and its subtree to HTML
	///
	/// Serializing the document root yields the concatenation of its children.
	pub fn to_html(&self, id: NodeId) -> Result<String> {
		let mut out = String::new();
		self.write_html(id, &mut out)?;
		Ok(out)
	}

	fn write_html(&self, id: NodeId, out: &mut String) -> Result<()> {
		match self.kind(id)? {
			NodeKind::Document => {
				for child in self.children(id)? {
					self.write_html(*child, out)?;
				}
			}
			NodeKind::Text(text) => out.push_str(&escape(text)),
			NodeKind::Element(data) => {
				out.push('<');
				out.push_str(&data.tag_name);
				for (name, value) in &data.attributes {
					out.push_str(&format!(" {name}=\"{}\"", escape(value)));
				}
				if !data.classes.is_empty() {
					out.push_str(&format!(" class=\"{}\"", escape(&data.classes.join(" "))));
				}
				if !data.style.is_empty() {
					out.push_str(&format!(" style=\"{}\"", escape(&data.style_text())));
				}
				out.push('>');
				if is_void_element(&data.tag_name) {
					return Ok(());
				}
				for child in self.children(id)? {
					self.write_html(*child, out)?;
				}
				out.push_str("</");
				out.push_str(&data.tag_name);
				out.push('>');
			}
		}
		Ok(())
	}
}
