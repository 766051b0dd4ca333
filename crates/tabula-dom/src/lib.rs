//! In-memory document model for Tabula
//!
//! This crate provides a small arena-backed HTML document that the table
//! components in `tabula-tables` can operate on outside a browser. It models
//! exactly what rendered data tables need:
//!
//! - **Tree**: elements and text nodes with DOM-style append/move semantics
//! - **Text content**: concatenation of descendant text, as rendered
//! - **Class lists**: duplicate-free marker classes
//! - **Inline style**: per-property declarations, removed when set to empty
//! - **Serialization**: escaped HTML output of any subtree
//!
//! # Example
//!
//! ```
//! use tabula_dom::Document;
//!
//! let mut doc = Document::new();
//! let row = doc.create_element("tr");
//! let cell = doc.create_element("td");
//! let text = doc.create_text("Amy");
//! doc.append_child(cell, text).unwrap();
//! doc.append_child(row, cell).unwrap();
//!
//! doc.set_style_property(row, "display", "none").unwrap();
//! assert_eq!(doc.to_html(row).unwrap(), "<tr style=\"display: none;\"><td>Amy</td></tr>");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod builder;
pub mod document;
pub mod error;
pub mod node;
pub mod render;

// Re-exports for convenience
pub use builder::ElementBuilder;
pub use document::Document;
pub use error::{DomError, Result};
pub use node::{ElementData, NodeId, NodeKind};
