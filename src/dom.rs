//! In-memory document model
//!
//! An arena of elements and text nodes with the handful of DOM operations the
//! table components need: lookup by id, class lists, inline styles, text
//! content and child reordering. Documents serialize back to HTML.
//!
//! ## Example
//!
//! ```
//! use tabula::dom::Document;
//! use tabula::dom::builder::{td, tr};
//!
//! let mut doc = Document::new();
//! let root = doc.root();
//! let row = tr().child(td().text("Amy")).child(td().text("25")).build_into(&mut doc, root).unwrap();
//!
//! assert_eq!(doc.text_content(row).unwrap(), "Amy25");
//! ```

// Re-export all tabula-dom functionality
pub use tabula_dom::*;
