//! Error types for tabula-dom

use thiserror::Error;

use crate::NodeId;

/// Error type for document tree operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
	/// The handle does not belong to this document
	#[error("Unknown node: {0:?}")]
	UnknownNode(NodeId),

	/// The operation requires an element but the node is text or the document root
	#[error("Node {0:?} is not an element")]
	NotAnElement(NodeId),

	/// The node is not a child of the given parent
	#[error("Node {child:?} is not a child of {parent:?}")]
	NotAChild {
		/// Expected parent
		parent: NodeId,
		/// Node that was looked up
		child: NodeId,
	},

	/// Appending the node would make it its own ancestor
	#[error("Appending {child:?} under {parent:?} would create a cycle")]
	CycleDetected {
		/// Target parent
		parent: NodeId,
		/// Node being appended
		child: NodeId,
	},
}

/// Result type for document tree operations
pub type Result<T> = std::result::Result<T, DomError>;
