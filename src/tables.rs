//! Filter and sort components for data tables
//!
//! See [`DataTable`](crate::DataTable) for the interactive table and
//! [`TableMarkup`](crate::TableMarkup) for rendering the markup it attaches to.

// Re-export all tabula-tables functionality
pub use tabula_tables::*;
