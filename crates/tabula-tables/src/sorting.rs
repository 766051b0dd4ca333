//! Click-to-sort for table columns
//!
//! The active sort column lives in two places: as an explicit [`SortState`]
//! owned by the interactive table, and as marker classes on the header cells
//! that stylesheets render. [`ColumnSorter`] writes both in one step.

use tracing::debug;

use crate::collate::SortKey;
use crate::config::TableConfig;
use crate::error::{Result, TableError};
use crate::host::TableDom;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
	/// Ascending order
	Ascending,
	/// Descending order
	Descending,
}

impl SortDirection {
	/// Returns the opposite direction
	pub fn toggle(&self) -> Self {
		match self {
			Self::Ascending => Self::Descending,
			Self::Descending => Self::Ascending,
		}
	}

	/// Returns the header marker class for this direction
	pub fn marker_class<'a>(&self, config: &'a TableConfig) -> &'a str {
		match self {
			Self::Ascending => &config.ascending_class,
			Self::Descending => &config.descending_class,
		}
	}
}

/// Which column, if any, the table is sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortState {
	/// No header carries a marker
	#[default]
	Unsorted,
	/// One header carries the marker for `direction`
	Active {
		/// Zero-based column index
		column: usize,
		/// Current direction
		direction: SortDirection,
	},
}

impl SortState {
	/// Reads the state from the header marker classes
	///
	/// The first marked header wins; on a header carrying both markers the
	/// ascending marker wins.
	pub fn from_markers<H: TableDom>(host: &H, config: &TableConfig) -> Result<Self> {
		for column in 0..host.header_count()? {
			if host.header_has_class(column, &config.ascending_class)? {
				return Ok(Self::Active {
					column,
					direction: SortDirection::Ascending,
				});
			}
			if host.header_has_class(column, &config.descending_class)? {
				return Ok(Self::Active {
					column,
					direction: SortDirection::Descending,
				});
			}
		}
		Ok(Self::Unsorted)
	}

	/// Returns the direction a click on `column` sorts in
	///
	/// Only an ascending marker on that same header flips to descending. A
	/// header without a marker counts as descending, so the first click on any
	/// column sorts ascending.
	pub fn next_direction(&self, column: usize) -> SortDirection {
		match self {
			Self::Active {
				column: active,
				direction,
			} if *active == column => direction.toggle(),
			_ => SortDirection::Ascending,
		}
	}

	/// Returns the active column
	pub fn column(&self) -> Option<usize> {
		match self {
			Self::Unsorted => None,
			Self::Active { column, .. } => Some(*column),
		}
	}

	/// Returns the active direction
	pub fn direction(&self) -> Option<SortDirection> {
		match self {
			Self::Unsorted => None,
			Self::Active { direction, .. } => Some(*direction),
		}
	}
}

/// Trait for sortable tables
pub trait Sortable {
	/// Sorts the table by the specified column and direction
	fn sort_by_column(&mut self, column: usize, direction: SortDirection) -> Result<()>;

	/// Returns the current sort column and direction
	fn current_sort(&self) -> SortState;
}

/// Reorders body rows by one column's cell text
#[derive(Debug, Clone, Copy)]
pub struct ColumnSorter<'a> {
	config: &'a TableConfig,
}

impl<'a> ColumnSorter<'a> {
	/// Creates a sorter writing the configured marker classes
	pub fn new(config: &'a TableConfig) -> Self {
		Self { config }
	}

	/// Sorts the body rows by `column` in `direction`
	///
	/// Keys are the trimmed text of each row's `column + 1`-th `td`. Equal keys
	/// keep their relative order in both directions. Every key is read before
	/// anything is written: a row without the cell fails with
	/// [`TableError::MissingCell`] and leaves markers and row order untouched.
	pub fn sort<H: TableDom>(
		&self,
		host: &mut H,
		column: usize,
		direction: SortDirection,
	) -> Result<SortState> {
		let columns = host.header_count()?;
		if column >= columns {
			return Err(TableError::ColumnOutOfRange { column, columns });
		}

		let rows = host.body_rows()?;
		let mut keyed = Vec::with_capacity(rows.len());
		for (index, row) in rows.into_iter().enumerate() {
			let text = host
				.cell_text(&row, column)?
				.ok_or(TableError::MissingCell { row: index, column })?;
			keyed.push((SortKey::new(text.trim()), row));
		}

		self.mark(host, column, direction, columns)?;

		keyed.sort_by(|(a, _), (b, _)| match direction {
			SortDirection::Ascending => a.cmp(b),
			SortDirection::Descending => b.cmp(a),
		});
		let sorted: Vec<H::Row> = keyed.into_iter().map(|(_, row)| row).collect();
		host.replace_body_rows(&sorted)?;

		debug!(column, ?direction, rows = sorted.len(), "sorted table body");
		Ok(SortState::Active { column, direction })
	}

	fn mark<H: TableDom>(
		&self,
		host: &mut H,
		column: usize,
		direction: SortDirection,
		columns: usize,
	) -> Result<()> {
		for header in 0..columns {
			host.remove_header_class(header, &self.config.ascending_class)?;
			host.remove_header_class(header, &self.config.descending_class)?;
		}
		host.add_header_class(column, direction.marker_class(self.config))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_sort_direction_toggle() {
		assert_eq!(SortDirection::Ascending.toggle(), SortDirection::Descending);
		assert_eq!(SortDirection::Descending.toggle(), SortDirection::Ascending);
	}

	#[rstest]
	fn test_marker_class() {
		let config = TableConfig::default();
		assert_eq!(SortDirection::Ascending.marker_class(&config), "th-sort-asc");
		assert_eq!(SortDirection::Descending.marker_class(&config), "th-sort-desc");
	}

	#[rstest]
	#[case(SortState::Unsorted, 0, SortDirection::Ascending)]
	#[case(SortState::Active { column: 0, direction: SortDirection::Ascending }, 0, SortDirection::Descending)]
	#[case(SortState::Active { column: 0, direction: SortDirection::Descending }, 0, SortDirection::Ascending)]
	#[case(SortState::Active { column: 0, direction: SortDirection::Ascending }, 1, SortDirection::Ascending)]
	#[case(SortState::Active { column: 2, direction: SortDirection::Descending }, 1, SortDirection::Ascending)]
	fn test_next_direction(
		#[case] state: SortState,
		#[case] column: usize,
		#[case] expected: SortDirection,
	) {
		assert_eq!(state.next_direction(column), expected);
	}

	#[rstest]
	fn test_state_accessors() {
		let state = SortState::Active {
			column: 3,
			direction: SortDirection::Descending,
		};
		assert_eq!(state.column(), Some(3));
		assert_eq!(state.direction(), Some(SortDirection::Descending));
		assert_eq!(SortState::Unsorted.column(), None);
		assert_eq!(SortState::default(), SortState::Unsorted);
	}
}
