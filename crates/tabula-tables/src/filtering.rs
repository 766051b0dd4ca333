//! Live text filtering of table rows

use tracing::{debug, trace};

use crate::error::Result;
use crate::host::{RowDisplay, TableDom};

/// Trait for filterable tables
pub trait Filterable {
	/// Shows exactly the rows whose text contains `query`, ignoring case
	fn filter_by(&mut self, query: &str) -> Result<FilterSummary>;

	/// Shows every row
	fn clear_filter(&mut self) -> Result<FilterSummary> {
		self.filter_by("")
	}

	/// Returns the query last applied
	fn current_filter(&self) -> &str;
}

/// Row counts after a filter pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterSummary {
	/// Rows left visible
	pub visible: usize,
	/// Rows hidden
	pub hidden: usize,
}

impl FilterSummary {
	/// Total rows scanned
	pub fn total(&self) -> usize {
		self.visible + self.hidden
	}
}

/// Returns true if `row_text` contains `query`, ignoring case
///
/// The empty query matches every row.
pub fn row_matches(row_text: &str, query: &str) -> bool {
	row_text.to_lowercase().contains(&query.to_lowercase())
}

/// Re-evaluates the visibility of every body row against a query
///
/// Every row is rescanned on each call, so the result depends only on the
/// query and the table content: rows hidden by an earlier query are shown
/// again when they match. Rows are never removed, only hidden.
pub fn filter_rows<H: TableDom>(host: &mut H, query: &str) -> Result<FilterSummary> {
	let mut summary = FilterSummary::default();
	for row in host.body_rows()? {
		let visibility = if row_matches(&host.row_text(&row)?, query) {
			summary.visible += 1;
			RowDisplay::Default
		} else {
			summary.hidden += 1;
			RowDisplay::Hidden
		};
		trace!(?visibility, "filter row");
		host.set_row_display(&row, visibility)?;
	}
	debug!(
		query = %query,
		visible = summary.visible,
		hidden = summary.hidden,
		"filtered table body"
	);
	Ok(summary)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("Amy25", "am", true)]
	#[case("Amy25", "AM", true)]
	#[case("Bob30", "am", false)]
	#[case("Bob30", "", true)]
	#[case("", "", true)]
	#[case("Bob30", "b3", true)]
	#[case("ÉCOLE", "éc", true)]
	fn test_row_matches(#[case] text: &str, #[case] query: &str, #[case] expected: bool) {
		assert_eq!(row_matches(text, query), expected);
	}

	#[rstest]
	fn test_summary_total() {
		let summary = FilterSummary {
			visible: 2,
			hidden: 3,
		};
		assert_eq!(summary.total(), 5);
	}
}
