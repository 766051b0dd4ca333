//! The interactive data table: filter input and sortable headers over one host

use tabula_dom::{DomError, NodeId};

use crate::config::TableConfig;
use crate::document::DocumentTable;
use crate::error::{Result, TableError};
use crate::filtering::{FilterSummary, Filterable, filter_rows};
use crate::host::TableDom;
use crate::sorting::{ColumnSorter, SortDirection, SortState, Sortable};

/// A table wired for live filtering and click-to-sort
///
/// The host is injected, so the same table logic drives a browser page or an
/// in-memory [`DocumentTable`](crate::document::DocumentTable). Each handler
/// runs to completion against the host before returning.
///
/// # Example
///
/// ```
/// use tabula_tables::{DataTable, TableConfig, TableMarkup};
///
/// let config = TableConfig::default();
/// let markup = TableMarkup::new(
///     vec!["Name".into(), "Age".into()],
///     vec![
///         vec!["Bob".into(), "30".into()],
///         vec!["Amy".into(), "25".into()],
///         vec!["Cid".into(), "25".into()],
///     ],
/// );
/// let host = markup.to_document(&config).unwrap();
/// let mut table = DataTable::new(host, config).unwrap();
///
/// table.on_header_click(1).unwrap();
/// let names: Vec<String> = table
///     .host()
///     .cell_texts()
///     .unwrap()
///     .into_iter()
///     .map(|row| row[0].clone())
///     .collect();
/// assert_eq!(names, ["Amy", "Cid", "Bob"]);
/// ```
#[derive(Debug)]
pub struct DataTable<H: TableDom> {
	host: H,
	config: TableConfig,
	sort_state: SortState,
	filter_query: String,
}

impl<H: TableDom> DataTable<H> {
	/// Wires a table to its host
	///
	/// The sort state starts from whatever marker classes the host already
	/// carries, so server-rendered markers are respected.
	pub fn new(host: H, config: TableConfig) -> Result<Self> {
		config.validate()?;
		let sort_state = SortState::from_markers(&host, &config)?;
		Ok(Self {
			host,
			config,
			sort_state,
			filter_query: String::new(),
		})
	}

	/// Handles a change of the filter input value
	pub fn on_filter_input(&mut self, value: &str) -> Result<FilterSummary> {
		let summary = filter_rows(&mut self.host, value).inspect_err(|err| {
			error_log!("filter by {value:?} failed: {err}");
		})?;
		self.filter_query = value.to_string();
		Ok(summary)
	}

	/// Handles a click on the header cell at `column`
	///
	/// Returns the new sort state. On failure the previous state is kept and
	/// the table is left as it was.
	pub fn on_header_click(&mut self, column: usize) -> Result<SortState> {
		let direction = self.sort_state.next_direction(column);
		match ColumnSorter::new(&self.config).sort(&mut self.host, column, direction) {
			Ok(state) => {
				debug_log!("sort state is now {state:?}");
				self.sort_state = state;
				Ok(state)
			}
			Err(err) => {
				error_log!("sort by column {column} ({direction:?}) failed: {err}");
				Err(err)
			}
		}
	}

	/// Returns the current sort state
	pub fn sort_state(&self) -> SortState {
		self.sort_state
	}

	/// Returns the last applied filter query
	pub fn filter_query(&self) -> &str {
		&self.filter_query
	}

	/// Returns the configuration
	pub fn config(&self) -> &TableConfig {
		&self.config
	}

	/// Returns the host
	pub fn host(&self) -> &H {
		&self.host
	}

	/// Returns the host mutably
	pub fn host_mut(&mut self) -> &mut H {
		&mut self.host
	}

	/// Consumes the table and returns the host
	pub fn into_host(self) -> H {
		self.host
	}
}

impl<H: TableDom> Filterable for DataTable<H> {
	fn filter_by(&mut self, query: &str) -> Result<FilterSummary> {
		self.on_filter_input(query)
	}

	fn current_filter(&self) -> &str {
		self.filter_query()
	}
}

impl<H: TableDom> Sortable for DataTable<H> {
	fn sort_by_column(&mut self, column: usize, direction: SortDirection) -> Result<()> {
		self.sort_state = ColumnSorter::new(&self.config).sort(&mut self.host, column, direction)?;
		Ok(())
	}

	fn current_sort(&self) -> SortState {
		self.sort_state
	}
}

impl DataTable<DocumentTable> {
	/// Types `value` into the filter input and handles the resulting input event
	pub fn type_filter(&mut self, value: &str) -> Result<FilterSummary> {
		self.host.set_filter_value(value)?;
		self.on_filter_input(value)
	}

	/// Clicks a header cell element; its column is its position among its siblings
	pub fn click_header(&mut self, header: NodeId) -> Result<SortState> {
		let column = self
			.host
			.column_of(header)?
			.ok_or(TableError::Dom(DomError::UnknownNode(header)))?;
		self.on_header_click(column)
	}
}
