//! Element identities and marker classes the table components are wired to
//!
//! The defaults match the markup produced by [`TableMarkup`](crate::markup::TableMarkup):
//! a text input `#tableFilter`, a table `#dataTable`, and the `th-sort-asc` /
//! `th-sort-desc` header markers.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};

/// Default id of the filter text input
pub const DEFAULT_FILTER_INPUT_ID: &str = "tableFilter";
/// Default id of the data table
pub const DEFAULT_TABLE_ID: &str = "dataTable";
/// Default marker class for an ascending sort column
pub const DEFAULT_ASCENDING_CLASS: &str = "th-sort-asc";
/// Default marker class for a descending sort column
pub const DEFAULT_DESCENDING_CLASS: &str = "th-sort-desc";

/// Table wiring configuration
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
	/// Id of the filter text input
	#[serde(default = "default_filter_input_id")]
	pub filter_input_id: String,

	/// Id of the data table
	#[serde(default = "default_table_id")]
	pub table_id: String,

	/// Header class marking the ascending sort column
	#[serde(default = "default_ascending_class")]
	pub ascending_class: String,

	/// Header class marking the descending sort column
	#[serde(default = "default_descending_class")]
	pub descending_class: String,
}

fn default_filter_input_id() -> String {
	DEFAULT_FILTER_INPUT_ID.to_string()
}

fn default_table_id() -> String {
	DEFAULT_TABLE_ID.to_string()
}

fn default_ascending_class() -> String {
	DEFAULT_ASCENDING_CLASS.to_string()
}

fn default_descending_class() -> String {
	DEFAULT_DESCENDING_CLASS.to_string()
}

impl Default for TableConfig {
	fn default() -> Self {
		Self {
			filter_input_id: default_filter_input_id(),
			table_id: default_table_id(),
			ascending_class: default_ascending_class(),
			descending_class: default_descending_class(),
		}
	}
}

impl TableConfig {
	/// Create new configuration with defaults
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the filter input id
	pub fn filter_input_id(mut self, id: impl Into<String>) -> Self {
		self.filter_input_id = id.into();
		self
	}

	/// Sets the table id
	pub fn table_id(mut self, id: impl Into<String>) -> Self {
		self.table_id = id.into();
		self
	}

	/// Sets both sort marker classes
	pub fn marker_classes(mut self, ascending: impl Into<String>, descending: impl Into<String>) -> Self {
		self.ascending_class = ascending.into();
		self.descending_class = descending.into();
		self
	}

	/// Validate configuration
	///
	/// Ids must be non-empty; marker classes must be single, distinct class names.
	pub fn validate(&self) -> Result<()> {
		if self.filter_input_id.is_empty() {
			return Err(TableError::Config("filter_input_id must not be empty".to_string()));
		}
		if self.table_id.is_empty() {
			return Err(TableError::Config("table_id must not be empty".to_string()));
		}
		for (field, class) in [
			("ascending_class", &self.ascending_class),
			("descending_class", &self.descending_class),
		] {
			if class.is_empty() || class.chars().any(char::is_whitespace) {
				return Err(TableError::Config(format!(
					"{field} must be a single class name, got `{class}`"
				)));
			}
		}
		if self.ascending_class == self.descending_class {
			return Err(TableError::Config(
				"ascending_class and descending_class must differ".to_string(),
			));
		}
		Ok(())
	}

	/// Parses and validates configuration from a TOML document
	///
	/// Missing keys fall back to their defaults.
	///
	/// ```
	/// use tabula_tables::TableConfig;
	///
	/// let config = TableConfig::from_toml_str(r#"table_id = "results""#).unwrap();
	/// assert_eq!(config.table_id, "results");
	/// assert_eq!(config.filter_input_id, "tableFilter");
	/// ```
	#[cfg(feature = "toml-config")]
	pub fn from_toml_str(s: &str) -> Result<Self> {
		let config: Self = toml::from_str(s).map_err(|e| TableError::Config(e.to_string()))?;
		config.validate()?;
		Ok(config)
	}
}
