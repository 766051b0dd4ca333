//! Structured log output of filter and sort passes

#![cfg(not(target_arch = "wasm32"))]

use std::io;
use std::sync::{Arc, Mutex};

use rstest::*;
use tabula_tables::{DataTable, DocumentTable, TableConfig, TableMarkup};
use tracing::Level;

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedLogs {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.0.lock().unwrap().extend_from_slice(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

impl CapturedLogs {
	fn output(&self) -> String {
		String::from_utf8_lossy(&self.0.lock().unwrap()).to_string()
	}

	fn capture<T>(&self, f: impl FnOnce() -> T) -> T {
		let writer = self.clone();
		let subscriber = tracing_subscriber::fmt()
			.with_ansi(false)
			.without_time()
			.with_max_level(Level::TRACE)
			.with_writer(move || writer.clone())
			.finish();
		tracing::subscriber::with_default(subscriber, f)
	}
}

#[fixture]
fn people() -> DataTable<DocumentTable> {
	let config = TableConfig::default();
	let markup = TableMarkup::new(
		vec!["Name".to_string(), "Age".to_string()],
		vec![
			vec!["Bob".to_string(), "30".to_string()],
			vec!["Amy".to_string(), "25".to_string()],
		],
	);
	DataTable::new(markup.to_document(&config).unwrap(), config).unwrap()
}

#[rstest]
fn test_filter_logs_row_visibility(mut people: DataTable<DocumentTable>) {
	let logs = CapturedLogs::default();

	logs.capture(|| people.type_filter("am").unwrap());

	let output = logs.output();
	assert!(output.contains("filter row visibility=Hidden"), "{output}");
	assert!(output.contains("filter row visibility=Default"), "{output}");
	assert!(output.contains("visible=1 hidden=1"), "{output}");
}

#[rstest]
fn test_sort_logs_pass(mut people: DataTable<DocumentTable>) {
	let logs = CapturedLogs::default();

	logs.capture(|| people.on_header_click(1).unwrap());

	let output = logs.output();
	assert!(output.contains("sorted table body"), "{output}");
	assert!(output.contains("rows=2"), "{output}");
}

#[rstest]
fn test_failed_sort_logs_error(mut people: DataTable<DocumentTable>) {
	let logs = CapturedLogs::default();

	let result = logs.capture(|| people.on_header_click(9));

	assert!(result.is_err());
	let output = logs.output();
	assert!(output.contains("ERROR"), "{output}");
	assert!(output.contains("sort by column 9"), "{output}");
}
