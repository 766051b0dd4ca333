//! Browser binding: attach the interactive table to a live page
//!
//! Listeners run one at a time on the page's event loop; each handler borrows
//! the shared [`DataTable`] for the duration of one filter pass or sort.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, EventTarget, HtmlElement, HtmlInputElement};

use crate::config::TableConfig;
use crate::error::{Result, TableError};
use crate::host::{RowDisplay, TableDom};
use crate::interactive::DataTable;

fn js_error(err: JsValue) -> TableError {
	TableError::Js(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

/// [`TableDom`] over a table element of a live document
#[derive(Debug, Clone)]
pub struct WebTable {
	table: Element,
	body: Element,
}

impl WebTable {
	/// Locates the table and its body by the configured id
	pub fn locate(document: &web_sys::Document, config: &TableConfig) -> Result<Self> {
		let table = document
			.get_element_by_id(&config.table_id)
			.ok_or_else(|| TableError::MissingElement {
				id: config.table_id.clone(),
			})?;
		let body = table
			.query_selector("tbody")
			.map_err(js_error)?
			.ok_or(TableError::MissingTableSection { section: "body" })?;
		Ok(Self { table, body })
	}

	/// Returns every `th` in the table in document order
	pub fn headers(&self) -> Result<Vec<Element>> {
		let list = self.table.query_selector_all("th").map_err(js_error)?;
		Ok((0..list.length())
			.filter_map(|i| list.get(i))
			.filter_map(|node| node.dyn_into::<Element>().ok())
			.collect())
	}

	fn header(&self, column: usize) -> Result<Element> {
		let headers = self.headers()?;
		let columns = headers.len();
		headers
			.into_iter()
			.nth(column)
			.ok_or(TableError::ColumnOutOfRange { column, columns })
	}

	fn html_row(row: &Element) -> Result<&HtmlElement> {
		row.dyn_ref::<HtmlElement>()
			.ok_or_else(|| TableError::Js("table row is not an HTML element".to_string()))
	}
}

impl TableDom for WebTable {
	type Row = Element;

	fn header_count(&self) -> Result<usize> {
		Ok(self.headers()?.len())
	}

	fn header_has_class(&self, column: usize, class: &str) -> Result<bool> {
		Ok(self.header(column)?.class_list().contains(class))
	}

	fn add_header_class(&mut self, column: usize, class: &str) -> Result<()> {
		self.header(column)?
			.class_list()
			.add_1(class)
			.map_err(js_error)
	}

	fn remove_header_class(&mut self, column: usize, class: &str) -> Result<()> {
		self.header(column)?
			.class_list()
			.remove_1(class)
			.map_err(js_error)
	}

	fn body_rows(&self) -> Result<Vec<Element>> {
		let list = self.body.query_selector_all("tr").map_err(js_error)?;
		Ok((0..list.length())
			.filter_map(|i| list.get(i))
			.filter_map(|node| node.dyn_into::<Element>().ok())
			.collect())
	}

	fn row_text(&self, row: &Element) -> Result<String> {
		Ok(row.text_content().unwrap_or_default())
	}

	fn cell_text(&self, row: &Element, column: usize) -> Result<Option<String>> {
		let selector = format!("td:nth-child({})", column + 1);
		Ok(row
			.query_selector(&selector)
			.map_err(js_error)?
			.map(|cell| cell.text_content().unwrap_or_default()))
	}

	fn row_display(&self, row: &Element) -> Result<RowDisplay> {
		let value = Self::html_row(row)?
			.style()
			.get_property_value("display")
			.map_err(js_error)?;
		Ok(RowDisplay::from_css_value(&value))
	}

	fn set_row_display(&mut self, row: &Element, visibility: RowDisplay) -> Result<()> {
		let style = Self::html_row(row)?.style();
		let result = match visibility {
			RowDisplay::Default => style.remove_property("display").map(|_| ()),
			RowDisplay::Hidden => style.set_property("display", visibility.as_css_value()),
		};
		result.map_err(js_error)
	}

	fn replace_body_rows(&mut self, rows: &[Element]) -> Result<()> {
		while let Some(child) = self.body.first_child() {
			self.body.remove_child(&child).map_err(js_error)?;
		}
		for row in rows {
			self.body.append_child(row).map_err(js_error)?;
		}
		Ok(())
	}
}

/// A registered event listener, removed from its target on drop
struct Listener {
	target: EventTarget,
	event: &'static str,
	closure: Option<Closure<dyn FnMut(Event)>>,
}

impl Listener {
	fn register(
		target: &EventTarget,
		event: &'static str,
		handler: impl FnMut(Event) + 'static,
	) -> Result<Self> {
		let closure = Closure::<dyn FnMut(Event)>::new(handler);
		let callback: &js_sys::Function = closure.as_ref().unchecked_ref();
		target
			.add_event_listener_with_callback(event, callback)
			.map_err(js_error)?;
		Ok(Self {
			target: target.clone(),
			event,
			closure: Some(closure),
		})
	}

	/// Leaks the closure so the listener stays registered
	fn forget(mut self) {
		if let Some(closure) = self.closure.take() {
			closure.forget();
		}
	}
}

impl Drop for Listener {
	fn drop(&mut self) {
		if let Some(closure) = &self.closure {
			let callback: &js_sys::Function = closure.as_ref().unchecked_ref();
			let _ = self
				.target
				.remove_event_listener_with_callback(self.event, callback);
		}
	}
}

/// A table attached to a live page
///
/// Dropping the handle removes every listener it registered.
pub struct AttachedTable {
	table: Rc<RefCell<DataTable<WebTable>>>,
	listeners: Vec<Listener>,
}

impl AttachedTable {
	/// Returns the shared interactive table
	pub fn table(&self) -> Rc<RefCell<DataTable<WebTable>>> {
		Rc::clone(&self.table)
	}

	/// Keeps the listeners registered for the lifetime of the page
	pub fn forget(self) {
		for listener in self.listeners {
			listener.forget();
		}
	}
}

/// Wires the filter input and every header cell of the configured table
///
/// Missing elements fail initialization with [`TableError::MissingElement`];
/// nothing is attached in that case.
pub fn attach(document: &web_sys::Document, config: TableConfig) -> Result<AttachedTable> {
	config.validate()?;
	let input = document
		.get_element_by_id(&config.filter_input_id)
		.ok_or_else(|| TableError::MissingElement {
			id: config.filter_input_id.clone(),
		})?
		.dyn_into::<HtmlInputElement>()
		.map_err(|_| TableError::Js(format!("#{} is not an input element", config.filter_input_id)))?;
	let host = WebTable::locate(document, &config)?;
	let headers = host.headers()?;
	let table = Rc::new(RefCell::new(DataTable::new(host, config)?));

	let mut listeners = Vec::with_capacity(headers.len() + 1);

	let shared = Rc::clone(&table);
	let source = input.clone();
	listeners.push(Listener::register(&input, "input", move |_event| {
		let Ok(mut table) = shared.try_borrow_mut() else {
			warn_log!("filter input ignored: table is busy");
			return;
		};
		// failures are reported by the table itself
		let _ = table.on_filter_input(&source.value());
	})?);

	for header in headers {
		let shared = Rc::clone(&table);
		let cell = header.clone();
		listeners.push(Listener::register(&header, "click", move |_event| {
			let Some(column) = sibling_index(&cell) else {
				warn_log!("header click ignored: header is detached");
				return;
			};
			let Ok(mut table) = shared.try_borrow_mut() else {
				warn_log!("header click ignored: table is busy");
				return;
			};
			let _ = table.on_header_click(column);
		})?);
	}

	Ok(AttachedTable { table, listeners })
}

/// Position of an element among its parent's element children
fn sibling_index(element: &Element) -> Option<usize> {
	let siblings = element.parent_element()?.children();
	let target: &JsValue = element.as_ref();
	(0..siblings.length()).position(|i| {
		siblings
			.item(i)
			.is_some_and(|sibling| AsRef::<JsValue>::as_ref(&sibling) == target)
	})
}

/// Attaches the default-configured table on the current page for its lifetime
#[wasm_bindgen(js_name = attachDataTable)]
pub fn attach_data_table() -> std::result::Result<(), JsValue> {
	let document = web_sys::window()
		.and_then(|window| window.document())
		.ok_or_else(|| JsValue::from_str("no document available"))?;
	match attach(&document, TableConfig::default()) {
		Ok(attached) => {
			attached.forget();
			Ok(())
		}
		Err(err) => {
			error_log!("data table initialization failed: {err}");
			Err(JsValue::from_str(&err.to_string()))
		}
	}
}
