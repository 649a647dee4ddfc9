//! Errors surfaced by the rendering and download helpers.

use wasm_bindgen::{JsCast, JsValue};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The layout collaborator rejected the graph description.
	#[error("graph description parse error: {0}")]
	Parse(String),

	#[error("could not configure graph layout: {0}")]
	Layout(String),

	/// The deferred draw could not be scheduled on the event loop.
	#[error("could not schedule draw: {0}")]
	Schedule(String),

	#[error("DOM error: {0}")]
	Dom(String),

	#[error(transparent)]
	Serialize(#[from] serde_json::Error),
}

impl Error {
	pub(crate) fn parse(value: JsValue) -> Self {
		Self::Parse(describe(&value))
	}

	pub(crate) fn layout(value: JsValue) -> Self {
		Self::Layout(describe(&value))
	}

	pub(crate) fn schedule(value: JsValue) -> Self {
		Self::Schedule(describe(&value))
	}

	pub(crate) fn dom(value: JsValue) -> Self {
		Self::Dom(describe(&value))
	}
}

impl From<Error> for JsValue {
	fn from(err: Error) -> Self {
		js_sys::Error::new(&err.to_string()).into()
	}
}

/// Best-effort human readable message for a thrown JS value.
pub fn describe(value: &JsValue) -> String {
	if let Some(err) = value.dyn_ref::<js_sys::Error>() {
		return String::from(err.message());
	}
	value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
