//! Client-side downloads of text payloads.

use log::debug;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

use crate::config::DownloadOptions;
use crate::error::{Error, Result, describe};

/// Characters escaped by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
	.remove(b'-')
	.remove(b'_')
	.remove(b'.')
	.remove(b'!')
	.remove(b'~')
	.remove(b'*')
	.remove(b'\'')
	.remove(b'(')
	.remove(b')');

/// Builds a `data:` URI that embeds `content` verbatim.
pub fn data_uri(mime: &str, content: &str) -> String {
	format!("data:{},{}", mime, utf8_percent_encode(content, URI_COMPONENT))
}

/// An unattached anchor that exists only to start one download.
///
/// Dropping it detaches the element and clears its `href` so the embedded
/// payload can be released.
#[derive(Debug)]
pub struct ScopedAnchor {
	element: HtmlAnchorElement,
}

impl ScopedAnchor {
	pub fn element(&self) -> &HtmlAnchorElement {
		&self.element
	}

	pub fn href(&self) -> Option<String> {
		self.element.get_attribute("href")
	}

	pub fn filename(&self) -> Option<String> {
		self.element.get_attribute("download")
	}

	/// Clicks the anchor, handing the payload to the browser's download flow.
	pub fn activate(&self) {
		self.element.click();
	}
}

impl Drop for ScopedAnchor {
	fn drop(&mut self) {
		self.element.remove();
		if let Err(err) = self.element.remove_attribute("href") {
			debug!("anchor href not cleared: {}", describe(&err));
		}
	}
}

#[derive(Clone, Debug, Default)]
pub struct DownloadTrigger {
	options: DownloadOptions,
}

impl DownloadTrigger {
	pub fn new(options: DownloadOptions) -> Self {
		Self { options }
	}

	pub fn with_mime(mime: impl Into<String>) -> Self {
		Self::new(DownloadOptions { mime: mime.into() })
	}

	pub fn mime(&self) -> &str {
		&self.options.mime
	}

	/// Builds the anchor for a download without activating it.
	pub fn prepare(&self, filename: &str, content: &str) -> Result<ScopedAnchor> {
		let document = web_sys::window()
			.and_then(|window| window.document())
			.ok_or_else(|| Error::Dom("no document available".into()))?;
		let element: HtmlAnchorElement = document
			.create_element("a")
			.map_err(Error::dom)?
			.dyn_into()
			.map_err(|_| Error::Dom("created element is not an anchor".into()))?;
		let anchor = ScopedAnchor { element };
		anchor
			.element
			.set_attribute("href", &data_uri(&self.options.mime, content))
			.map_err(Error::dom)?;
		anchor
			.element
			.set_attribute("download", filename)
			.map_err(Error::dom)?;
		Ok(anchor)
	}

	/// Starts a download of `content` saved as `filename`.
	///
	/// Whether the browser actually saves the file (size limits, user
	/// settings) is not observable here; only DOM failures are reported.
	pub fn download(&self, filename: &str, content: &str) -> Result<()> {
		debug!("download {} ({} bytes, {})", filename, content.len(), self.options.mime);
		self.prepare(filename, content)?.activate();
		Ok(())
	}

	/// Serializes `value` as pretty JSON and downloads it.
	pub fn download_json<T: Serialize + ?Sized>(&self, filename: &str, value: &T) -> Result<()> {
		let content = serde_json::to_string_pretty(value)?;
		self.download(filename, &content)
	}
}
