//! Tunables for rendering and downloads.

/// Margin applied to the layout canvas on both axes.
pub const DEFAULT_MARGIN: f64 = 20.0;
/// Extra space added around the drawn bounding box on every side.
pub const DEFAULT_PADDING: f64 = 10.0;
/// Delay used when the host cannot report when the target is laid out.
pub const DEFAULT_FALLBACK_DELAY_MS: u32 = 10;
pub const DEFAULT_MIME: &str = "application/json";

/// When a deferred draw is allowed to run.
///
/// Drawing into a container that is not displayed yet makes some engines
/// throw (Firefox reports `NS_ERROR_FAILURE` from `getBBox`), so the draw is
/// always pushed onto the event loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Readiness {
	/// Wait for the target to report a non-empty layout box. Falls back to a
	/// plain timer when `ResizeObserver` is unavailable.
	WhenVisible { fallback_delay_ms: u32 },
	/// Always wait for a fixed timer.
	Delay(u32),
}

impl Default for Readiness {
	fn default() -> Self {
		Self::WhenVisible {
			fallback_delay_ms: DEFAULT_FALLBACK_DELAY_MS,
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
	pub margin_x: f64,
	pub margin_y: f64,
	pub padding: f64,
	pub readiness: Readiness,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self {
			margin_x: DEFAULT_MARGIN,
			margin_y: DEFAULT_MARGIN,
			padding: DEFAULT_PADDING,
			readiness: Readiness::default(),
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadOptions {
	pub mime: String,
}

impl Default for DownloadOptions {
	fn default() -> Self {
		Self {
			mime: DEFAULT_MIME.into(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn render_defaults_match_layout_constants() {
		let options = RenderOptions::default();
		assert_eq!(options.margin_x, 20.0);
		assert_eq!(options.margin_y, 20.0);
		assert_eq!(options.padding, 10.0);
		assert_eq!(
			options.readiness,
			Readiness::WhenVisible {
				fallback_delay_ms: 10
			}
		);
	}

	#[test]
	fn downloads_default_to_json() {
		assert_eq!(DownloadOptions::default().mime, "application/json");
	}
}
