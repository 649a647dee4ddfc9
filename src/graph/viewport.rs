/// Tight bounding box of drawn content, as reported by `getBBox()`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BBox {
	pub x: f64,
	pub y: f64,
	pub width: f64,
	pub height: f64,
}

impl From<&web_sys::SvgRect> for BBox {
	fn from(rect: &web_sys::SvgRect) -> Self {
		Self {
			x: rect.x() as f64,
			y: rect.y() as f64,
			width: rect.width() as f64,
			height: rect.height() as f64,
		}
	}
}

/// The view box and physical size written back onto a render target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	pub min_x: f64,
	pub min_y: f64,
	pub width: f64,
	pub height: f64,
}

impl Viewport {
	/// Grows `bbox` by `padding` on every side.
	pub fn around(bbox: BBox, padding: f64) -> Self {
		Self {
			min_x: bbox.x - padding,
			min_y: bbox.y - padding,
			width: bbox.width + 2.0 * padding,
			height: bbox.height + 2.0 * padding,
		}
	}

	pub fn view_box(&self) -> String {
		format!(
			"{} {} {} {}",
			js_number(self.min_x),
			js_number(self.min_y),
			js_number(self.width),
			js_number(self.height)
		)
	}

	pub fn width_px(&self) -> String {
		format!("{}px", js_number(self.width))
	}

	pub fn height_px(&self) -> String {
		format!("{}px", js_number(self.height))
	}
}

/// Formats like JavaScript's `Number.prototype.toString`, so `10` stays `10`.
pub(crate) fn js_number(value: f64) -> String {
	let mut buffer = ryu_js::Buffer::new();
	buffer.format(value).to_owned()
}
