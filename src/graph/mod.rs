//! Rendering graph descriptions into SVG containers.

use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsValue;
use web_sys::SvgGraphicsElement;

use crate::config::RenderOptions;
use crate::error::{Error, Result};

mod dagre;
pub mod dot;
pub mod export;
mod schedule;
mod viewport;

pub use dagre::{DagreD3, DotGraph};
pub use export::GraphExport;
pub use viewport::{BBox, Viewport};

/// The external collaborator that understands a graph grammar and knows how
/// to lay out and draw it.
pub trait GraphLayout {
	type Graph: 'static;

	fn parse(&self, description: &str) -> std::result::Result<Self::Graph, JsValue>;

	/// Sets the margins of the overall layout canvas.
	fn set_margins(
		&self,
		graph: &Self::Graph,
		margin_x: f64,
		margin_y: f64,
	) -> std::result::Result<(), JsValue>;

	fn draw(
		&self,
		graph: &Self::Graph,
		target: &SvgGraphicsElement,
	) -> std::result::Result<(), JsValue>;
}

/// Parses, lays out and draws graph descriptions into SVG targets.
pub struct GraphRenderer<L = DagreD3> {
	layout: Rc<L>,
	options: RenderOptions,
}

impl<L> Clone for GraphRenderer<L> {
	fn clone(&self) -> Self {
		Self {
			layout: self.layout.clone(),
			options: self.options.clone(),
		}
	}
}

impl Default for GraphRenderer<DagreD3> {
	fn default() -> Self {
		Self::new(DagreD3)
	}
}

impl<L: GraphLayout + 'static> GraphRenderer<L> {
	pub fn new(layout: L) -> Self {
		Self::with_options(layout, RenderOptions::default())
	}

	pub fn with_options(layout: L, options: RenderOptions) -> Self {
		Self {
			layout: Rc::new(layout),
			options,
		}
	}

	pub fn layout(&self) -> &L {
		&self.layout
	}

	pub fn options(&self) -> &RenderOptions {
		&self.options
	}

	/// Parses `description` now and draws it into `target` on a later turn
	/// of the event loop, then fits the target's viewport to the drawing.
	///
	/// Parse failures are returned before anything is scheduled and leave
	/// `target` untouched. Failures during the deferred draw are thrown from
	/// the callback and reach the page's error handler.
	pub fn render(&self, description: &str, target: &SvgGraphicsElement) -> Result<()> {
		let graph = self.layout.parse(description).map_err(Error::parse)?;
		self.layout
			.set_margins(&graph, self.options.margin_x, self.options.margin_y)
			.map_err(Error::layout)?;

		let (layout, svg, padding) = (self.layout.clone(), target.clone(), self.options.padding);
		schedule::when_ready(target, self.options.readiness, move || {
			layout.draw(&graph, &svg)?;
			let viewport = fit_viewport(&svg, padding)?;
			debug!("graph drawn, viewBox {}", viewport.view_box());
			Ok(())
		})
		.map_err(Error::schedule)?;

		debug!("graph draw scheduled ({:?})", self.options.readiness);
		Ok(())
	}
}

/// Resizes `target` to its drawn content plus `padding` on every side.
pub fn fit_viewport(
	target: &SvgGraphicsElement,
	padding: f64,
) -> std::result::Result<Viewport, JsValue> {
	let bbox = BBox::from(&target.get_b_box()?);
	let viewport = Viewport::around(bbox, padding);
	target.set_attribute("viewBox", &viewport.view_box())?;
	target.set_attribute("width", &viewport.width_px())?;
	target.set_attribute("height", &viewport.height_px())?;
	Ok(viewport)
}
