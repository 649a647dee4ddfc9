//! Bindings to the `graphlibDot`, `dagreD3` and `d3` globals loaded by the
//! host page.

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::{Element, SvgGraphicsElement};

use super::GraphLayout;

#[wasm_bindgen]
extern "C" {
	/// A graphlib graph produced by `graphlibDot.read`.
	pub type DotGraph;

	#[wasm_bindgen(catch, js_namespace = graphlibDot, js_name = read)]
	fn read_dot(description: &str) -> Result<DotGraph, JsValue>;

	#[wasm_bindgen(method, js_name = graph)]
	fn label(this: &DotGraph) -> JsValue;

	#[wasm_bindgen(method, js_name = setGraph)]
	fn set_label(this: &DotGraph, label: &Object);

	#[wasm_bindgen(js_namespace = dagreD3, js_name = render)]
	fn renderer() -> Function;

	type Selection;

	#[wasm_bindgen(js_namespace = d3, js_name = select)]
	fn select(node: &Element) -> Selection;

	#[wasm_bindgen(catch, method, js_name = call)]
	fn call(this: &Selection, f: &Function, graph: &DotGraph) -> Result<Selection, JsValue>;
}

/// Lays out and draws DOT graphs with dagre-d3.
#[derive(Clone, Copy, Debug, Default)]
pub struct DagreD3;

impl GraphLayout for DagreD3 {
	type Graph = DotGraph;

	fn parse(&self, description: &str) -> Result<DotGraph, JsValue> {
		read_dot(description)
	}

	fn set_margins(&self, graph: &DotGraph, margin_x: f64, margin_y: f64) -> Result<(), JsValue> {
		let label = graph.label();
		let label: Object = if label.is_object() {
			label.unchecked_into()
		} else {
			let fresh = Object::new();
			graph.set_label(&fresh);
			fresh
		};
		Reflect::set(&label, &"marginx".into(), &margin_x.into())?;
		Reflect::set(&label, &"marginy".into(), &margin_y.into())?;
		Ok(())
	}

	fn draw(&self, graph: &DotGraph, target: &SvgGraphicsElement) -> Result<(), JsValue> {
		select(target).call(&renderer(), graph)?;
		Ok(())
	}
}
