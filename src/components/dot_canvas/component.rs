use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::SvgGraphicsElement;

use crate::config::RenderOptions;
use crate::graph::{DagreD3, GraphRenderer};

/// Draws a DOT description into an inline `<svg>`, redrawing whenever the
/// description changes.
#[component]
pub fn DotCanvas(
	#[prop(into)] dot: Signal<String>,
	#[prop(optional)] options: Option<RenderOptions>,
) -> impl IntoView {
	let svg_ref = NodeRef::<leptos::svg::Svg>::new();
	let (error, set_error) = signal(None::<String>);
	let renderer = GraphRenderer::with_options(DagreD3, options.unwrap_or_default());

	Effect::new(move |_| {
		let description = dot.get();
		let Some(svg) = svg_ref.get() else {
			return;
		};
		let target: SvgGraphicsElement = svg.unchecked_into();
		match renderer.render(&description, &target) {
			Ok(()) => set_error.set(None),
			Err(err) => {
				warn!("graph not rendered: {}", err);
				set_error.set(Some(err.to_string()));
			}
		}
	});

	view! {
		<div class="dot-canvas">
			<svg node_ref=svg_ref class="dot-canvas-svg"></svg>
			{move || error.get().map(|message| view! { <p class="dot-canvas-error">{message}</p> })}
		</div>
	}
}
