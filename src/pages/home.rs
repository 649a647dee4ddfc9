use leptos::prelude::*;
use log::error;
use web_sys::MouseEvent;

use crate::components::dot_canvas::DotCanvas;
use crate::components::math::MathText;
use crate::download::DownloadTrigger;
use crate::graph::GraphExport;
use crate::graph::dot::{Digraph, DotNode};

/// The classic rain / sprinkler belief network.
fn sample_network() -> Digraph {
	Digraph::new()
		.node_default("rx", "16")
		.node_default("ry", "16")
		.node(DotNode::new("n0").label("Rain"))
		.node(DotNode::new("n1").label("Sprinkler"))
		.node(
			DotNode::new("n2")
				.label("Wet grass")
				.attr("labelStyle", "font-weight: bold;"),
		)
		.edge("n0", "n1")
		.edge("n0", "n2")
		.edge("n1", "n2")
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let dot = RwSignal::new(sample_network().to_string());
	let formula = Signal::derive(|| {
		r"\(P(R \mid W) = \frac{P(W \mid R)\,P(R)}{P(W)}\)".to_string()
	});

	let import_text = RwSignal::new(String::new());
	let import_error = RwSignal::new(None::<String>);

	let export_json = move |_: MouseEvent| {
		let export = GraphExport::dot(dot.get_untracked());
		if let Err(err) = DownloadTrigger::default().download_json("graph.json", &export) {
			error!("export failed: {}", err);
		}
	};
	let import_json = move |_: MouseEvent| {
		match GraphExport::from_json(&import_text.get_untracked()) {
			Ok(export) => {
				dot.set(export.description);
				import_text.set(String::new());
				import_error.set(None);
			}
			Err(err) => {
				error!("import failed: {}", err);
				import_error.set(Some(err.to_string()));
			}
		}
	};
	let download_dot = move |_: MouseEvent| {
		let trigger = DownloadTrigger::with_mime("text/vnd.graphviz");
		if let Err(err) = trigger.download("graph.dot", &dot.get_untracked()) {
			error!("download failed: {}", err);
		}
	};

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="workspace">
				<div class="graph-pane">
					<DotCanvas dot=dot />
					<MathText tex=formula />
				</div>
				<div class="editor-pane">
					<h1>"DOT Canvas"</h1>
					<textarea
						class="dot-editor"
						rows="16"
						prop:value=move || dot.get()
						on:input=move |ev| dot.set(event_target_value(&ev))
					/>
					<div class="actions">
						<button on:click=export_json>"Export JSON"</button>
						<button on:click=download_dot>"Download DOT"</button>
					</div>
					<textarea
						name="loadjson"
						class="json-import"
						rows="6"
						placeholder="Paste an exported graph.json here"
						prop:value=move || import_text.get()
						on:input=move |ev| import_text.set(event_target_value(&ev))
					/>
					<div class="actions">
						<button on:click=import_json>"Import JSON"</button>
					</div>
					{move || {
						import_error.get().map(|message| view! { <p class="import-error">{message}</p> })
					}}
				</div>
			</div>
		</ErrorBoundary>
	}
}
