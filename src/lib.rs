//! Browser-side helpers for drawing DOT graphs into SVG, re-typesetting math
//! and downloading text payloads, plus the Leptos client-side app using them.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
pub mod components;
pub mod config;
pub mod download;
pub mod error;
pub mod graph;
pub mod math;
mod pages;

pub use config::{DownloadOptions, Readiness, RenderOptions};
pub use download::{DownloadTrigger, ScopedAnchor, data_uri};
pub use error::{Error, Result};
pub use graph::{GraphLayout, GraphRenderer, fit_viewport};
pub use math::{MathJaxHub, MathTypesetter, TypesetQueue};

// Top-Level pages
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router which renders the homepage and handles 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />

		// sets the document title
		<Title text="DOT Canvas" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
			</Routes>
		</Router>
	}
}
