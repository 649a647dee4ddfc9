use leptos::prelude::*;

use crate::math::{MathJaxHub, MathTypesetter};

/// Shows TeX source and has MathJax re-typeset it after every change.
#[component]
pub fn MathText(#[prop(into)] tex: Signal<String>) -> impl IntoView {
	let typesetter = MathTypesetter::new(MathJaxHub);

	Effect::new(move |_| {
		tex.track();
		typesetter.retypeset();
	});

	view! { <p class="math">{move || tex.get()}</p> }
}
