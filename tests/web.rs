//! Browser tests for the DOM-facing helpers.
#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use dot_canvas::{
	DownloadTrigger, Error, GraphLayout, GraphRenderer, MathJaxHub, MathTypesetter, Readiness,
	RenderOptions,
};
use js_sys::{Array, Function, Object, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Document, Event, SvgGraphicsElement};

wasm_bindgen_test_configure!(run_in_browser);

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Understands `box <w>x<h>` and draws a single rect at (5, 7).
#[derive(Default)]
struct BoxLayout {
	margins: Cell<Option<(f64, f64)>>,
}

impl GraphLayout for BoxLayout {
	type Graph = (f64, f64);

	fn parse(&self, description: &str) -> Result<(f64, f64), JsValue> {
		description
			.strip_prefix("box ")
			.and_then(|size| size.split_once('x'))
			.and_then(|(w, h)| Some((w.parse().ok()?, h.parse().ok()?)))
			.ok_or_else(|| js_sys::Error::new("syntax error").into())
	}

	fn set_margins(&self, _: &(f64, f64), margin_x: f64, margin_y: f64) -> Result<(), JsValue> {
		self.margins.set(Some((margin_x, margin_y)));
		Ok(())
	}

	fn draw(&self, &(w, h): &(f64, f64), target: &SvgGraphicsElement) -> Result<(), JsValue> {
		let rect = document().create_element_ns(Some(SVG_NS), "rect")?;
		rect.set_attribute("x", "5")?;
		rect.set_attribute("y", "7")?;
		rect.set_attribute("width", &w.to_string())?;
		rect.set_attribute("height", &h.to_string())?;
		target.append_child(&rect)?;
		Ok(())
	}
}

/// Parses anything, then fails to draw.
struct BrokenLayout;

impl GraphLayout for BrokenLayout {
	type Graph = ();

	fn parse(&self, _: &str) -> Result<(), JsValue> {
		Ok(())
	}

	fn set_margins(&self, _: &(), _: f64, _: f64) -> Result<(), JsValue> {
		Ok(())
	}

	fn draw(&self, _: &(), _: &SvgGraphicsElement) -> Result<(), JsValue> {
		Err(js_sys::Error::new("boom").into())
	}
}

fn document() -> Document {
	web_sys::window().unwrap().document().unwrap()
}

fn attached_svg() -> SvgGraphicsElement {
	let svg = document().create_element_ns(Some(SVG_NS), "svg").unwrap();
	document().body().unwrap().append_child(&svg).unwrap();
	svg.unchecked_into()
}

async fn sleep(ms: i32) {
	let promise = Promise::new(&mut |resolve, _| {
		web_sys::window()
			.unwrap()
			.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
			.unwrap();
	});
	JsFuture::from(promise).await.unwrap();
}

fn renderer(readiness: Readiness) -> GraphRenderer<BoxLayout> {
	GraphRenderer::with_options(
		BoxLayout::default(),
		RenderOptions {
			readiness,
			..Default::default()
		},
	)
}

#[wasm_bindgen_test]
async fn delayed_draw_fits_viewport_to_content() {
	let svg = attached_svg();
	let renderer = renderer(Readiness::Delay(10));

	renderer.render("box 100x50", &svg).unwrap();
	assert_eq!(svg.child_element_count(), 0, "draw must be deferred");
	assert_eq!(renderer.layout().margins.get(), Some((20.0, 20.0)));

	sleep(60).await;
	assert_eq!(svg.child_element_count(), 1);
	assert_eq!(svg.get_attribute("viewBox").as_deref(), Some("-5 -3 120 70"));
	assert_eq!(svg.get_attribute("width").as_deref(), Some("120px"));
	assert_eq!(svg.get_attribute("height").as_deref(), Some("70px"));
	svg.remove();
}

#[wasm_bindgen_test]
async fn visible_target_is_drawn_once_laid_out() {
	let svg = attached_svg();
	let renderer = renderer(Readiness::default());

	renderer.render("box 40x30", &svg).unwrap();
	sleep(200).await;
	assert_eq!(svg.child_element_count(), 1);
	assert_eq!(svg.get_attribute("width").as_deref(), Some("60px"));
	assert_eq!(svg.get_attribute("height").as_deref(), Some("50px"));
	svg.remove();
}

#[wasm_bindgen_test]
async fn parse_error_is_synchronous_and_leaves_target_alone() {
	let svg = attached_svg();
	let renderer = renderer(Readiness::Delay(0));

	let err = renderer.render("digraph {", &svg).unwrap_err();
	assert!(matches!(err, Error::Parse(ref message) if message == "syntax error"));
	assert_eq!(renderer.layout().margins.get(), None);

	sleep(30).await;
	assert_eq!(svg.child_element_count(), 0);
	assert_eq!(svg.get_attribute("viewBox"), None);
	svg.remove();
}

#[wasm_bindgen_test]
async fn detached_target_is_never_drawn() {
	let svg = attached_svg();
	let renderer = renderer(Readiness::default());

	renderer.render("box 10x10", &svg).unwrap();
	svg.remove();

	sleep(100).await;
	assert_eq!(svg.child_element_count(), 0);
	assert_eq!(svg.get_attribute("viewBox"), None);
}

#[wasm_bindgen_test]
fn anchor_carries_encoded_payload_and_filename() {
	let anchor = DownloadTrigger::default()
		.prepare("report.json", "{\"a\":1}")
		.unwrap();
	assert_eq!(
		anchor.href().as_deref(),
		Some("data:application/json,%7B%22a%22%3A1%7D")
	);
	assert_eq!(anchor.filename().as_deref(), Some("report.json"));
	assert!(anchor.element().parent_node().is_none());
}

#[wasm_bindgen_test]
fn empty_download_clicks_exactly_once() {
	let anchor = DownloadTrigger::default().prepare("empty.json", "").unwrap();
	assert_eq!(anchor.href().as_deref(), Some("data:application/json,"));
	assert_eq!(anchor.filename().as_deref(), Some("empty.json"));

	let clicks = Rc::new(Cell::new(0));
	let counter = clicks.clone();
	let on_click = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
		ev.prevent_default();
		counter.set(counter.get() + 1);
	});
	anchor
		.element()
		.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
		.unwrap();

	anchor.activate();
	assert_eq!(clicks.get(), 1);

	let element = anchor.element().clone();
	drop(anchor);
	assert_eq!(element.get_attribute("href"), None);
}

/// Renders with a layout whose draw fails and counts the errors that reach
/// the window.
async fn uncaught_draw_errors(readiness: Readiness) -> usize {
	let window = web_sys::window().unwrap();
	let errors = Rc::new(Cell::new(0));
	let counter = errors.clone();
	let on_error = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
		ev.prevent_default();
		counter.set(counter.get() + 1);
	});
	window
		.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref())
		.unwrap();

	let svg = attached_svg();
	let renderer = GraphRenderer::with_options(
		BrokenLayout,
		RenderOptions {
			readiness,
			..Default::default()
		},
	);
	renderer.render("digraph {}", &svg).unwrap();
	sleep(200).await;

	window
		.remove_event_listener_with_callback("error", on_error.as_ref().unchecked_ref())
		.unwrap();
	svg.remove();
	errors.get()
}

#[wasm_bindgen_test]
async fn timer_draw_error_reaches_window() {
	assert_eq!(uncaught_draw_errors(Readiness::Delay(0)).await, 1);
}

#[wasm_bindgen_test]
async fn observer_draw_error_reaches_window() {
	let readiness = Readiness::WhenVisible {
		fallback_delay_ms: 0,
	};
	assert_eq!(uncaught_draw_errors(readiness).await, 1);
}

fn install_mathjax(mathjax: &Object) {
	Reflect::set(&js_sys::global(), &"MathJax".into(), mathjax).unwrap();
}

fn remove_mathjax() {
	Reflect::delete_property(&js_sys::global(), &"MathJax".into()).unwrap();
}

#[wasm_bindgen_test]
fn hub_queue_gets_one_typeset_job_per_call() {
	let hub = Object::new();
	let jobs = Array::new();
	Reflect::set(&hub, &"jobs".into(), &jobs).unwrap();
	let queue = Function::new_with_args("job", "this.jobs.push(job);");
	Reflect::set(&hub, &"Queue".into(), &queue).unwrap();
	let mathjax = Object::new();
	Reflect::set(&mathjax, &"Hub".into(), &hub).unwrap();
	install_mathjax(&mathjax);

	let typesetter = MathTypesetter::new(MathJaxHub);
	typesetter.retypeset();
	typesetter.retypeset();
	typesetter.retypeset();
	remove_mathjax();

	assert_eq!(jobs.length(), 3);
	for job in jobs.iter() {
		let job: Array = job.dyn_into().unwrap();
		assert_eq!(job.length(), 2);
		assert_eq!(job.get(0).as_string().as_deref(), Some("Typeset"));
		assert!(Object::is(&job.get(1), &hub));
	}
}

#[wasm_bindgen_test]
fn mathjax3_falls_back_to_typeset_promise() {
	let mathjax = Object::new();
	Reflect::set(&mathjax, &"calls".into(), &JsValue::from(0)).unwrap();
	let typeset = Function::new_no_args("this.calls += 1; return Promise.resolve();");
	Reflect::set(&mathjax, &"typesetPromise".into(), &typeset).unwrap();
	install_mathjax(&mathjax);

	let typesetter = MathTypesetter::new(MathJaxHub);
	typesetter.retypeset();
	typesetter.retypeset();
	remove_mathjax();

	let calls = Reflect::get(&mathjax, &"calls".into()).unwrap();
	assert_eq!(calls.as_f64(), Some(2.0));
}

#[wasm_bindgen_test]
fn missing_mathjax_is_not_an_error() {
	remove_mathjax();
	MathTypesetter::new(MathJaxHub).retypeset();
}
