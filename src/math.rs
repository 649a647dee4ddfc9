//! Re-typesetting mathematical notation on the page.

use js_sys::{Array, Function, Reflect};
use log::warn;
use wasm_bindgen::prelude::*;

use crate::error::describe;

/// Something that accepts "re-scan the document" jobs. Enqueuing is
/// fire-and-forget: no completion or failure is reported back.
pub trait TypesetQueue {
	fn enqueue_typeset(&self);
}

/// The page's global `MathJax` instance.
#[derive(Clone, Copy, Debug, Default)]
pub struct MathJaxHub;

impl TypesetQueue for MathJaxHub {
	fn enqueue_typeset(&self) {
		if let Err(err) = queue_typeset_job() {
			warn!("MathJax typeset job not queued: {}", describe(&err));
		}
	}
}

fn queue_typeset_job() -> Result<(), JsValue> {
	let mathjax = Reflect::get(&js_sys::global(), &"MathJax".into())?;
	if mathjax.is_undefined() {
		return Err("MathJax is not loaded".into());
	}

	// MathJax 2: MathJax.Hub.Queue(["Typeset", MathJax.Hub])
	let hub = Reflect::get(&mathjax, &"Hub".into())?;
	if hub.is_object() {
		let queue: Function = Reflect::get(&hub, &"Queue".into())?.dyn_into()?;
		queue.call1(&hub, &Array::of2(&"Typeset".into(), &hub))?;
		return Ok(());
	}

	// MathJax 3 has no hub; typesetPromise schedules the same work.
	let typeset: Function = Reflect::get(&mathjax, &"typesetPromise".into())?.dyn_into()?;
	typeset.call0(&mathjax)?;
	Ok(())
}

/// Asks the typesetting engine to re-render math after the page changed.
#[derive(Clone, Debug, Default)]
pub struct MathTypesetter<Q = MathJaxHub> {
	queue: Q,
}

impl<Q: TypesetQueue> MathTypesetter<Q> {
	pub fn new(queue: Q) -> Self {
		Self { queue }
	}

	/// Enqueues one typeset job. Repeated calls enqueue repeated jobs.
	pub fn retypeset(&self) {
		self.queue.enqueue_typeset();
	}

	pub fn queue(&self) -> &Q {
		&self.queue
	}
}
