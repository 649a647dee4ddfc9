use js_sys::Array;
use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{Element, ResizeObserver, ResizeObserverEntry};

use crate::config::Readiness;

/// Runs `job` on a later turn of the event loop, once `target` is ready
/// according to `readiness`.
///
/// An `Err` returned by `job` is thrown from the callback and so reaches the
/// page's global error handler.
pub(crate) fn when_ready<F>(target: &Element, readiness: Readiness, job: F) -> Result<(), JsValue>
where
	F: FnOnce() -> Result<(), JsValue> + 'static,
{
	match readiness {
		Readiness::Delay(ms) => after_delay(ms, job),
		Readiness::WhenVisible { fallback_delay_ms } => {
			if resize_observer_supported() {
				on_first_layout(target, job)
			} else {
				debug!("ResizeObserver unavailable, drawing after {}ms", fallback_delay_ms);
				after_delay(fallback_delay_ms, job)
			}
		}
	}
}

fn resize_observer_supported() -> bool {
	js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("ResizeObserver")).unwrap_or(false)
}

fn after_delay<F>(ms: u32, job: F) -> Result<(), JsValue>
where
	F: FnOnce() -> Result<(), JsValue> + 'static,
{
	let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
	let callback = Closure::once_into_js(job);
	window.set_timeout_with_callback_and_timeout_and_arguments_0(
		callback.unchecked_ref(),
		ms.min(i32::MAX as u32) as i32,
	)?;
	Ok(())
}

fn on_first_layout<F>(target: &Element, job: F) -> Result<(), JsValue>
where
	F: FnOnce() -> Result<(), JsValue> + 'static,
{
	let mut job = Some(job);
	let callback = Closure::<dyn FnMut(Array, ResizeObserver) -> Result<(), JsValue>>::new(
		move |entries: Array, observer: ResizeObserver| {
			let laid_out = entries
				.iter()
				.filter_map(|entry| entry.dyn_into::<ResizeObserverEntry>().ok())
				.any(|entry| {
					let rect = entry.content_rect();
					rect.width() > 0.0 || rect.height() > 0.0
				});
			if !laid_out {
				return Ok(());
			}
			observer.disconnect();
			match job.take() {
				Some(job) => job(),
				None => Ok(()),
			}
		},
	)
	.into_js_value();

	let observer = ResizeObserver::new(callback.unchecked_ref())?;
	observer.observe(target);
	Ok(())
}
