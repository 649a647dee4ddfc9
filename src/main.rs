// The binary only mounts the app; the library owns every other dependency.
#![allow(unused_crate_dependencies)]

use dot_canvas::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(App)
}
