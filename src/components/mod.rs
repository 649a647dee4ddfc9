pub mod dot_canvas;
pub mod math;
