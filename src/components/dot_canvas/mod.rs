mod component;

pub use component::DotCanvas;
