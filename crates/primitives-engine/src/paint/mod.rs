//! Color model shared by rasterizers and renderers.

pub mod color;

pub use color::{Color, Rgba8};
