//! Primitives engine crate.
//!
//! Platform + GPU runtime for small rasterization and rendering exercises:
//! CPU rasterizers, column-major camera math, immutable shape descriptors and
//! the wgpu renderers that draw them.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod camera;
pub mod geometry;
pub mod raster;
pub mod render;
pub mod paint;
