//! Window + runtime loop.
//!
//! Owns the winit event loop and the single exercise window, and wires them
//! to the GPU, input and time layers.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
