//! Integer rasterization: midpoint circle, Bresenham line, and a CPU pixel canvas.
//!
//! Everything here works in pixel space (`PixelPoint`, origin top-left, +Y down)
//! and is pure CPU code; the canvas is handed to `render::canvas` for display.

pub mod canvas;
pub mod circle;
pub mod line;

pub use canvas::RasterCanvas;
pub use circle::rasterize_circle;
pub use line::rasterize_line;
