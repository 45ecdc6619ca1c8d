//! Coordinate, vector and matrix types shared across rasterizers, geometry and renderers.
//!
//! Spaces in use:
//! - pixel space: integer `PixelPoint`, origin top-left, +Y down (raster canvas, mouse)
//! - NDC: `Vec2` in `[-1, 1]`, +Y up (2D shape exercises)
//! - world/view space: `Vec3`, right-handed, transformed by column-major `Mat4`

mod mat4;
mod point;
mod vec2;
mod vec3;
mod viewport;

pub use mat4::Mat4;
pub use point::PixelPoint;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use viewport::Viewport;
