//! GPU rendering.
//!
//! Each renderer owns its pipelines and buffers, builds them lazily on first
//! use, and records into a [`RenderTarget`] whose color attachment was
//! already cleared for the frame. Shader compilation and linking go through
//! [`shader`]; a renderer whose shaders fail logs once and draws nothing.
//!
//! Coordinates: 2D shapes arrive in NDC; meshes arrive in world space with
//! view/projection matrices; the raster canvas covers the whole surface.

mod canvas;
mod ctx;
mod mesh;
mod shape;
pub mod shader;

pub use canvas::CanvasRenderer;
pub use ctx::{RenderCtx, RenderTarget};
pub use mesh::{MeshDraw, MeshRenderer};
pub use shape::ShapeRenderer;
