//! Immutable geometry descriptors.
//!
//! Exercises build a fresh `Shape` or `Mesh` list every frame from pure
//! functions of their state; renderers only upload and draw them.
//!
//! 2D shapes are authored directly in NDC (`[-1, 1]`, +Y up) with one flat
//! color per shape. 3D meshes carry a color per vertex.

mod mesh;
mod shape;

pub use mesh::{Mesh, Vertex3};
pub use shape::{circle_fan, rectangle, rotate, triangle, Shape, Topology};
