//! Pinhole camera: an off-center frustum plus a yaw-only fly controller.

mod fly;
mod frustum;

pub use fly::{FlyCamera, FlyControls};
pub use frustum::Frustum;
