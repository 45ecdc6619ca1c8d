//! GPU device + surface management.
//!
//! Creates the wgpu adapter/device/queue, configures the window surface and
//! hands out one [`GpuFrame`] (surface texture + encoder) per rendered frame.

mod error;
mod frame;
mod gpu;
mod init;

pub use error::{surface_error_action, SurfaceErrorAction};
pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use init::{choose_alpha_mode, choose_surface_format, GpuInit};
