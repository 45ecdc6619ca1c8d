//! Input subsystem.
//!
//! The public API does not expose winit types; the runtime translates window
//! events through [`platform`] and feeds them to [`InputState::apply_event`].

mod frame;
mod state;
mod types;

pub(crate) mod platform;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{ButtonState, InputEvent, Key, MouseButton};
