use std::collections::HashSet;

use crate::coords::PixelPoint;

use super::frame::InputFrame;
use super::types::{ButtonState, InputEvent, Key, MouseButton};

/// Held keys/buttons and pointer position for one window.
#[derive(Debug, Default)]
pub struct InputState {
    pub focused: bool,
    /// Pointer position in logical pixels; `None` when outside the window.
    pub pointer_pos: Option<(f32, f32)>,
    pub keys_down: HashSet<Key>,
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies `ev` and records the resulting transitions in `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Releases are not delivered to an unfocused window.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
            }

            InputEvent::PointerMoved { x, y } => {
                self.pointer_pos = Some((*x, *y));
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::Key { key, state, .. } => match state {
                ButtonState::Pressed => {
                    if self.keys_down.insert(*key) {
                        frame.keys_pressed.insert(*key);
                    }
                }
                ButtonState::Released => {
                    if self.keys_down.remove(key) {
                        frame.keys_released.insert(*key);
                    }
                }
            },

            InputEvent::PointerButton { button, state, x, y } => {
                self.pointer_pos = Some((*x, *y));
                match state {
                    ButtonState::Pressed => {
                        if self.buttons_down.insert(*button) {
                            frame.buttons_pressed.insert(*button);
                        }
                    }
                    ButtonState::Released => {
                        if self.buttons_down.remove(button) {
                            frame.buttons_released.insert(*button);
                        }
                    }
                }
            }
        }

        frame.push_event(ev);
    }

    #[inline]
    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    #[inline]
    pub fn button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }

    /// Pointer position snapped to the pixel grid.
    pub fn pointer_pixel(&self) -> Option<PixelPoint> {
        self.pointer_pos.map(|(x, y)| PixelPoint::from_logical(x, y))
    }
}
