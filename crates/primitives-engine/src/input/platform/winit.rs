use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::Window;

use crate::input::{ButtonState, InputEvent, InputState, Key, MouseButton};

/// Translates a winit `WindowEvent` into an `InputEvent`.
///
/// Returns `None` for events the input subsystem does not track.
pub(crate) fn translate_window_event(
    window: &Window,
    state: &InputState,
    event: &WindowEvent,
) -> Option<InputEvent> {
    match event {
        WindowEvent::Focused(f) => Some(InputEvent::Focused(*f)),

        WindowEvent::CursorLeft { .. } => Some(InputEvent::PointerLeft),

        WindowEvent::CursorMoved { position, .. } => {
            let (x, y) = to_logical_f32(window, *position);
            Some(InputEvent::PointerMoved { x, y })
        }

        WindowEvent::MouseInput { state: st, button, .. } => {
            pointer_button(state.pointer_pos, map_mouse_button(*button)?, map_state(*st))
        }

        WindowEvent::KeyboardInput { event, .. } => Some(InputEvent::Key {
            key: map_key(event.physical_key),
            state: map_state(event.state),
            repeat: event.repeat,
        }),

        _ => None,
    }
}

/// winit 0.30 has no cursor query, so buttons carry the tracked position.
/// A press with no known position is dropped; a release still goes through
/// so a drag can end after the pointer left the window.
fn pointer_button(
    pointer_pos: Option<(f32, f32)>,
    button: MouseButton,
    state: ButtonState,
) -> Option<InputEvent> {
    let (x, y) = match (pointer_pos, state) {
        (Some(pos), _) => pos,
        (None, ButtonState::Released) => (0.0, 0.0),
        (None, ButtonState::Pressed) => return None,
    };
    Some(InputEvent::PointerButton { button, state, x, y })
}

fn to_logical_f32(window: &Window, pos: PhysicalPosition<f64>) -> (f32, f32) {
    let logical = pos.to_logical::<f64>(window.scale_factor());
    (logical.x as f32, logical.y as f32)
}

fn map_state(st: ElementState) -> ButtonState {
    match st {
        ElementState::Pressed => ButtonState::Pressed,
        ElementState::Released => ButtonState::Released,
    }
}

fn map_mouse_button(b: WinitMouseButton) -> Option<MouseButton> {
    match b {
        WinitMouseButton::Left => Some(MouseButton::Left),
        WinitMouseButton::Right => Some(MouseButton::Right),
        WinitMouseButton::Middle => Some(MouseButton::Middle),
        WinitMouseButton::Other(v) => Some(MouseButton::Other(v)),
        WinitMouseButton::Back | WinitMouseButton::Forward => None,
    }
}

fn map_key(pk: PhysicalKey) -> Key {
    let PhysicalKey::Code(code) = pk else {
        return Key::Unknown(0);
    };

    match code {
        KeyCode::Escape => Key::Escape,
        KeyCode::Space => Key::Space,

        KeyCode::ArrowUp => Key::ArrowUp,
        KeyCode::ArrowDown => Key::ArrowDown,
        KeyCode::ArrowLeft => Key::ArrowLeft,
        KeyCode::ArrowRight => Key::ArrowRight,

        KeyCode::KeyA => Key::A,
        KeyCode::KeyB => Key::B,
        KeyCode::KeyC => Key::C,
        KeyCode::KeyD => Key::D,
        KeyCode::KeyE => Key::E,
        KeyCode::KeyF => Key::F,
        KeyCode::KeyG => Key::G,
        KeyCode::KeyH => Key::H,
        KeyCode::KeyI => Key::I,
        KeyCode::KeyJ => Key::J,
        KeyCode::KeyK => Key::K,
        KeyCode::KeyL => Key::L,
        KeyCode::KeyM => Key::M,
        KeyCode::KeyN => Key::N,
        KeyCode::KeyO => Key::O,
        KeyCode::KeyP => Key::P,
        KeyCode::KeyQ => Key::Q,
        KeyCode::KeyR => Key::R,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyT => Key::T,
        KeyCode::KeyU => Key::U,
        KeyCode::KeyV => Key::V,
        KeyCode::KeyW => Key::W,
        KeyCode::KeyX => Key::X,
        KeyCode::KeyY => Key::Y,
        KeyCode::KeyZ => Key::Z,

        // Number row and keypad both type digits.
        KeyCode::Digit0 | KeyCode::Numpad0 => Key::Digit0,
        KeyCode::Digit1 | KeyCode::Numpad1 => Key::Digit1,
        KeyCode::Digit2 | KeyCode::Numpad2 => Key::Digit2,
        KeyCode::Digit3 | KeyCode::Numpad3 => Key::Digit3,
        KeyCode::Digit4 | KeyCode::Numpad4 => Key::Digit4,
        KeyCode::Digit5 | KeyCode::Numpad5 => Key::Digit5,
        KeyCode::Digit6 | KeyCode::Numpad6 => Key::Digit6,
        KeyCode::Digit7 | KeyCode::Numpad7 => Key::Digit7,
        KeyCode::Digit8 | KeyCode::Numpad8 => Key::Digit8,
        KeyCode::Digit9 | KeyCode::Numpad9 => Key::Digit9,

        other => Key::Unknown(other as u32),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_fly_camera_keys() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::KeyW)), Key::W);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::ArrowRight)), Key::ArrowRight);
    }

    #[test]
    fn keypad_digits_map_to_digits() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Numpad7)), Key::Digit7);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Digit7)), Key::Digit7);
    }

    #[test]
    fn unbound_key_is_unknown() {
        assert!(matches!(map_key(PhysicalKey::Code(KeyCode::F5)), Key::Unknown(_)));
    }

    #[test]
    fn button_mapping() {
        assert_eq!(map_mouse_button(WinitMouseButton::Left), Some(MouseButton::Left));
        assert_eq!(map_mouse_button(WinitMouseButton::Back), None);
    }

    // ── pointer buttons ───────────────────────────────────────────────────

    #[test]
    fn press_without_position_is_dropped() {
        assert_eq!(pointer_button(None, MouseButton::Left, ButtonState::Pressed), None);
    }

    #[test]
    fn release_without_position_still_ends_a_drag() {
        assert!(matches!(
            pointer_button(None, MouseButton::Left, ButtonState::Released),
            Some(InputEvent::PointerButton { state: ButtonState::Released, .. })
        ));
    }

    #[test]
    fn press_carries_tracked_position() {
        assert_eq!(
            pointer_button(Some((12.5, 40.0)), MouseButton::Right, ButtonState::Pressed),
            Some(InputEvent::PointerButton {
                button: MouseButton::Right,
                state: ButtonState::Pressed,
                x: 12.5,
                y: 40.0,
            })
        );
    }
}
