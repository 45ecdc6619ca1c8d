use std::fmt;

/// Keyboard key, identified by physical position (US layout names).
///
/// Only the keys the exercises bind are named; everything else maps to
/// `Unknown` with the platform key code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Space,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    Unknown(u32),
}

impl Key {
    const DIGITS: [Key; 10] = [
        Key::Digit0, Key::Digit1, Key::Digit2, Key::Digit3, Key::Digit4,
        Key::Digit5, Key::Digit6, Key::Digit7, Key::Digit8, Key::Digit9,
    ];

    /// Numeric value of a digit key.
    pub fn digit_value(self) -> Option<u8> {
        Self::DIGITS.iter().position(|&k| k == self).map(|i| i as u8)
    }

    /// Digit key for `0..=9`.
    pub fn digit(value: u8) -> Option<Key> {
        Self::DIGITS.get(value as usize).copied()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.digit_value() {
            Some(d) => write!(f, "{d}"),
            None => write!(f, "{self:?}"),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Press/release state shared by keys and mouse buttons.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ButtonState {
    Pressed,
    Released,
}

/// Platform-agnostic input event. Pointer coordinates are logical pixels,
/// origin top-left.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key {
        key: Key,
        state: ButtonState,
        /// Auto-repeat from a held key.
        repeat: bool,
    },
    PointerMoved {
        x: f32,
        y: f32,
    },
    PointerButton {
        button: MouseButton,
        state: ButtonState,
        x: f32,
        y: f32,
    },
    PointerLeft,
    Focused(bool),
}
