//! Input events delivered by the host.

use crate::math::{Point2, Vector2};

/// Mouse / pen button of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerButton {
    #[default]
    Primary,
    Middle,
    Secondary,
}

impl PointerButton {
    /// Maps a DOM-style button index (0 primary, 1 middle, 2 secondary).
    #[must_use]
    pub fn from_index(index: u16) -> Option<Self> {
        match index {
            0 => Some(Self::Primary),
            1 => Some(Self::Middle),
            2 => Some(Self::Secondary),
            _ => None,
        }
    }
}

/// Modifier keys held during an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const SHIFT: Self = Self {
        shift: true,
        ..Self::NONE
    };

    pub const CTRL: Self = Self {
        ctrl: true,
        ..Self::NONE
    };

    /// Ctrl on most platforms, Cmd on macOS.
    #[must_use]
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// A pointer down, move or up event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Position in client coordinates.
    pub client: Point2,
    pub button: PointerButton,
    pub modifiers: Modifiers,
    /// Raw screen-space movement since the previous pointer event.
    pub movement: Vector2,
}

impl PointerEvent {
    /// A primary-button event at `client` with no modifiers or movement.
    #[must_use]
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            client: Point2::new(x, y),
            button: PointerButton::Primary,
            modifiers: Modifiers::NONE,
            movement: Vector2::zeros(),
        }
    }

    #[must_use]
    pub fn with_button(self, button: PointerButton) -> Self {
        Self { button, ..self }
    }

    #[must_use]
    pub fn with_modifiers(self, modifiers: Modifiers) -> Self {
        Self { modifiers, ..self }
    }

    #[must_use]
    pub fn with_movement(self, dx: f64, dy: f64) -> Self {
        Self {
            movement: Vector2::new(dx, dy),
            ..self
        }
    }
}

/// A wheel event; positive `delta_y` scrolls down (zooms out).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelEvent {
    pub client: Point2,
    pub delta_y: f64,
}

/// Keys the editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Delete,
    Backspace,
    BracketLeft,
    BracketRight,
    /// Any other printable key, lowercased.
    Char(char),
}

impl Key {
    /// Parses a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "Escape" | "Esc" => Some(Self::Escape),
            "Delete" => Some(Self::Delete),
            "Backspace" => Some(Self::Backspace),
            "[" => Some(Self::BracketLeft),
            "]" => Some(Self::BracketRight),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(Self::Char(c.to_ascii_lowercase())),
                    _ => None,
                }
            }
        }
    }
}

/// A key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    #[must_use]
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    #[must_use]
    pub fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::NONE)
    }
}
