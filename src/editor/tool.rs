use std::fmt;

use crate::model::OpeningKind;

/// The active editing tool. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tool {
    Select,
    #[default]
    Wall,
    Window,
    Door,
    Pan,
}

impl Tool {
    pub const ALL: [Self; 5] = [Self::Select, Self::Wall, Self::Window, Self::Door, Self::Pan];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Wall => "wall",
            Self::Window => "window",
            Self::Door => "door",
            Self::Pan => "pan",
        }
    }

    /// The kind of opening this tool places, if any.
    #[must_use]
    pub fn opening_kind(self) -> Option<OpeningKind> {
        match self {
            Self::Window => Some(OpeningKind::Window),
            Self::Door => Some(OpeningKind::Door),
            Self::Select | Self::Wall | Self::Pan => None,
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
