use serde::{Deserialize, Serialize};

use super::{ItemId, WallId};

/// Wall-relative placement of an opening.
///
/// `offset` is the absolute distance from the wall's `a` endpoint along its
/// centerline (not normalized by wall length) and `length` is the span the
/// opening occupies. `offset + length` may exceed the wall length; the
/// overhang is tolerated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WallAttachment {
    pub wall_id: WallId,
    pub offset: f64,
    pub length: f64,
}

/// Which edge of a door opening carries the hinge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HingeEdge {
    /// The forward edge, nearer the wall's `b` endpoint.
    #[default]
    Start,
    /// The trailing edge, nearer the wall's `a` endpoint.
    End,
}

impl HingeEdge {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Start => Self::End,
            Self::End => Self::Start,
        }
    }
}

/// Which side of the wall a door leaf swings into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwingSide {
    /// Along the wall's left normal.
    Inside,
    /// Against the wall's left normal.
    #[default]
    Outside,
}

impl SwingSide {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Inside => Self::Outside,
            Self::Outside => Self::Inside,
        }
    }

    /// Sign applied to the wall's left normal for this side.
    #[must_use]
    pub fn normal_sign(self) -> f64 {
        match self {
            Self::Inside => 1.0,
            Self::Outside => -1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoorProps {
    pub hinge_edge: HingeEdge,
    pub swing_side: SwingSide,
}

/// Window properties. Empty for now; mullions and sill depth would live here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowProps {}

/// The kind of opening a placement tool produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpeningKind {
    Door,
    Window,
}

impl OpeningKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Door => "door",
            Self::Window => "window",
        }
    }
}

/// Variant payload of an opening, tagged as `type` with its `props`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "props", rename_all = "lowercase")]
pub enum ItemKind {
    Door(DoorProps),
    Window(WindowProps),
}

impl ItemKind {
    /// Default variant properties for a freshly placed opening.
    #[must_use]
    pub fn default_for(kind: OpeningKind) -> Self {
        match kind {
            OpeningKind::Door => Self::Door(DoorProps::default()),
            OpeningKind::Window => Self::Window(WindowProps::default()),
        }
    }

    #[must_use]
    pub fn opening_kind(&self) -> OpeningKind {
        match self {
            Self::Door(_) => OpeningKind::Door,
            Self::Window(_) => OpeningKind::Window,
        }
    }
}

/// An opening attached to exactly one wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    #[serde(flatten)]
    pub kind: ItemKind,
    pub wall_attach: WallAttachment,
    /// Visual thickness perpendicular to the wall.
    pub thickness: f64,
}

impl Item {
    #[must_use]
    pub fn is_door(&self) -> bool {
        matches!(self.kind, ItemKind::Door(_))
    }

    #[must_use]
    pub fn door_props(&self) -> Option<&DoorProps> {
        match &self.kind {
            ItemKind::Door(props) => Some(props),
            ItemKind::Window(_) => None,
        }
    }

    /// Returns a copy with the door properties transformed by `f`.
    ///
    /// Non-door items are returned unchanged.
    #[must_use]
    pub fn map_door(&self, f: impl FnOnce(DoorProps) -> DoorProps) -> Self {
        let kind = match self.kind {
            ItemKind::Door(props) => ItemKind::Door(f(props)),
            ItemKind::Window(props) => ItemKind::Window(props),
        };
        Self {
            kind,
            ..self.clone()
        }
    }
}
