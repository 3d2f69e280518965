//! The floor-plan document: walls, openings and metadata.

mod ids;
mod io;
mod item;
mod plan;
mod point_xy;
mod wall;

pub use ids::{ItemId, WallId};
pub use item::{
    DoorProps, HingeEdge, Item, ItemKind, OpeningKind, SwingSide, WallAttachment, WindowProps,
};
pub use plan::{Plan, PlanMeta, Units, DEFAULT_GRID_SIZE, PLAN_VERSION};
pub use wall::Wall;
