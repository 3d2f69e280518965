//! Opening attachment: wall-relative placement to world geometry and back.

mod opening;
mod placement;
mod swing;

pub use opening::OpeningGeometry;
pub use placement::{
    locate_anchor, opening_span, PendingOpening, PlacementParams, WallAnchor, PREVIEW_MIN_WIDTH,
};
pub use swing::DoorSwing;
