use tracing::{debug, trace};

use super::OpeningGeometry;
use crate::config::EditorConfig;
use crate::geometry::find_nearest_wall;
use crate::math::snap_2d::snap_scalar;
use crate::math::Point2;
use crate::model::{Item, ItemId, ItemKind, OpeningKind, Plan, WallAttachment, WallId};

/// Minimum drawn width of an opening preview, so a zero-length span stays visible.
pub const PREVIEW_MIN_WIDTH: f64 = 2.0;

/// Parameters of the opening placement gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementParams {
    /// Maximum pointer distance from a wall.
    pub tolerance: f64,
    /// Smallest span a finished opening gets.
    pub min_width: f64,
    /// Added to the wall thickness for the opening's visual thickness.
    pub margin: f64,
}

impl From<&EditorConfig> for PlacementParams {
    fn from(config: &EditorConfig) -> Self {
        Self {
            tolerance: config.snap_tolerance,
            min_width: config.min_opening_width,
            margin: config.opening_margin,
        }
    }
}

/// A grid-snapped attachment candidate on the wall nearest to a point.
#[derive(Debug, Clone, PartialEq)]
pub struct WallAnchor {
    pub wall_id: WallId,
    /// Snapped offset from the wall's `a` endpoint.
    pub offset: f64,
    pub wall_thickness: f64,
}

/// Maps a world point to the nearest wall within `tolerance`, snapping the
/// projected offset to the plan grid.
#[must_use]
pub fn locate_anchor(p: &Point2, plan: &Plan, tolerance: f64) -> Option<WallAnchor> {
    let near = find_nearest_wall(p, &plan.walls, tolerance)?;
    Some(WallAnchor {
        wall_id: near.wall.id.clone(),
        offset: snap_scalar(near.offset, plan.grid_size()),
        wall_thickness: near.wall.thickness,
    })
}

/// Final `(offset, length)` of an opening spanning two offsets.
#[must_use]
pub fn opening_span(start: f64, end: f64, min_width: f64) -> (f64, f64) {
    (start.min(end), (end - start).abs().max(min_width))
}

/// An opening between its first and second click.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingOpening {
    pub kind: OpeningKind,
    pub wall_id: WallId,
    pub start_offset: f64,
    pub current_offset: f64,
    /// Visual thickness the finished opening will get.
    pub thickness: f64,
}

impl PendingOpening {
    /// Starts a placement at `p`, or returns `None` if no wall is close enough.
    #[must_use]
    pub fn begin(
        kind: OpeningKind,
        p: &Point2,
        plan: &Plan,
        params: &PlacementParams,
    ) -> Option<Self> {
        let anchor = locate_anchor(p, plan, params.tolerance)?;
        debug!(
            kind = kind.as_str(),
            wall = %anchor.wall_id,
            offset = anchor.offset,
            "opening placement started"
        );
        Some(Self {
            kind,
            wall_id: anchor.wall_id,
            start_offset: anchor.offset,
            current_offset: anchor.offset,
            thickness: anchor.wall_thickness + params.margin,
        })
    }

    /// Follows the pointer. Returns `None` (the preview freezes) when the
    /// pointer is not near the wall the placement started on.
    #[must_use]
    pub fn track(&self, p: &Point2, plan: &Plan, params: &PlacementParams) -> Option<Self> {
        let anchor = self.anchor_on_same_wall(p, plan, params)?;
        trace!(offset = anchor.offset, "opening preview moved");
        Some(Self {
            current_offset: anchor.offset,
            ..self.clone()
        })
    }

    /// Completes the placement with a second click at `p`.
    ///
    /// Returns `None` if the click is not near the starting wall.
    #[must_use]
    pub fn finish(&self, p: &Point2, plan: &Plan, params: &PlacementParams) -> Option<Item> {
        let anchor = self.anchor_on_same_wall(p, plan, params)?;
        let (offset, length) = opening_span(self.start_offset, anchor.offset, params.min_width);
        let item = Item {
            id: ItemId::generate(self.kind),
            kind: ItemKind::default_for(self.kind),
            wall_attach: WallAttachment {
                wall_id: self.wall_id.clone(),
                offset,
                length,
            },
            thickness: self.thickness,
        };
        debug!(item = %item.id, offset, length, "opening placement finished");
        Some(item)
    }

    /// Preview rectangle between the start and current offsets.
    #[must_use]
    pub fn preview(&self, plan: &Plan) -> Option<OpeningGeometry> {
        let wall = plan.wall(&self.wall_id)?;
        let lo = self.start_offset.min(self.current_offset);
        let hi = self.start_offset.max(self.current_offset);
        let mut geometry = OpeningGeometry::from_span(wall, lo, hi - lo, self.thickness);
        geometry.width = geometry.width.max(PREVIEW_MIN_WIDTH);
        Some(geometry)
    }

    fn anchor_on_same_wall(
        &self,
        p: &Point2,
        plan: &Plan,
        params: &PlacementParams,
    ) -> Option<WallAnchor> {
        locate_anchor(p, plan, params.tolerance).filter(|a| a.wall_id == self.wall_id)
    }
}
