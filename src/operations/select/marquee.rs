use tracing::trace;

use crate::math::Rect;
use crate::model::{ItemId, Plan, WallId};
use crate::operations::attach::OpeningGeometry;

/// Elements captured by a marquee rectangle, in plan order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarqueeHits {
    pub walls: Vec<WallId>,
    pub items: Vec<ItemId>,
}

impl MarqueeHits {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty() && self.items.is_empty()
    }
}

/// Rectangle selection over a plan.
///
/// A wall is captured when its centerline segment touches the rectangle. An
/// item is captured when the center of its opening lies inside it. Orphaned
/// items are never captured.
#[derive(Debug)]
pub struct MarqueeSelect {
    rect: Rect,
}

impl MarqueeSelect {
    #[must_use]
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    /// Executes the selection against `plan`.
    #[must_use]
    pub fn execute(&self, plan: &Plan) -> MarqueeHits {
        let walls: Vec<WallId> = plan
            .walls
            .iter()
            .filter(|w| self.rect.intersects_segment(&w.a, &w.b))
            .map(|w| w.id.clone())
            .collect();

        let items: Vec<ItemId> = plan
            .items
            .iter()
            .filter(|item| {
                OpeningGeometry::resolve_in_plan(plan, item)
                    .is_some_and(|g| self.rect.contains(&g.center))
            })
            .map(|item| item.id.clone())
            .collect();

        trace!(walls = walls.len(), items = items.len(), "marquee evaluated");
        MarqueeHits { walls, items }
    }
}
