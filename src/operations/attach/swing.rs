use std::f64::consts::FRAC_PI_2;

use super::OpeningGeometry;
use crate::math::{Point2, Vector2};
use crate::model::{DoorProps, HingeEdge, Item, ItemKind, Plan};

/// Derived door swing: the leaf rotates a quarter turn about `hinge` from
/// `closed_tip` (lying along the wall) to `open_tip` (along the wall normal).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoorSwing {
    pub hinge: Point2,
    pub closed_tip: Point2,
    pub open_tip: Point2,
    /// Leaf length, equal to the opening width.
    pub radius: f64,
}

impl DoorSwing {
    /// Computes the swing for a door opening rectangle.
    ///
    /// With `HingeEdge::Start` the hinge sits on the forward edge, towards the
    /// wall's `b` endpoint, and the closed leaf lies back along the wall. With
    /// `HingeEdge::End` it sits on the edge towards `a`. `SwingSide::Inside`
    /// opens along the wall's left normal, `Outside` against it.
    #[must_use]
    pub fn resolve(opening: &OpeningGeometry, props: &DoorProps) -> Self {
        let radius = opening.width;
        let dir = opening.direction;
        let half = dir * (radius / 2.0);

        let (hinge, closed_tip) = match props.hinge_edge {
            HingeEdge::Start => {
                let hinge = opening.center + half;
                (hinge, hinge - dir * radius)
            }
            HingeEdge::End => {
                let hinge = opening.center - half;
                (hinge, hinge + dir * radius)
            }
        };
        let open_tip = hinge + opening.normal() * (props.swing_side.normal_sign() * radius);

        Self {
            hinge,
            closed_tip,
            open_tip,
            radius,
        }
    }

    /// Swing of `item` within `plan`. Windows and orphaned doors have none.
    #[must_use]
    pub fn for_item(plan: &Plan, item: &Item) -> Option<Self> {
        match &item.kind {
            ItemKind::Door(props) => {
                OpeningGeometry::resolve_in_plan(plan, item).map(|g| Self::resolve(&g, props))
            }
            ItemKind::Window(_) => None,
        }
    }

    /// Returns `true` if the sweep from closed to open tip is counter-clockwise
    /// in world coordinates.
    #[must_use]
    pub fn is_counter_clockwise(&self) -> bool {
        let c = self.closed_tip - self.hinge;
        let o = self.open_tip - self.hinge;
        c.perp(&o) > 0.0
    }

    /// Samples the swing arc with `segments` steps, from closed to open tip.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn arc_points(&self, segments: usize) -> Vec<Point2> {
        let segments = segments.max(1);
        let c = self.closed_tip - self.hinge;
        let start = c.y.atan2(c.x);
        let sweep = if self.is_counter_clockwise() {
            FRAC_PI_2
        } else {
            -FRAC_PI_2
        };
        (0..=segments)
            .map(|i| {
                let a = start + sweep * (i as f64 / segments as f64);
                self.hinge + Vector2::new(a.cos(), a.sin()) * self.radius
            })
            .collect()
    }
}
