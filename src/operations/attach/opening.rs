use nalgebra::Rotation2;

use crate::math::{Point2, Vector2};
use crate::model::{Item, Plan, Wall};

/// World-space rectangle of an opening, aligned with its owning wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpeningGeometry {
    /// Center of the rectangle, on the wall centerline.
    pub center: Point2,
    /// Unit direction of the owning wall.
    pub direction: Vector2,
    /// Angle of the owning wall, in radians.
    pub angle: f64,
    /// Extent along the wall.
    pub width: f64,
    /// Extent across the wall.
    pub height: f64,
}

impl OpeningGeometry {
    /// Geometry of a span `[offset, offset + length]` along `wall`.
    #[must_use]
    pub fn from_span(wall: &Wall, offset: f64, length: f64, thickness: f64) -> Self {
        Self {
            center: wall.point_at_offset(offset + length / 2.0),
            direction: wall.direction(),
            angle: wall.angle(),
            width: length,
            height: thickness,
        }
    }

    /// Geometry of `item` on the given wall. The caller is responsible for
    /// passing the item's owning wall.
    #[must_use]
    pub fn resolve(item: &Item, wall: &Wall) -> Self {
        Self::from_span(
            wall,
            item.wall_attach.offset,
            item.wall_attach.length,
            item.thickness,
        )
    }

    /// Geometry of `item` within `plan`, or `None` if its wall is gone.
    #[must_use]
    pub fn resolve_in_plan(plan: &Plan, item: &Item) -> Option<Self> {
        plan.owning_wall(item).map(|wall| Self::resolve(item, wall))
    }

    /// Left-hand unit normal of the owning wall.
    #[must_use]
    pub fn normal(&self) -> Vector2 {
        Vector2::new(-self.direction.y, self.direction.x)
    }

    /// Corners in boundary order: start-left, end-left, end-right, start-right.
    #[must_use]
    pub fn corners(&self) -> [Point2; 4] {
        let rot = Rotation2::new(self.angle);
        let hw = self.width / 2.0;
        let hh = self.height / 2.0;
        [(-hw, hh), (hw, hh), (hw, -hh), (-hw, -hh)]
            .map(|(x, y)| self.center + rot * Vector2::new(x, y))
    }

    /// Expresses `p` in the opening's frame: x along the wall, y across it.
    #[must_use]
    pub fn to_local(&self, p: &Point2) -> Vector2 {
        Rotation2::new(-self.angle) * (p - self.center)
    }

    /// Checks whether `p` lies within the rectangle grown by `tolerance`.
    #[must_use]
    pub fn contains(&self, p: &Point2, tolerance: f64) -> bool {
        let local = self.to_local(p);
        local.x.abs() <= self.width / 2.0 + tolerance
            && local.y.abs() <= self.height / 2.0 + tolerance
    }
}
