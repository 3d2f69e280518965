use crate::math::distance_2d::project_point_to_segment;
use crate::math::{Point2, Vector2};
use crate::model::Wall;

/// One of the two endpoints of a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallEnd {
    A,
    B,
}

impl WallEnd {
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

/// Projection of a point onto a wall's centerline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallProjection {
    /// Distance from the point to the clamped projection.
    pub distance: f64,
    /// Absolute distance from `a` along the centerline.
    pub offset: f64,
    /// Normalized parameter, clamped to `[0, 1]`.
    pub t: f64,
    /// The projected point on the centerline.
    pub proj: Point2,
}

/// The nearest wall to a point, as found by [`find_nearest_wall`].
#[derive(Debug, Clone, Copy)]
pub struct NearestWall<'a> {
    pub wall: &'a Wall,
    pub distance: f64,
    pub offset: f64,
}

impl Wall {
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.b - self.a).norm()
    }

    /// Angle of the `a → b` direction, in radians.
    #[must_use]
    pub fn angle(&self) -> f64 {
        let d = self.b - self.a;
        d.y.atan2(d.x)
    }

    /// Unit vector along `a → b`.
    ///
    /// A zero-length wall divides by 1 instead of 0, yielding the zero vector
    /// rather than NaN.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        let d = self.b - self.a;
        let len = d.norm();
        if len > 0.0 {
            d / len
        } else {
            d
        }
    }

    /// Left-hand unit normal `(-dy, dx)` of the wall direction.
    #[must_use]
    pub fn normal(&self) -> Vector2 {
        let d = self.direction();
        Vector2::new(-d.y, d.x)
    }

    /// Point at absolute distance `offset` from `a` along the centerline.
    #[must_use]
    pub fn point_at_offset(&self, offset: f64) -> Point2 {
        self.a + self.direction() * offset
    }

    /// Midpoint of the centerline.
    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        nalgebra::center(&self.a, &self.b)
    }

    #[must_use]
    pub fn endpoint(&self, end: WallEnd) -> Point2 {
        match end {
            WallEnd::A => self.a,
            WallEnd::B => self.b,
        }
    }

    /// Unit tangent pointing away from `end` into the wall body.
    #[must_use]
    pub fn tangent_from(&self, end: WallEnd) -> Vector2 {
        match end {
            WallEnd::A => self.direction(),
            WallEnd::B => -self.direction(),
        }
    }

    /// Orthogonal projection of `p` onto the centerline segment.
    #[must_use]
    pub fn project_point(&self, p: &Point2) -> WallProjection {
        let r = project_point_to_segment(p, &self.a, &self.b);
        WallProjection {
            distance: r.distance,
            offset: self.length() * r.t,
            t: r.t,
            proj: r.foot,
        }
    }

    /// Rectangular outline (centerline ± half thickness), counter-clockwise
    /// starting at the left side of `a`.
    #[must_use]
    pub fn outline(&self) -> [Point2; 4] {
        let n = self.normal() * (self.thickness / 2.0);
        [self.a + n, self.b + n, self.b - n, self.a - n]
    }
}

/// Finds the wall closest to `p` within `max_distance`.
///
/// Ties keep the first wall in iteration order.
#[must_use]
pub fn find_nearest_wall<'a, I>(p: &Point2, walls: I, max_distance: f64) -> Option<NearestWall<'a>>
where
    I: IntoIterator<Item = &'a Wall>,
{
    let mut best: Option<NearestWall<'a>> = None;
    for wall in walls {
        let proj = wall.project_point(p);
        if best.as_ref().is_none_or(|b| proj.distance < b.distance) {
            best = Some(NearestWall {
                wall,
                distance: proj.distance,
                offset: proj.offset,
            });
        }
    }
    best.filter(|b| b.distance <= max_distance)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn wall(id: &str, ax: f64, ay: f64, bx: f64, by: f64) -> Wall {
        Wall::with_id(id.into(), Point2::new(ax, ay), Point2::new(bx, by), 10.0).unwrap()
    }

    #[test]
    fn basic_measures() {
        let w = wall("w", 0.0, 0.0, 0.0, 50.0);
        assert_relative_eq!(w.length(), 50.0);
        assert_relative_eq!(w.angle(), FRAC_PI_2);
        assert_relative_eq!(w.direction().y, 1.0);
        assert_relative_eq!(w.normal().x, -1.0);
    }

    #[test]
    fn offset_is_absolute_distance() {
        let w = wall("w", 10.0, 0.0, 110.0, 0.0);
        let p = w.point_at_offset(30.0);
        assert_relative_eq!(p.x, 40.0);
        // Offsets past the end extrapolate along the direction.
        let p = w.point_at_offset(150.0);
        assert_relative_eq!(p.x, 160.0);
    }

    #[test]
    fn degenerate_wall_stays_finite() {
        let w = wall("w", 5.0, 5.0, 5.0, 5.0);
        let d = w.direction();
        assert!(d.x.is_finite() && d.y.is_finite());
        let p = w.point_at_offset(20.0);
        assert_eq!(p, Point2::new(5.0, 5.0));
        let r = w.project_point(&Point2::new(8.0, 9.0));
        assert_relative_eq!(r.distance, 5.0);
        assert_relative_eq!(r.offset, 0.0);
    }

    #[test]
    fn projection_reports_offset() {
        let w = wall("w", 0.0, 0.0, 200.0, 0.0);
        let r = w.project_point(&Point2::new(60.0, 12.0));
        assert_relative_eq!(r.offset, 60.0);
        assert_relative_eq!(r.distance, 12.0);
        assert_relative_eq!(r.t, 0.3);
    }

    #[test]
    fn tangent_points_away_from_end() {
        let w = wall("w", 0.0, 0.0, 10.0, 0.0);
        assert_relative_eq!(w.tangent_from(WallEnd::A).x, 1.0);
        assert_relative_eq!(w.tangent_from(WallEnd::B).x, -1.0);
        assert_eq!(w.endpoint(WallEnd::B.opposite()), w.a);
    }

    #[test]
    fn outline_spans_thickness() {
        let w = wall("w", 0.0, 0.0, 100.0, 0.0);
        let o = w.outline();
        assert_relative_eq!(o[0].y, 5.0);
        assert_relative_eq!(o[1].x, 100.0);
        assert_relative_eq!(o[2].y, -5.0);
        assert_relative_eq!(o[3].x, 0.0);
    }

    #[test]
    fn nearest_wall_within_tolerance() {
        let walls = vec![
            wall("w1", 0.0, 0.0, 100.0, 0.0),
            wall("w2", 0.0, 50.0, 100.0, 50.0),
        ];
        let n = find_nearest_wall(&Point2::new(40.0, 35.0), &walls, 30.0).unwrap();
        assert_eq!(n.wall.id.as_str(), "w2");
        assert_relative_eq!(n.offset, 40.0);
        assert!(find_nearest_wall(&Point2::new(40.0, 200.0), &walls, 30.0).is_none());
    }

    #[test]
    fn nearest_wall_ties_keep_first() {
        let walls = vec![
            wall("w1", 0.0, 0.0, 100.0, 0.0),
            wall("w2", 0.0, 20.0, 100.0, 20.0),
        ];
        let n = find_nearest_wall(&Point2::new(50.0, 10.0), &walls, 30.0).unwrap();
        assert_eq!(n.wall.id.as_str(), "w1");
    }
}
