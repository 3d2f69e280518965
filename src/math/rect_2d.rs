use super::intersect_2d::segments_touch_2d;
use super::Point2;

/// An axis-aligned rectangle with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Minimum corner of the rectangle.
    pub min: Point2,
    /// Maximum corner of the rectangle.
    pub max: Point2,
}

impl Rect {
    /// Builds the normalized rectangle spanned by two arbitrary corners.
    #[must_use]
    pub fn from_corners(p: Point2, q: Point2) -> Self {
        Self {
            min: Point2::new(p.x.min(q.x), p.y.min(q.y)),
            max: Point2::new(p.x.max(q.x), p.y.max(q.y)),
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Returns `true` if the rectangle has zero width and zero height.
    #[must_use]
    pub fn is_point(&self) -> bool {
        self.width() <= 0.0 && self.height() <= 0.0
    }

    /// Inclusive containment test.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// The four corners in boundary order, starting at `min`.
    #[must_use]
    pub fn corners(&self) -> [Point2; 4] {
        [
            self.min,
            Point2::new(self.max.x, self.min.y),
            self.max,
            Point2::new(self.min.x, self.max.y),
        ]
    }

    /// Checks whether the segment `a`–`b` touches the rectangle.
    ///
    /// A segment whose bounding box misses the rectangle is rejected outright.
    /// Otherwise it intersects when either endpoint lies inside, or when it
    /// crosses or touches one of the four edges.
    #[must_use]
    pub fn intersects_segment(&self, a: &Point2, b: &Point2) -> bool {
        if a.x.max(b.x) < self.min.x
            || a.x.min(b.x) > self.max.x
            || a.y.max(b.y) < self.min.y
            || a.y.min(b.y) > self.max.y
        {
            return false;
        }

        if self.contains(a) || self.contains(b) {
            return true;
        }

        let c = self.corners();
        (0..4).any(|i| segments_touch_2d(a, b, &c[i], &c[(i + 1) % 4]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Rect {
        Rect::from_corners(Point2::new(x0, y0), Point2::new(x1, y1))
    }

    #[test]
    fn corners_are_normalized() {
        let r = rect(10.0, 5.0, -2.0, -3.0);
        assert_eq!(r.min, Point2::new(-2.0, -3.0));
        assert_eq!(r.max, Point2::new(10.0, 5.0));
        assert!((r.width() - 12.0).abs() < f64::EPSILON);
        assert!((r.height() - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn containment_is_inclusive() {
        let r = rect(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(&Point2::new(0.0, 10.0)));
        assert!(r.contains(&Point2::new(5.0, 5.0)));
        assert!(!r.contains(&Point2::new(10.1, 5.0)));
    }

    #[test]
    fn segment_fully_inside() {
        let r = rect(0.0, 0.0, 10.0, 10.0);
        assert!(r.intersects_segment(&Point2::new(1.0, 1.0), &Point2::new(9.0, 2.0)));
    }

    #[test]
    fn segment_passing_through() {
        // Both endpoints outside, crossing the rectangle diagonally.
        let r = rect(0.0, 0.0, 10.0, 10.0);
        assert!(r.intersects_segment(&Point2::new(-5.0, 5.0), &Point2::new(5.0, 15.0)));
        assert!(r.intersects_segment(&Point2::new(-5.0, 5.0), &Point2::new(15.0, 5.0)));
    }

    #[test]
    fn segment_outside_bounding_box_rejected() {
        let r = rect(0.0, 0.0, 10.0, 10.0);
        assert!(!r.intersects_segment(&Point2::new(20.0, 0.0), &Point2::new(30.0, 10.0)));
    }

    #[test]
    fn segment_missing_corner_rejected() {
        // Bounding boxes overlap but the segment passes outside the corner.
        let r = rect(0.0, 0.0, 10.0, 10.0);
        assert!(!r.intersects_segment(&Point2::new(8.0, 13.0), &Point2::new(13.0, 8.0)));
    }

    #[test]
    fn segment_touching_edge() {
        let r = rect(0.0, 0.0, 10.0, 10.0);
        assert!(r.intersects_segment(&Point2::new(10.0, -5.0), &Point2::new(10.0, 15.0)));
    }
}
