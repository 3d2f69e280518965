use super::Point2;

/// Orthogonal projection of a point onto a bounded segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentProjection {
    /// Euclidean distance from the point to `foot`.
    pub distance: f64,
    /// Segment parameter of `foot`, always in `[0, 1]`.
    pub t: f64,
    /// Closest point on the segment.
    pub foot: Point2,
}

/// Projects `p` onto the segment `a`–`b`.
///
/// The parameter is clamped so the foot point never leaves the segment. A
/// zero-length segment projects every point onto `a` with `t = 0`.
#[must_use]
pub fn project_point_to_segment(p: &Point2, a: &Point2, b: &Point2) -> SegmentProjection {
    let d = b - a;
    let len_sq = d.norm_squared();

    if len_sq < 1e-20 {
        return SegmentProjection {
            distance: (p - a).norm(),
            t: 0.0,
            foot: *a,
        };
    }

    let t = ((p - a).dot(&d) / len_sq).clamp(0.0, 1.0);
    let foot = a + d * t;

    SegmentProjection {
        distance: (p - foot).norm(),
        t,
        foot,
    }
}

/// Returns the minimum distance from `p` to the segment `a`–`b`.
#[must_use]
pub fn point_to_segment_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    project_point_to_segment(p, a, b).distance
}
