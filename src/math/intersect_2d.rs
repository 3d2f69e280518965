use super::{Point2, Vector2, PARALLEL_TOLERANCE, TOLERANCE};

/// Parametric 2D line-line intersection.
///
/// Given lines `p + s * dp` and `q + u * dq`, returns the intersection point.
/// The parameters are not bounded, so two rays that only meet behind their
/// origins still report that meeting point. Returns `None` when the
/// determinant falls below [`PARALLEL_TOLERANCE`].
#[must_use]
pub fn ray_ray_intersect_2d(p: &Point2, dp: &Vector2, q: &Point2, dq: &Vector2) -> Option<Point2> {
    let det = dp.x * dq.y - dp.y * dq.x;
    if det.abs() < PARALLEL_TOLERANCE {
        return None;
    }
    let r = q - p;
    let s = (r.x * dq.y - r.y * dq.x) / det;
    Some(p + dp * s)
}

/// Signed area of the triangle `p`, `q`, `r` (times two).
fn orient(p: &Point2, q: &Point2, r: &Point2) -> f64 {
    (q.x - p.x) * (r.y - p.y) - (q.y - p.y) * (r.x - p.x)
}

/// Checks whether `r`, known to be collinear with `p`–`q`, lies within its bounds.
fn within_bounds(p: &Point2, q: &Point2, r: &Point2) -> bool {
    r.x >= p.x.min(q.x) - TOLERANCE
        && r.x <= p.x.max(q.x) + TOLERANCE
        && r.y >= p.y.min(q.y) - TOLERANCE
        && r.y <= p.y.max(q.y) + TOLERANCE
}

/// Bounded segment-segment test in 2D.
///
/// Returns `true` for proper crossings and for touching contacts, including an
/// endpoint of one segment lying on the other and overlapping collinear
/// segments.
#[must_use]
pub fn segments_touch_2d(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> bool {
    let d1 = orient(a0, a1, b0);
    let d2 = orient(a0, a1, b1);
    let d3 = orient(b0, b1, a0);
    let d4 = orient(b0, b1, a1);

    if ((d1 > TOLERANCE && d2 < -TOLERANCE) || (d1 < -TOLERANCE && d2 > TOLERANCE))
        && ((d3 > TOLERANCE && d4 < -TOLERANCE) || (d3 < -TOLERANCE && d4 > TOLERANCE))
    {
        return true;
    }

    (d1.abs() <= TOLERANCE && within_bounds(a0, a1, b0))
        || (d2.abs() <= TOLERANCE && within_bounds(a0, a1, b1))
        || (d3.abs() <= TOLERANCE && within_bounds(b0, b1, a0))
        || (d4.abs() <= TOLERANCE && within_bounds(b0, b1, a1))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn perpendicular_rays_meet() {
        let p = ray_ray_intersect_2d(
            &Point2::new(0.0, 1.0),
            &Vector2::new(1.0, 0.0),
            &Point2::new(3.0, 0.0),
            &Vector2::new(0.0, 1.0),
        )
        .unwrap();
        assert_relative_eq!(p.x, 3.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn rays_meet_behind_origin() {
        let p = ray_ray_intersect_2d(
            &Point2::new(0.0, 0.0),
            &Vector2::new(1.0, 0.0),
            &Point2::new(-4.0, 2.0),
            &Vector2::new(0.0, 1.0),
        )
        .unwrap();
        assert_relative_eq!(p.x, -4.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn parallel_rays_have_no_intersection() {
        let p = ray_ray_intersect_2d(
            &Point2::new(0.0, 0.0),
            &Vector2::new(1.0, 0.0),
            &Point2::new(0.0, 5.0),
            &Vector2::new(-1.0, 0.0),
        );
        assert!(p.is_none());
    }

    #[test]
    fn crossing_segments_touch() {
        assert!(segments_touch_2d(
            &Point2::new(0.0, 0.0),
            &Point2::new(2.0, 2.0),
            &Point2::new(0.0, 2.0),
            &Point2::new(2.0, 0.0),
        ));
    }

    #[test]
    fn endpoint_contact_counts() {
        // T-contact: second segment ends on the first.
        assert!(segments_touch_2d(
            &Point2::new(0.0, 0.0),
            &Point2::new(4.0, 0.0),
            &Point2::new(2.0, 0.0),
            &Point2::new(2.0, 3.0),
        ));
    }

    #[test]
    fn disjoint_segments_do_not_touch() {
        assert!(!segments_touch_2d(
            &Point2::new(0.0, 0.0),
            &Point2::new(1.0, 0.0),
            &Point2::new(2.0, 1.0),
            &Point2::new(3.0, 5.0),
        ));
        // Collinear but separated.
        assert!(!segments_touch_2d(
            &Point2::new(0.0, 0.0),
            &Point2::new(1.0, 0.0),
            &Point2::new(2.0, 0.0),
            &Point2::new(3.0, 0.0),
        ));
    }
}
