use super::Point2;

/// Rounds `value` to the nearest multiple of `step` (halves away from zero).
///
/// A non-positive or non-finite `step` leaves the value untouched.
#[must_use]
pub fn snap_scalar(value: f64, step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return value;
    }
    (value / step).round() * step
}

/// Snaps each coordinate of `p` independently to the grid.
#[must_use]
pub fn snap_to_grid(p: &Point2, grid_size: f64) -> Point2 {
    Point2::new(snap_scalar(p.x, grid_size), snap_scalar(p.y, grid_size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rounds_to_nearest_multiple() {
        let p = snap_to_grid(&Point2::new(37.0, -12.0), 25.0);
        assert_eq!(p, Point2::new(25.0, 0.0));
        let p = snap_to_grid(&Point2::new(38.0, -13.0), 25.0);
        assert_eq!(p, Point2::new(50.0, -25.0));
    }

    #[test]
    fn halves_round_away_from_zero() {
        assert!((snap_scalar(12.5, 25.0) - 25.0).abs() < f64::EPSILON);
        assert!((snap_scalar(-12.5, 25.0) + 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn invalid_step_is_identity() {
        assert!((snap_scalar(3.3, 0.0) - 3.3).abs() < f64::EPSILON);
        assert!((snap_scalar(3.3, -1.0) - 3.3).abs() < f64::EPSILON);
    }

    proptest! {
        #[test]
        fn snapping_is_idempotent(
            x in -1e6..1e6_f64,
            y in -1e6..1e6_f64,
            g in 0.01..500.0_f64,
        ) {
            let once = snap_to_grid(&Point2::new(x, y), g);
            let twice = snap_to_grid(&once, g);
            prop_assert_eq!(once, twice);
        }
    }
}
