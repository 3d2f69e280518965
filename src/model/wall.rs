use serde::{Deserialize, Serialize};

use super::{point_xy, WallId};
use crate::error::{GeometryError, Result};
use crate::math::Point2;

/// A straight wall: a centerline segment `a`–`b` with uniform thickness.
///
/// The `a`/`b` ordering carries no semantics beyond naming the endpoints that
/// junctions and opening offsets refer to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub id: WallId,
    #[serde(with = "point_xy")]
    pub a: Point2,
    #[serde(with = "point_xy")]
    pub b: Point2,
    pub thickness: f64,
}

impl Wall {
    /// Creates a wall with a freshly generated id.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonPositive` if `thickness` is not positive, or
    /// `GeometryError::NonFinite` if any coordinate is NaN or infinite.
    pub fn new(a: Point2, b: Point2, thickness: f64) -> Result<Self> {
        Self::with_id(WallId::generate(), a, b, thickness)
    }

    /// Creates a wall with an explicit id.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Wall::new`].
    pub fn with_id(id: WallId, a: Point2, b: Point2, thickness: f64) -> Result<Self> {
        for value in [a.x, a.y, b.x, b.y] {
            if !value.is_finite() {
                return Err(GeometryError::NonFinite {
                    quantity: "wall coordinate",
                    value,
                }
                .into());
            }
        }
        if thickness.is_nan() || thickness <= 0.0 {
            return Err(GeometryError::NonPositive {
                quantity: "wall thickness",
                value: thickness,
            }
            .into());
        }
        Ok(Self {
            id,
            a,
            b,
            thickness,
        })
    }

    /// Returns a copy with a different thickness, clamped to at least `min`.
    #[must_use]
    pub fn with_thickness(&self, thickness: f64, min: f64) -> Self {
        Self {
            thickness: thickness.max(min),
            ..self.clone()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_thickness() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        assert!(Wall::new(a, b, 0.0).is_err());
        assert!(Wall::new(a, b, -3.0).is_err());
        assert!(Wall::new(a, b, f64::NAN).is_err());
        assert!(Wall::new(a, b, 10.0).is_ok());
    }

    #[test]
    fn rejects_non_finite_points() {
        let r = Wall::new(Point2::new(f64::INFINITY, 0.0), Point2::new(1.0, 0.0), 10.0);
        assert!(r.is_err());
    }

    #[test]
    fn thickness_change_is_clamped() {
        let w = Wall::with_id("w".into(), Point2::origin(), Point2::new(5.0, 0.0), 2.0).unwrap();
        let w = w.with_thickness(-4.0, 1.0);
        assert!((w.thickness - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn serializes_points_as_objects() {
        let w = Wall::with_id("w1".into(), Point2::new(1.0, 2.0), Point2::new(3.0, 4.0), 10.0)
            .unwrap();
        let json = serde_json::to_value(&w).unwrap();
        assert_eq!(json["a"]["x"], 1.0);
        assert_eq!(json["b"]["y"], 4.0);
        assert_eq!(json["id"], "w1");
    }
}
