use crate::geometry::WallEnd;
use crate::math::intersect_2d::ray_ray_intersect_2d;
use crate::math::{Point2, Vector2};
use crate::model::Wall;

/// Right-hand normal `(ty, -tx)` of a tangent.
fn right_normal(t: &Vector2) -> Vector2 {
    Vector2::new(t.y, -t.x)
}

/// Computes one corner pivot where `w1` and `w2` meet at `node`.
///
/// `end1` / `end2` name the endpoint of each wall that sits on the node. Each
/// wall contributes one edge line: its node-anchored tangent, offset by half
/// its thickness along the right-hand normal, with `w1` shifted to the
/// negative side and `w2` to the positive side so the two selected edges face
/// each other across the corner. Returns `None` when the edges are parallel.
#[must_use]
pub fn junction_pivot(
    w1: &Wall,
    end1: WallEnd,
    w2: &Wall,
    end2: WallEnd,
    node: &Point2,
) -> Option<Point2> {
    let t1 = w1.tangent_from(end1);
    let p1 = node - right_normal(&t1) * (w1.thickness / 2.0);

    let t2 = w2.tangent_from(end2);
    let p2 = node + right_normal(&t2) * (w2.thickness / 2.0);

    ray_ray_intersect_2d(&p1, &t1, &p2, &t2)
}

/// Computes the four pivots covering the overlap of two walls at a node.
///
/// Flipping an endpoint selects the opposite edge of that wall, so the four
/// end combinations produce the four crossings of the walls' edge lines.
/// The result is ordered to trace a simple quadrilateral.
#[must_use]
pub fn junction_quad(
    w1: &Wall,
    end1: WallEnd,
    w2: &Wall,
    end2: WallEnd,
    node: &Point2,
) -> Option<[Point2; 4]> {
    let pivot1 = junction_pivot(w1, end1, w2, end2, node)?;
    let pivot2 = junction_pivot(w1, end1.opposite(), w2, end2.opposite(), node)?;
    let pivot3 = junction_pivot(w1, end1.opposite(), w2, end2, node)?;
    let pivot4 = junction_pivot(w1, end1, w2, end2.opposite(), node)?;
    Some([pivot1, pivot3, pivot2, pivot4])
}
