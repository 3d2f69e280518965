//! Corner caps where wall endpoints meet.

mod nodes;
mod pivot;

pub use nodes::{collect_nodes, node_tolerance, Arm, Node};
pub use pivot::{junction_pivot, junction_quad};

use tracing::trace;

use crate::math::Point2;
use crate::model::{Plan, Wall, WallId};

/// A quadrilateral closing the gap between two walls at a node.
#[derive(Debug, Clone, PartialEq)]
pub struct JunctionCap {
    pub node: Point2,
    pub walls: [WallId; 2],
    /// Pivots in tracing order.
    pub quad: [Point2; 4],
}

/// Computes junction caps for a set of walls.
///
/// At each node where two or more walls meet, the arms are sorted by the
/// angle of their tangent leaving the node and every angularly adjacent pair
/// receives a cap. A node with exactly two arms yields one cap. Pairs whose
/// edges are parallel (collinear continuation, straight-through T) produce
/// no cap.
#[derive(Debug)]
pub struct JunctionCaps<'a> {
    walls: &'a [Wall],
    tolerance: f64,
}

impl<'a> JunctionCaps<'a> {
    /// Creates a junction cap operation with the tolerance derived from
    /// `grid_size`.
    #[must_use]
    pub fn new(walls: &'a [Wall], grid_size: f64) -> Self {
        Self {
            walls,
            tolerance: node_tolerance(grid_size),
        }
    }

    /// Creates a junction cap operation over all walls of `plan`.
    #[must_use]
    pub fn for_plan(plan: &'a Plan) -> Self {
        Self::new(&plan.walls, plan.grid_size())
    }

    /// Executes the cap computation.
    #[must_use]
    pub fn execute(&self) -> Vec<JunctionCap> {
        let nodes = collect_nodes(self.walls, self.tolerance);
        let mut caps = Vec::new();

        for node in nodes.iter().filter(|n| n.is_junction()) {
            let mut arms: Vec<(f64, Arm)> = node
                .arms
                .iter()
                .map(|arm| {
                    let t = self.walls[arm.wall].tangent_from(arm.end);
                    (t.y.atan2(t.x), *arm)
                })
                .collect();
            arms.sort_by(|a, b| a.0.total_cmp(&b.0));

            let n = arms.len();
            let pair_count = if n == 2 { 1 } else { n };

            for k in 0..pair_count {
                let (_, first) = arms[k];
                let (_, second) = arms[(k + 1) % n];
                if first.wall == second.wall {
                    continue;
                }
                let w1 = &self.walls[first.wall];
                let w2 = &self.walls[second.wall];

                match junction_quad(w1, first.end, w2, second.end, &node.point) {
                    Some(quad) => caps.push(JunctionCap {
                        node: node.point,
                        walls: [w1.id.clone(), w2.id.clone()],
                        quad,
                    }),
                    None => trace!(
                        first = %w1.id,
                        second = %w2.id,
                        "parallel walls at junction, no cap"
                    ),
                }
            }
        }

        caps
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn wall(id: &str, ax: f64, ay: f64, bx: f64, by: f64, thickness: f64) -> Wall {
        Wall::with_id(id.into(), Point2::new(ax, ay), Point2::new(bx, by), thickness).unwrap()
    }

    #[test]
    fn l_junction_gets_one_closed_cap() {
        let walls = vec![
            wall("w1", 0.0, 0.0, 100.0, 0.0, 20.0),
            wall("w2", 100.0, 0.0, 100.0, 100.0, 20.0),
        ];
        let caps = JunctionCaps::new(&walls, 25.0).execute();
        assert_eq!(caps.len(), 1);
        let cap = &caps[0];
        assert_eq!(cap.node, Point2::new(100.0, 0.0));
        assert!(cap.quad.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }

    #[test]
    fn closed_room_gets_four_caps() {
        let walls = vec![
            wall("a", 0.0, 0.0, 300.0, 0.0, 10.0),
            wall("b", 300.0, 0.0, 300.0, 200.0, 10.0),
            wall("c", 300.0, 200.0, 0.0, 200.0, 10.0),
            wall("d", 0.0, 200.0, 0.0, 0.0, 10.0),
        ];
        let caps = JunctionCaps::new(&walls, 25.0).execute();
        assert_eq!(caps.len(), 4);
    }

    #[test]
    fn collinear_continuation_has_no_cap() {
        let walls = vec![
            wall("w1", 0.0, 0.0, 100.0, 0.0, 20.0),
            wall("w2", 100.0, 0.0, 200.0, 0.0, 20.0),
        ];
        assert!(JunctionCaps::new(&walls, 25.0).execute().is_empty());
    }

    #[test]
    fn t_junction_caps_adjacent_pairs_only() {
        // Straight wall split at the T: the collinear pair is skipped.
        let walls = vec![
            wall("left", 0.0, 0.0, 100.0, 0.0, 10.0),
            wall("right", 100.0, 0.0, 200.0, 0.0, 10.0),
            wall("stem", 100.0, 0.0, 100.0, 100.0, 10.0),
        ];
        let caps = JunctionCaps::new(&walls, 25.0).execute();
        assert_eq!(caps.len(), 2);
        assert!(caps.iter().all(|c| c.walls.iter().any(|w| w.as_str() == "stem")));
    }

    #[test]
    fn cross_junction_caps_every_quadrant() {
        let walls = vec![
            wall("e", 0.0, 0.0, 100.0, 0.0, 10.0),
            wall("n", 0.0, 0.0, 0.0, 100.0, 10.0),
            wall("w", 0.0, 0.0, -100.0, 0.0, 10.0),
            wall("s", 0.0, 0.0, 0.0, -100.0, 10.0),
        ];
        let caps = JunctionCaps::new(&walls, 25.0).execute();
        assert_eq!(caps.len(), 4);
    }

    #[test]
    fn free_ends_have_no_caps() {
        let walls = vec![wall("w1", 0.0, 0.0, 100.0, 0.0, 20.0)];
        assert!(JunctionCaps::new(&walls, 25.0).execute().is_empty());
    }
}
