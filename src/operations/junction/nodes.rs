use crate::geometry::WallEnd;
use crate::math::{Point2, TOLERANCE};
use crate::model::Wall;

/// A wall endpoint touching a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arm {
    /// Index of the wall in the input slice.
    pub wall: usize,
    /// Which endpoint of the wall sits on the node.
    pub end: WallEnd,
}

/// A point where one or more wall endpoints coincide.
#[derive(Debug, Clone)]
pub struct Node {
    pub point: Point2,
    pub arms: Vec<Arm>,
}

impl Node {
    /// A node is a junction when at least two walls meet there.
    #[must_use]
    pub fn is_junction(&self) -> bool {
        self.arms.len() >= 2
    }
}

/// Node merge tolerance for a plan with the given grid size.
#[must_use]
pub fn node_tolerance(grid_size: f64) -> f64 {
    0.5_f64.max(grid_size / 500.0)
}

/// Groups wall endpoints into nodes.
///
/// Endpoints within `tolerance` of an existing node join it; nodes keep the
/// position of their first endpoint and the walls' input order. Zero-length
/// walls have no direction and are left out.
#[must_use]
pub fn collect_nodes(walls: &[Wall], tolerance: f64) -> Vec<Node> {
    let mut nodes: Vec<Node> = Vec::new();

    for (i, wall) in walls.iter().enumerate() {
        if wall.length() < TOLERANCE {
            continue;
        }
        for end in [WallEnd::A, WallEnd::B] {
            let p = wall.endpoint(end);
            let arm = Arm { wall: i, end };
            let idx = ensure_node(&mut nodes, p, tolerance);
            nodes[idx].arms.push(arm);
        }
    }

    nodes
}

/// Finds or inserts a node, returning its index.
fn ensure_node(nodes: &mut Vec<Node>, p: Point2, tolerance: f64) -> usize {
    if let Some(i) = nodes.iter().position(|n| (n.point - p).norm() <= tolerance) {
        return i;
    }
    nodes.push(Node {
        point: p,
        arms: Vec::new(),
    });
    nodes.len() - 1
}
