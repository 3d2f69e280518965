use crate::math::distance_2d::point_to_segment_dist;
use crate::math::Point2;
use crate::model::{Item, ItemId, Plan, Wall, WallId};
use crate::operations::attach::OpeningGeometry;

/// The element under a point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hit {
    Item(ItemId),
    Wall(WallId),
}

/// Checks whether `p` lies within half the wall thickness plus `tolerance`
/// of its centerline.
#[must_use]
pub fn hit_wall(p: &Point2, wall: &Wall, tolerance: f64) -> bool {
    point_to_segment_dist(p, &wall.a, &wall.b) <= wall.thickness / 2.0 + tolerance
}

/// Checks whether `p` lies inside the opening rectangle of `item` on `wall`,
/// grown by `tolerance` on every side.
#[must_use]
pub fn hit_item(p: &Point2, item: &Item, wall: &Wall, tolerance: f64) -> bool {
    OpeningGeometry::resolve(item, wall).contains(p, tolerance)
}

/// Finds the element under `p`.
///
/// Items take precedence over walls. Within each category the last element
/// (topmost in drawing order) wins. Orphaned items are skipped.
#[must_use]
pub fn pick(plan: &Plan, p: &Point2, tolerance: f64) -> Option<Hit> {
    let item = plan.items.iter().rev().find(|item| {
        plan.owning_wall(item)
            .is_some_and(|wall| hit_item(p, item, wall, tolerance))
    });
    if let Some(item) = item {
        return Some(Hit::Item(item.id.clone()));
    }

    plan.walls
        .iter()
        .rev()
        .find(|wall| hit_wall(p, wall, tolerance))
        .map(|wall| Hit::Wall(wall.id.clone()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::{ItemKind, OpeningKind, WallAttachment};
    use proptest::prelude::*;

    fn wall(id: &str, ax: f64, ay: f64, bx: f64, by: f64) -> Wall {
        Wall::with_id(id.into(), Point2::new(ax, ay), Point2::new(bx, by), 10.0).unwrap()
    }

    fn door(id: &str, wall_id: &str, offset: f64) -> Item {
        Item {
            id: id.into(),
            kind: ItemKind::default_for(OpeningKind::Door),
            wall_attach: WallAttachment {
                wall_id: wall_id.into(),
                offset,
                length: 80.0,
            },
            thickness: 18.0,
        }
    }

    #[test]
    fn wall_hit_uses_thickness_and_tolerance() {
        let w = wall("w", 0.0, 0.0, 100.0, 0.0);
        assert!(hit_wall(&Point2::new(50.0, 11.0), &w, 6.0));
        assert!(!hit_wall(&Point2::new(50.0, 11.5), &w, 6.0));
        assert!(hit_wall(&Point2::new(-4.0, 0.0), &w, 0.0));
    }

    #[test]
    fn item_wins_over_its_wall() {
        let plan = Plan::default()
            .with_wall(wall("w", 0.0, 0.0, 400.0, 0.0))
            .with_item(door("d", "w", 100.0));
        assert_eq!(pick(&plan, &Point2::new(140.0, 0.0), 6.0), Some(Hit::Item("d".into())));
        assert_eq!(pick(&plan, &Point2::new(300.0, 0.0), 6.0), Some(Hit::Wall("w".into())));
        assert_eq!(pick(&plan, &Point2::new(300.0, 100.0), 6.0), None);
    }

    #[test]
    fn topmost_element_wins() {
        let plan = Plan::default()
            .with_wall(wall("first", 0.0, 0.0, 100.0, 0.0))
            .with_wall(wall("second", 50.0, -50.0, 50.0, 50.0));
        assert_eq!(pick(&plan, &Point2::new(50.0, 0.0), 6.0), Some(Hit::Wall("second".into())));

        let plan = plan
            .with_item(door("d1", "first", 10.0))
            .with_item(door("d2", "first", 20.0));
        assert_eq!(pick(&plan, &Point2::new(60.0, 0.0), 6.0), Some(Hit::Item("d2".into())));
    }

    #[test]
    fn orphaned_items_are_invisible() {
        let plan = Plan::default().with_item(door("d", "gone", 0.0));
        assert_eq!(pick(&plan, &Point2::new(40.0, 0.0), 6.0), None);
    }

    proptest! {
        #[test]
        fn centerline_midpoint_always_hits(
            ax in -1e3..1e3_f64, ay in -1e3..1e3_f64,
            bx in -1e3..1e3_f64, by in -1e3..1e3_f64,
            thickness in 1e-3..100.0_f64,
        ) {
            let w = Wall::new(Point2::new(ax, ay), Point2::new(bx, by), thickness).unwrap();
            prop_assert!(hit_wall(&w.midpoint(), &w, 0.0));
        }
    }
}
