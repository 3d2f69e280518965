//! Selected walls and items, independent of edit history.

use std::collections::HashSet;

use crate::model::{ItemId, Plan, WallId};
use crate::operations::select::{Hit, MarqueeHits};

/// The current selection.
///
/// Ids may refer to elements that no longer exist (after undo, for example);
/// consumers resolve them against the plan and skip the missing ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub walls: HashSet<WallId>,
    pub items: HashSet<ItemId>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a click that hit `hit` (or nothing).
    ///
    /// A plain click replaces the selection with the hit element, or clears it
    /// when nothing was hit. An additive click adds the hit element to its
    /// category and leaves everything else selected.
    pub fn click(&mut self, hit: Option<Hit>, additive: bool) {
        if !additive {
            self.clear();
        }
        match hit {
            Some(Hit::Item(id)) => {
                self.items.insert(id);
            }
            Some(Hit::Wall(id)) => {
                self.walls.insert(id);
            }
            None => {}
        }
    }

    /// Adds everything a marquee captured. Marquee selection never replaces.
    pub fn extend(&mut self, hits: MarqueeHits) {
        self.walls.extend(hits.walls);
        self.items.extend(hits.items);
    }

    pub fn clear(&mut self) {
        self.walls.clear();
        self.items.clear();
    }

    #[must_use]
    pub fn any_selected(&self) -> bool {
        !self.walls.is_empty() || !self.items.is_empty()
    }

    #[must_use]
    pub fn has_selected_walls(&self) -> bool {
        !self.walls.is_empty()
    }

    /// Checks whether any selected item is a door present in `plan`.
    #[must_use]
    pub fn has_selected_door(&self, plan: &Plan) -> bool {
        !self.items.is_empty()
            && plan
                .items
                .iter()
                .any(|item| item.is_door() && self.items.contains(&item.id))
    }

    #[must_use]
    pub fn contains_wall(&self, id: &WallId) -> bool {
        self.walls.contains(id)
    }

    #[must_use]
    pub fn contains_item(&self, id: &ItemId) -> bool {
        self.items.contains(id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;
    use crate::model::{Item, ItemKind, OpeningKind, Wall, WallAttachment};

    fn item(id: &str, kind: OpeningKind) -> Item {
        Item {
            id: id.into(),
            kind: ItemKind::default_for(kind),
            wall_attach: WallAttachment {
                wall_id: "w".into(),
                offset: 0.0,
                length: 50.0,
            },
            thickness: 18.0,
        }
    }

    #[test]
    fn plain_click_replaces_across_categories() {
        let mut sel = Selection::new();
        sel.click(Some(Hit::Wall("w1".into())), false);
        sel.click(Some(Hit::Item("d1".into())), false);
        assert!(sel.walls.is_empty());
        assert_eq!(sel.items.len(), 1);
        assert!(sel.contains_item(&"d1".into()));
    }

    #[test]
    fn additive_click_accumulates() {
        let mut sel = Selection::new();
        sel.click(Some(Hit::Wall("w1".into())), false);
        sel.click(Some(Hit::Wall("w2".into())), true);
        sel.click(Some(Hit::Item("d1".into())), true);
        assert_eq!(sel.walls.len(), 2);
        assert_eq!(sel.items.len(), 1);
    }

    #[test]
    fn click_on_nothing() {
        let mut sel = Selection::new();
        sel.click(Some(Hit::Wall("w1".into())), false);
        sel.click(None, true);
        assert!(sel.has_selected_walls());
        sel.click(None, false);
        assert!(!sel.any_selected());
    }

    #[test]
    fn marquee_is_additive() {
        let mut sel = Selection::new();
        sel.click(Some(Hit::Item("d1".into())), false);
        sel.extend(MarqueeHits {
            walls: vec!["w1".into()],
            items: vec!["d2".into()],
        });
        assert_eq!(sel.walls.len(), 1);
        assert_eq!(sel.items.len(), 2);
    }

    #[test]
    fn door_predicate_checks_kind() {
        let wall = Wall::with_id("w".into(), Point2::new(0.0, 0.0), Point2::new(100.0, 0.0), 10.0)
            .unwrap();
        let plan = Plan::default()
            .with_wall(wall)
            .with_item(item("win", OpeningKind::Window))
            .with_item(item("door", OpeningKind::Door));

        let mut sel = Selection::new();
        assert!(!sel.has_selected_door(&plan));
        sel.click(Some(Hit::Item("win".into())), false);
        assert!(!sel.has_selected_door(&plan));
        sel.click(Some(Hit::Item("door".into())), true);
        assert!(sel.has_selected_door(&plan));
    }
}
