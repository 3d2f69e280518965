//! History-committing edits. Each successful command commits exactly once;
//! a command whose precondition fails leaves the history untouched.

use std::collections::HashSet;

use tracing::debug;

use super::Editor;
use crate::model::{DoorProps, Item, ItemId, Plan, Wall};

impl Editor {
    /// Appends a wall.
    pub fn add_wall(&mut self, wall: Wall) {
        debug!(wall = %wall.id, length = wall.length(), "wall added");
        let next = self.history.plan().with_wall(wall);
        self.history.commit(next);
    }

    /// Appends an opening.
    pub fn add_item(&mut self, item: Item) {
        debug!(item = %item.id, kind = item.kind.opening_kind().as_str(), "item added");
        let next = self.history.plan().with_item(item);
        self.history.commit(next);
    }

    /// Commits an arbitrary edit built from the current plan.
    pub fn update_plan(&mut self, edit: impl FnOnce(&Plan) -> Plan) {
        let next = edit(self.history.plan()).revised();
        debug!("plan updated");
        self.history.commit(next);
    }

    /// Removes every selected wall and item, then clears the selection.
    ///
    /// Items attached to a deleted wall stay in the plan unless selected too.
    pub fn delete_selection(&mut self) -> bool {
        let plan = self.history.plan();
        let present = plan.walls.iter().any(|w| self.selection.contains_wall(&w.id))
            || plan.items.iter().any(|i| self.selection.contains_item(&i.id));
        if !present {
            return false;
        }
        let next = plan.without(&self.selection.walls, &self.selection.items);
        debug!(
            walls = self.selection.walls.len(),
            items = self.selection.items.len(),
            "selection deleted"
        );
        self.history.commit(next);
        self.selection.clear();
        true
    }

    /// Changes the thickness of every selected wall by `delta`, never going
    /// below the configured minimum.
    pub fn nudge_wall_thickness(&mut self, delta: f64) -> bool {
        let plan = self.history.plan();
        if !plan.walls.iter().any(|w| self.selection.contains_wall(&w.id)) {
            return false;
        }
        let min = self.config.min_wall_thickness;
        let next = plan.map_walls(&self.selection.walls, |w| {
            w.with_thickness(w.thickness + delta, min)
        });
        debug!(delta, "wall thickness nudged");
        self.history.commit(next);
        true
    }

    /// Flips the hinge edge of every selected door.
    pub fn toggle_door_hinge(&mut self) -> bool {
        self.edit_selected_doors("hinge edge toggled", |props| DoorProps {
            hinge_edge: props.hinge_edge.toggled(),
            ..props
        })
    }

    /// Flips the swing side of every selected door.
    pub fn toggle_door_swing(&mut self) -> bool {
        self.edit_selected_doors("swing side toggled", |props| DoorProps {
            swing_side: props.swing_side.toggled(),
            ..props
        })
    }

    /// Steps back in history. The selection is left alone.
    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    /// Steps forward in history. The selection is left alone.
    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    fn edit_selected_doors(
        &mut self,
        what: &'static str,
        f: impl Fn(DoorProps) -> DoorProps,
    ) -> bool {
        let plan = self.history.plan();
        if !self.selection.has_selected_door(plan) {
            return false;
        }
        let doors: HashSet<ItemId> = plan
            .items
            .iter()
            .filter(|i| i.is_door() && self.selection.contains_item(&i.id))
            .map(|i| i.id.clone())
            .collect();
        let next = plan.map_items(&doors, |item| item.map_door(&f));
        debug!(doors = doors.len(), "{what}");
        self.history.commit(next);
        true
    }
}
