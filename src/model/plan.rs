use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Item, ItemId, Wall, WallId};
use crate::error::{PlanError, Result};

/// Schema version written into every plan document.
pub const PLAN_VERSION: &str = "1.2.0";

/// Grid size of a freshly created plan, in document units.
pub const DEFAULT_GRID_SIZE: f64 = 25.0;

/// Length unit of a plan document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Cm,
    M,
    Mm,
    In,
    Ft,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanMeta {
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub units: Units,
    pub grid_size: f64,
}

/// A floor-plan document: walls, the openings attached to them, and metadata.
///
/// Plans are treated as immutable values. Every edit goes through one of the
/// `with_*` / `without_*` / `map_*` helpers, which build a new plan with a
/// refreshed `updated_at` and leave `self` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub version: String,
    pub meta: PlanMeta,
    pub walls: Vec<Wall>,
    pub items: Vec<Item>,
}

impl Default for Plan {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_SIZE)
    }
}

impl Plan {
    /// Creates an empty, untitled plan in centimeters.
    #[must_use]
    pub fn new(grid_size: f64) -> Self {
        let now = Utc::now();
        Self {
            version: PLAN_VERSION.to_owned(),
            meta: PlanMeta {
                name: "Untitled".to_owned(),
                created_at: now,
                updated_at: now,
                units: Units::Cm,
                grid_size,
            },
            walls: Vec::new(),
            items: Vec::new(),
        }
    }

    #[must_use]
    pub fn grid_size(&self) -> f64 {
        self.meta.grid_size
    }

    #[must_use]
    pub fn wall(&self, id: &WallId) -> Option<&Wall> {
        self.walls.iter().find(|w| &w.id == id)
    }

    #[must_use]
    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Resolves the wall an item is attached to, if it still exists.
    #[must_use]
    pub fn owning_wall(&self, item: &Item) -> Option<&Wall> {
        self.wall(&item.wall_attach.wall_id)
    }

    /// Items whose owning wall no longer exists.
    pub fn orphaned_items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|i| self.owning_wall(i).is_none())
    }

    fn touched(mut self) -> Self {
        self.meta.updated_at = Utc::now();
        self
    }

    /// Returns a new plan with `wall` appended.
    #[must_use]
    pub fn with_wall(&self, wall: Wall) -> Self {
        let mut walls = Vec::with_capacity(self.walls.len() + 1);
        walls.extend(self.walls.iter().cloned());
        walls.push(wall);
        Self {
            walls,
            ..self.clone()
        }
        .touched()
    }

    /// Returns a new plan with `item` appended.
    #[must_use]
    pub fn with_item(&self, item: Item) -> Self {
        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.extend(self.items.iter().cloned());
        items.push(item);
        Self {
            items,
            ..self.clone()
        }
        .touched()
    }

    /// Returns a new plan without the listed walls and items.
    ///
    /// Items attached to a removed wall are kept unless listed themselves.
    #[must_use]
    pub fn without(&self, walls: &HashSet<WallId>, items: &HashSet<ItemId>) -> Self {
        Self {
            walls: self
                .walls
                .iter()
                .filter(|w| !walls.contains(&w.id))
                .cloned()
                .collect(),
            items: self
                .items
                .iter()
                .filter(|i| !items.contains(&i.id))
                .cloned()
                .collect(),
            ..self.clone()
        }
        .touched()
    }

    /// Returns a new plan with `f` applied to every wall in `ids`.
    #[must_use]
    pub fn map_walls(&self, ids: &HashSet<WallId>, f: impl Fn(&Wall) -> Wall) -> Self {
        Self {
            walls: self
                .walls
                .iter()
                .map(|w| if ids.contains(&w.id) { f(w) } else { w.clone() })
                .collect(),
            ..self.clone()
        }
        .touched()
    }

    /// Returns a new plan with `f` applied to every item in `ids`.
    #[must_use]
    pub fn map_items(&self, ids: &HashSet<ItemId>, f: impl Fn(&Item) -> Item) -> Self {
        Self {
            items: self
                .items
                .iter()
                .map(|i| if ids.contains(&i.id) { f(i) } else { i.clone() })
                .collect(),
            ..self.clone()
        }
        .touched()
    }

    /// Returns a copy of this plan with a refreshed `updated_at`.
    ///
    /// Used for generic edits built outside the targeted helpers.
    #[must_use]
    pub fn revised(self) -> Self {
        self.touched()
    }

    /// Checks the structural invariants of the document.
    ///
    /// # Errors
    ///
    /// Returns `PlanError` on a non-positive grid size, duplicate wall or item
    /// ids, or a non-positive wall or item thickness.
    pub fn validate(&self) -> Result<()> {
        if self.meta.grid_size.is_nan() || self.meta.grid_size <= 0.0 {
            return Err(PlanError::InvalidGridSize(self.meta.grid_size).into());
        }

        let mut wall_ids = HashSet::with_capacity(self.walls.len());
        for w in &self.walls {
            if !wall_ids.insert(&w.id) {
                return Err(PlanError::DuplicateWallId(w.id.to_string()).into());
            }
            if w.thickness.is_nan() || w.thickness <= 0.0 {
                return Err(PlanError::InvalidThickness {
                    kind: "wall",
                    id: w.id.to_string(),
                    thickness: w.thickness,
                }
                .into());
            }
        }

        let mut item_ids = HashSet::with_capacity(self.items.len());
        for i in &self.items {
            if !item_ids.insert(&i.id) {
                return Err(PlanError::DuplicateItemId(i.id.to_string()).into());
            }
            if i.thickness.is_nan() || i.thickness <= 0.0 {
                return Err(PlanError::InvalidThickness {
                    kind: "item",
                    id: i.id.to_string(),
                    thickness: i.thickness,
                }
                .into());
            }
        }

        Ok(())
    }
}
