//! Interactive editing session: tools, gestures, view and selection over an
//! edit history.
//!
//! The host feeds pointer, wheel and key events; every handler runs to
//! completion and leaves the editor in a consistent state that can be rendered
//! through [`Editor::snapshot`].

mod commands;
mod input;
mod preview;
mod tool;

pub use input::{Key, KeyEvent, Modifiers, PointerButton, PointerEvent, WheelEvent};
pub use preview::{Preview, RenderSnapshot};
pub use tool::Tool;

use tracing::{debug, trace, warn};

use crate::config::EditorConfig;
use crate::error::{GeometryError, Result};
use crate::history::EditHistory;
use crate::math::snap_2d::snap_to_grid;
use crate::math::{Point2, Rect, TOLERANCE};
use crate::model::{OpeningKind, Plan, Wall};
use crate::operations::attach::{PendingOpening, PlacementParams};
use crate::operations::select::{pick, MarqueeSelect};
use crate::selection::Selection;
use crate::view::{GridLines, ViewState};

/// In-progress gesture state. Cleared by Escape and tool switches; never
/// recorded in history.
#[derive(Debug, Clone, Default)]
struct Gesture {
    panning: bool,
    /// Primary button held since a press on the canvas.
    pressed: bool,
    /// The current press armed the wall start, so its release may commit.
    armed_on_press: bool,
    wall_start: Option<Point2>,
    opening: Option<PendingOpening>,
    /// Marquee origin and current corner, in world space.
    marquee: Option<(Point2, Point2)>,
}

/// One open document with its editing session.
#[derive(Debug, Clone)]
pub struct Editor {
    config: EditorConfig,
    history: EditHistory,
    view: ViewState,
    selection: Selection,
    tool: Tool,
    wall_thickness: f64,
    /// Top-left corner of the canvas in client coordinates.
    canvas_origin: Point2,
    /// Last known pointer position in world space.
    cursor: Option<Point2>,
    gesture: Gesture,
    preview: Preview,
}

impl Default for Editor {
    fn default() -> Self {
        let config = EditorConfig::default();
        let plan = Plan::new(config.grid_size);
        Self::assemble(config, plan)
    }
}

impl Editor {
    /// Starts a session on an empty plan.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if `config` does not validate.
    pub fn new(config: EditorConfig) -> Result<Self> {
        config.validate()?;
        let plan = Plan::new(config.grid_size);
        Ok(Self::assemble(config, plan))
    }

    /// Starts a session on an existing plan.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` or `plan` does not validate.
    pub fn with_plan(config: EditorConfig, plan: Plan) -> Result<Self> {
        config.validate()?;
        plan.validate()?;
        Ok(Self::assemble(config, plan))
    }

    fn assemble(config: EditorConfig, plan: Plan) -> Self {
        debug!(walls = plan.walls.len(), items = plan.items.len(), "editor opened");
        Self {
            history: EditHistory::new(plan).with_limit(config.history_limit),
            wall_thickness: config.wall_thickness,
            config,
            view: ViewState::default(),
            selection: Selection::default(),
            tool: Tool::default(),
            canvas_origin: Point2::origin(),
            cursor: None,
            gesture: Gesture::default(),
            preview: Preview::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    #[must_use]
    pub fn plan(&self) -> &Plan {
        self.history.plan()
    }

    #[must_use]
    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn tool(&self) -> Tool {
        self.tool
    }

    #[must_use]
    pub fn wall_thickness(&self) -> f64 {
        self.wall_thickness
    }

    #[must_use]
    pub fn cursor(&self) -> Option<Point2> {
        self.cursor
    }

    #[must_use]
    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Borrows everything a renderer needs.
    #[must_use]
    pub fn snapshot(&self) -> RenderSnapshot<'_> {
        RenderSnapshot {
            plan: self.history.plan(),
            view: &self.view,
            selection: &self.selection,
            preview: &self.preview,
        }
    }

    /// Grid lines at the plan's grid size covering a `width` x `height` canvas.
    #[must_use]
    pub fn visible_grid_lines(&self, width: f64, height: f64) -> GridLines {
        self.view
            .visible_grid_lines(width, height, self.history.plan().grid_size())
    }

    /// Switches tools, abandoning any gesture in progress.
    pub fn set_tool(&mut self, tool: Tool) {
        if tool == self.tool {
            return;
        }
        self.cancel_gesture();
        debug!(from = %self.tool, to = %tool, "tool switched");
        self.tool = tool;
        self.refresh_preview();
    }

    /// Sets the thickness used for newly drawn walls.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonPositive` if `thickness` is not positive.
    pub fn set_wall_thickness(&mut self, thickness: f64) -> Result<()> {
        if !thickness.is_finite() || thickness <= 0.0 {
            return Err(GeometryError::NonPositive {
                quantity: "wall thickness",
                value: thickness,
            }
            .into());
        }
        self.wall_thickness = thickness;
        Ok(())
    }

    pub fn set_canvas_origin(&mut self, origin: Point2) {
        self.canvas_origin = origin;
    }

    pub fn set_view(&mut self, view: ViewState) {
        self.view = view;
    }

    /// Handles a pointer press.
    pub fn pointer_down(&mut self, event: &PointerEvent) {
        let world = self.to_world(&event.client);
        self.cursor = Some(world);

        if event.button == PointerButton::Secondary || self.tool == Tool::Pan {
            self.gesture.panning = true;
            trace!("pan engaged");
            return;
        }
        if event.button != PointerButton::Primary {
            return;
        }
        self.gesture.pressed = true;

        match self.tool {
            Tool::Wall => self.press_wall(world),
            Tool::Select => self.press_select(world, event.modifiers.shift),
            Tool::Window | Tool::Door | Tool::Pan => {
                if let Some(kind) = self.tool.opening_kind() {
                    self.press_opening(kind, world);
                }
            }
        }
        self.refresh_preview();
    }

    /// Handles pointer movement.
    pub fn pointer_move(&mut self, event: &PointerEvent) {
        if self.gesture.panning {
            self.view = self.view.panned_by(&event.movement);
        }
        let world = self.to_world(&event.client);
        self.cursor = Some(world);

        let params = PlacementParams::from(&self.config);
        let tracked = self
            .gesture
            .opening
            .as_ref()
            .and_then(|pending| pending.track(&world, self.history.plan(), &params));
        if let Some(next) = tracked {
            self.gesture.opening = Some(next);
        }

        if let Some((origin, _)) = self.gesture.marquee {
            self.gesture.marquee = Some((origin, world));
        }
        self.refresh_preview();
    }

    /// Handles a pointer release.
    pub fn pointer_up(&mut self, event: &PointerEvent) {
        let world = self.to_world(&event.client);
        self.cursor = Some(world);

        if self.gesture.panning {
            self.gesture.panning = false;
            trace!("pan released");
            return;
        }
        if !std::mem::take(&mut self.gesture.pressed) {
            return;
        }

        match self.tool {
            Tool::Wall => {
                let armed = std::mem::take(&mut self.gesture.armed_on_press);
                if let Some(start) = self.gesture.wall_start.filter(|_| armed) {
                    let end = snap_to_grid(&world, self.history.plan().grid_size());
                    self.chain_wall(start, end);
                }
            }
            Tool::Select => {
                if let Some((origin, _)) = self.gesture.marquee.take() {
                    self.finish_marquee(Rect::from_corners(origin, world));
                }
            }
            Tool::Window | Tool::Door | Tool::Pan => {}
        }
        self.refresh_preview();
    }

    /// Zooms around the cursor.
    pub fn wheel(&mut self, event: &WheelEvent) {
        let screen = Point2::from(event.client - self.canvas_origin);
        self.view = self.view.zoomed_at(
            &screen,
            event.delta_y,
            self.config.zoom_sensitivity,
            self.config.min_scale,
            self.config.max_scale,
        );
        trace!(scale = self.view.scale, "zoomed");
    }

    /// Handles a key press. Returns `true` if the key did something.
    pub fn key_down(&mut self, event: &KeyEvent) -> bool {
        let modifiers = event.modifiers;
        let handled = match event.key {
            Key::Escape => self.cancel_gesture(),
            Key::Delete | Key::Backspace => self.delete_selection(),
            Key::BracketLeft => self.nudge_wall_thickness(-1.0),
            Key::BracketRight => self.nudge_wall_thickness(1.0),
            Key::Char('z') if modifiers.command() => {
                if modifiers.shift {
                    self.redo()
                } else {
                    self.undo()
                }
            }
            Key::Char('y') if modifiers.command() => self.redo(),
            Key::Char('h') if !modifiers.command() => self.toggle_door_hinge(),
            Key::Char('s') if !modifiers.command() => self.toggle_door_swing(),
            Key::Char(_) => false,
        };
        self.refresh_preview();
        handled
    }

    /// Abandons the gesture in progress. Returns `true` if one was pending.
    pub fn cancel_gesture(&mut self) -> bool {
        let gesture = std::mem::take(&mut self.gesture);
        let pending =
            gesture.wall_start.is_some() || gesture.opening.is_some() || gesture.marquee.is_some();
        if pending {
            debug!("gesture cancelled");
        }
        self.refresh_preview();
        pending
    }

    fn to_world(&self, client: &Point2) -> Point2 {
        self.view.client_to_world(client, &self.canvas_origin)
    }

    fn press_wall(&mut self, world: Point2) {
        let snapped = snap_to_grid(&world, self.history.plan().grid_size());
        self.gesture.armed_on_press = self.gesture.wall_start.is_none();
        match self.gesture.wall_start {
            None => {
                debug!(x = snapped.x, y = snapped.y, "wall start armed");
                self.gesture.wall_start = Some(snapped);
            }
            Some(start) => self.chain_wall(start, snapped),
        }
    }

    /// Commits a wall and re-arms the start at its end. Zero-length walls are
    /// ignored and leave the start armed.
    fn chain_wall(&mut self, start: Point2, end: Point2) {
        if (end - start).norm() < TOLERANCE {
            trace!("zero-length wall ignored");
            return;
        }
        match Wall::new(start, end, self.wall_thickness) {
            Ok(wall) => {
                self.add_wall(wall);
                self.gesture.wall_start = Some(end);
            }
            Err(err) => warn!(%err, "wall rejected"),
        }
    }

    fn press_opening(&mut self, kind: OpeningKind, world: Point2) {
        let params = PlacementParams::from(&self.config);
        let plan = self.history.plan();

        let Some(pending) = self.gesture.opening.as_ref() else {
            self.gesture.opening = PendingOpening::begin(kind, &world, plan, &params);
            if self.gesture.opening.is_none() {
                trace!("opening click away from any wall ignored");
            }
            return;
        };

        match pending.finish(&world, plan, &params) {
            Some(item) => {
                self.gesture.opening = None;
                self.add_item(item);
            }
            None => trace!("opening click off the starting wall ignored"),
        }
    }

    fn press_select(&mut self, world: Point2, additive: bool) {
        let hit = pick(self.history.plan(), &world, self.config.hit_tolerance);
        let on_empty = hit.is_none();
        self.selection.click(hit, additive);
        if on_empty {
            self.gesture.marquee = Some((world, world));
        }
    }

    fn finish_marquee(&mut self, rect: Rect) {
        if rect.is_point() {
            return;
        }
        let hits = MarqueeSelect::new(rect).execute(self.history.plan());
        debug!(
            walls = hits.walls.len(),
            items = hits.items.len(),
            "marquee selection"
        );
        self.selection.extend(hits);
    }

    fn refresh_preview(&mut self) {
        let plan = self.history.plan();
        let wall = match (self.tool, self.gesture.wall_start, self.cursor) {
            (Tool::Wall, Some(start), Some(cursor)) => {
                Some((start, snap_to_grid(&cursor, plan.grid_size())))
            }
            _ => None,
        };
        self.preview = Preview {
            wall,
            opening: self.gesture.opening.as_ref().and_then(|p| p.preview(plan)),
            marquee: self
                .gesture
                .marquee
                .map(|(origin, corner)| Rect::from_corners(origin, corner)),
        };
    }
}
