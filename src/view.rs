//! Pan/zoom view transform between world space and screen space.
//!
//! The forward map is `screen = world * scale + pan`. Screen coordinates are
//! relative to the canvas origin; client coordinates from the input source are
//! converted by subtracting that origin first.

use crate::math::{Point2, Vector2};

/// Transient pan/zoom state. Never part of the plan document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub pan_x: f64,
    pub pan_y: f64,
    pub scale: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            pan_x: 0.0,
            pan_y: 0.0,
            scale: 1.0,
        }
    }
}

/// World-space grid lines covering a viewport.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridLines {
    /// X coordinates of vertical lines.
    pub columns: Vec<f64>,
    /// Y coordinates of horizontal lines.
    pub rows: Vec<f64>,
}

impl ViewState {
    #[must_use]
    pub fn pan(&self) -> Vector2 {
        Vector2::new(self.pan_x, self.pan_y)
    }

    #[must_use]
    pub fn world_to_screen(&self, world: &Point2) -> Point2 {
        world * self.scale + self.pan()
    }

    #[must_use]
    pub fn screen_to_world(&self, screen: &Point2) -> Point2 {
        (screen - self.pan()) / self.scale
    }

    /// Converts a client coordinate, given the canvas' top-left corner in
    /// client space.
    #[must_use]
    pub fn client_to_world(&self, client: &Point2, canvas_origin: &Point2) -> Point2 {
        let screen = Point2::from(client - canvas_origin);
        self.screen_to_world(&screen)
    }

    /// Returns the view translated by a raw screen-space delta.
    #[must_use]
    pub fn panned_by(&self, delta: &Vector2) -> Self {
        Self {
            pan_x: self.pan_x + delta.x,
            pan_y: self.pan_y + delta.y,
            ..*self
        }
    }

    /// Returns the view rescaled to `scale` (clamped to `[min, max]`) while
    /// keeping the world point under `screen` fixed.
    #[must_use]
    pub fn scaled_at(&self, screen: &Point2, scale: f64, min: f64, max: f64) -> Self {
        let new_scale = scale.clamp(min, max);
        let before = self.screen_to_world(screen);
        let after = (screen - self.pan()) / new_scale;
        let shift = (after - before.coords) * new_scale;
        Self {
            pan_x: self.pan_x + shift.x,
            pan_y: self.pan_y + shift.y,
            scale: new_scale,
        }
    }

    /// Applies a wheel step: `scale *= exp(-delta_y * sensitivity)`, anchored
    /// at `screen`.
    #[must_use]
    pub fn zoomed_at(
        &self,
        screen: &Point2,
        delta_y: f64,
        sensitivity: f64,
        min: f64,
        max: f64,
    ) -> Self {
        let factor = (-delta_y * sensitivity).exp();
        self.scaled_at(screen, self.scale * factor, min, max)
    }

    /// Grid lines at multiples of `step` covering a `width` x `height` viewport.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn visible_grid_lines(&self, width: f64, height: f64, step: f64) -> GridLines {
        if !step.is_finite() || step <= 0.0 || self.scale <= 0.0 {
            return GridLines::default();
        }
        let top_left = self.screen_to_world(&Point2::origin());
        let bottom_right = self.screen_to_world(&Point2::new(width, height));

        let span = |lo: f64, hi: f64| -> Vec<f64> {
            let first = (lo / step).floor() as i64;
            let last = (hi / step).ceil() as i64;
            (first..=last).map(|i| i as f64 * step).collect()
        };

        GridLines {
            columns: span(top_left.x, bottom_right.x),
            rows: span(top_left.y, bottom_right.y),
        }
    }
}
