//! Editor tunables.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Wall thickness presets offered to the user, in document units.
pub const WALL_THICKNESS_PRESETS: [f64; 6] = [7.0, 10.0, 12.0, 15.0, 20.0, 40.0];

/// Tunable constants of the editing engine.
///
/// Every field has a default, so a partial JSON document only overrides the
/// keys it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Grid size of newly created plans.
    pub grid_size: f64,
    /// Thickness applied to newly drawn walls.
    pub wall_thickness: f64,
    /// Lower bound when nudging wall thickness.
    pub min_wall_thickness: f64,
    /// Maximum distance from a wall at which an opening click attaches.
    pub snap_tolerance: f64,
    /// Slack added around walls and openings for point hit-tests.
    pub hit_tolerance: f64,
    /// Smallest opening span produced by a placement gesture.
    pub min_opening_width: f64,
    /// Added to the owning wall's thickness to get an opening's visual thickness.
    pub opening_margin: f64,
    /// Exponential zoom rate per unit of wheel delta.
    pub zoom_sensitivity: f64,
    pub min_scale: f64,
    pub max_scale: f64,
    /// Maximum number of undo steps kept; `None` keeps all of them.
    pub history_limit: Option<usize>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid_size: crate::model::DEFAULT_GRID_SIZE,
            wall_thickness: 10.0,
            min_wall_thickness: 1.0,
            snap_tolerance: 30.0,
            hit_tolerance: 6.0,
            min_opening_width: 5.0,
            opening_margin: 8.0,
            zoom_sensitivity: 0.001,
            min_scale: 0.2,
            max_scale: 8.0,
            history_limit: None,
        }
    }
}

impl EditorConfig {
    /// Parses a configuration document and validates it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed JSON and
    /// `ConfigError::Invalid` if a value is out of range.
    pub fn from_json(source: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(source).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("gridSize", self.grid_size),
            ("wallThickness", self.wall_thickness),
            ("minWallThickness", self.min_wall_thickness),
            ("minOpeningWidth", self.min_opening_width),
            ("zoomSensitivity", self.zoom_sensitivity),
            ("minScale", self.min_scale),
            ("maxScale", self.max_scale),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                let message = format!("{name} must be positive, got {value}");
                return Err(ConfigError::Invalid(message).into());
            }
        }

        let non_negative = [
            ("snapTolerance", self.snap_tolerance),
            ("hitTolerance", self.hit_tolerance),
            ("openingMargin", self.opening_margin),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                let message = format!("{name} must not be negative, got {value}");
                return Err(ConfigError::Invalid(message).into());
            }
        }

        if self.min_scale >= self.max_scale {
            return Err(ConfigError::Invalid(format!(
                "minScale {} must be below maxScale {}",
                self.min_scale, self.max_scale
            ))
            .into());
        }
        if self.history_limit == Some(0) {
            return Err(ConfigError::Invalid("historyLimit must be at least 1".to_owned()).into());
        }
        Ok(())
    }
}
