use thiserror::Error;

/// Top-level error type for the planwright editing engine.
///
/// Interactive misuse (clicking away from a wall, undoing with an empty
/// history, deleting an empty selection) is never reported through this type;
/// those operations are silent no-ops. Errors only arise at the crate boundary:
/// building validated values, loading plans and loading configuration.
#[derive(Debug, Error)]
pub enum PlanwrightError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to geometric values.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("{quantity} must be positive, got {value}")]
    NonPositive { quantity: &'static str, value: f64 },

    #[error("{quantity} must be finite, got {value}")]
    NonFinite { quantity: &'static str, value: f64 },
}

/// Structural invariant violations of a plan document.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("duplicate wall id: {0}")]
    DuplicateWallId(String),

    #[error("duplicate item id: {0}")]
    DuplicateItemId(String),

    #[error("grid size must be positive, got {0}")]
    InvalidGridSize(f64),

    #[error("{kind} {id} has non-positive thickness {thickness}")]
    InvalidThickness {
        kind: &'static str,
        id: String,
        thickness: f64,
    },
}

/// Errors raised while reading or writing a plan document.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("malformed plan document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("plan document has no version field")]
    MissingVersion,

    #[error("unsupported plan version {found}, expected {expected}")]
    UnsupportedVersion {
        found: String,
        expected: &'static str,
    },
}

/// Errors raised while loading editor configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Convenience type alias for results using [`PlanwrightError`].
pub type Result<T> = std::result::Result<T, PlanwrightError>;
