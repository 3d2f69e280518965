use tracing::{debug, warn};

use super::plan::{Plan, PLAN_VERSION};
use crate::error::{PersistenceError, Result};

impl Plan {
    /// Serializes the plan as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| PersistenceError::Json(e).into())
    }

    /// Parses and validates a plan document.
    ///
    /// Documents written under any version other than [`PLAN_VERSION`] are
    /// rejected before their body is interpreted.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError` for malformed JSON, a missing or unknown
    /// version, and `PlanError` if the decoded plan breaks an invariant.
    pub fn from_json(source: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(source).map_err(PersistenceError::Json)?;

        let Some(version) = value.get("version").and_then(serde_json::Value::as_str) else {
            warn!("rejecting plan document without version");
            return Err(PersistenceError::MissingVersion.into());
        };
        if version != PLAN_VERSION {
            warn!(found = version, expected = PLAN_VERSION, "rejecting plan document");
            return Err(PersistenceError::UnsupportedVersion {
                found: version.to_owned(),
                expected: PLAN_VERSION,
            }
            .into());
        }

        let plan: Self = serde_json::from_value(value).map_err(PersistenceError::Json)?;
        plan.validate()?;
        debug!(
            walls = plan.walls.len(),
            items = plan.items.len(),
            "loaded plan document"
        );
        Ok(plan)
    }
}
