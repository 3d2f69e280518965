use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Short random suffix for freshly generated element ids.
fn fresh_suffix() -> String {
    let mut s = Uuid::new_v4().simple().to_string();
    s.truncate(12);
    s
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps an existing identifier.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            fn generate_with_prefix(prefix: &str) -> Self {
                Self(format!("{prefix}_{}", fresh_suffix()))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }
    };
}

string_id! {
    /// Identifier of a wall within a plan.
    WallId
}

string_id! {
    /// Identifier of an opening (door or window) within a plan.
    ItemId
}

impl WallId {
    /// Generates a fresh `wall_<hex>` id.
    #[must_use]
    pub fn generate() -> Self {
        Self::generate_with_prefix("wall")
    }
}

impl ItemId {
    /// Generates a fresh id prefixed with the opening kind, e.g. `door_<hex>`.
    #[must_use]
    pub fn generate(kind: super::OpeningKind) -> Self {
        Self::generate_with_prefix(kind.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OpeningKind;

    #[test]
    fn generated_ids_are_prefixed_and_unique() {
        let a = WallId::generate();
        let b = WallId::generate();
        assert!(a.as_str().starts_with("wall_"));
        assert_ne!(a, b);

        let d = ItemId::generate(OpeningKind::Door);
        let w = ItemId::generate(OpeningKind::Window);
        assert!(d.as_str().starts_with("door_"));
        assert!(w.as_str().starts_with("window_"));
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = WallId::new("wall_1");
        assert_eq!(serde_json::to_string(&id).ok().as_deref(), Some("\"wall_1\""));
    }
}
