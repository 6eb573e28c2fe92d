//! Allocation configuration.

use serde::{Deserialize, Serialize};

/// How students with equal grade averages are ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Keep the order in which students were loaded.
    #[default]
    LoadOrder,
    /// Lexicographic by student id.
    ById,
}

/// Settings for an [`ElectiveManager`](crate::allocation::ElectiveManager).
///
/// Missing fields fall back to their defaults when deserialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocationConfig {
    /// Tie-breaking policy for equal averages.
    pub tie_break: TieBreak,
}

impl AllocationConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tie-breaking policy.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_load_order() {
        assert_eq!(AllocationConfig::new().tie_break, TieBreak::LoadOrder);
    }

    #[test]
    fn test_deserialize_partial() {
        let cfg: AllocationConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, AllocationConfig::default());

        let cfg: AllocationConfig = serde_json::from_str(r#"{"tie_break":"by_id"}"#).unwrap();
        assert_eq!(cfg.tie_break, TieBreak::ById);
    }
}
