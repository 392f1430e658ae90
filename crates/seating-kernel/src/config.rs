//! Configuration types for the kernel.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Default minimum Manhattan distance between members of one party.
pub const DEFAULT_MIN_DISTANCE: u32 = 3;

/// How the repair search enumerates candidate seat sets.
///
/// Both strategies return the same seat set for the same grid; they differ
/// only in memory use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepairStrategy {
    /// FIFO frontier of partial seat sequences, expanded breadth-first.
    Frontier,
    /// Direct lexicographic enumeration of same-size seat combinations.
    #[default]
    Combinations,
}

impl RepairStrategy {
    pub fn name(self) -> &'static str {
        match self {
            RepairStrategy::Frontier => "frontier",
            RepairStrategy::Combinations => "combinations",
        }
    }
}

impl std::str::FromStr for RepairStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "frontier" | "bfs" => Ok(RepairStrategy::Frontier),
            "combinations" | "combos" => Ok(RepairStrategy::Combinations),
            _ => bail!("Unknown repair strategy: {}. Valid: frontier, combinations", s),
        }
    }
}

/// Settings for one assignment run.
///
/// Loaded from JSON at runtime or built in code. Each run owns its config,
/// so independent runs never share state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeatingConfig {
    /// Pairs of a party's seats closer than this are a violation
    pub min_distance: u32,

    /// Enumeration used by the repair search
    pub repair: RepairStrategy,

    /// Maximum candidate seat sets a single repair may examine.
    /// `None` searches exhaustively; running out counts as a failed repair.
    pub search_budget: Option<usize>,
}

impl Default for SeatingConfig {
    fn default() -> Self {
        Self {
            min_distance: DEFAULT_MIN_DISTANCE,
            repair: RepairStrategy::default(),
            search_budget: None,
        }
    }
}

impl SeatingConfig {
    pub fn with_min_distance(mut self, min_distance: u32) -> Self {
        self.min_distance = min_distance;
        self
    }

    pub fn with_repair(mut self, repair: RepairStrategy) -> Self {
        self.repair = repair;
        self
    }

    pub fn with_search_budget(mut self, budget: Option<usize>) -> Self {
        self.search_budget = budget;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_distance == 0 {
            bail!("min_distance must be positive");
        }
        if self.search_budget == Some(0) {
            bail!("search_budget must be positive when set");
        }
        Ok(())
    }

    /// Load and validate a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = serde_json::from_str(&json)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SeatingConfig::default();
        assert_eq!(config.min_distance, 3);
        assert_eq!(config.repair, RepairStrategy::Combinations);
        assert_eq!(config.search_budget, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_min_distance() {
        let config = SeatingConfig::default().with_min_distance(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_budget() {
        let config = SeatingConfig::default().with_search_budget(Some(0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SeatingConfig =
            serde_json::from_str(r#"{ "repair": "frontier" }"#).unwrap();
        assert_eq!(config.min_distance, 3);
        assert_eq!(config.repair, RepairStrategy::Frontier);
    }

    #[test]
    fn test_parse_strategy() {
        assert_eq!("BFS".parse::<RepairStrategy>().unwrap(), RepairStrategy::Frontier);
        assert_eq!(
            "combinations".parse::<RepairStrategy>().unwrap(),
            RepairStrategy::Combinations
        );
        assert!("astar".parse::<RepairStrategy>().is_err());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(SeatingConfig::load("/nonexistent/seating.json").is_err());
    }
}
