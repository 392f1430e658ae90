//! Results collection and output for seating runs.
//!
//! Captures, per run:
//! - the final rendered grid and placements
//! - repaired and unresolved parties
//! - wall-clock runtime

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use seating_kernel::{PartyId, PartyPlacement, SeatingConfig};

/// Results from a single assignment run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResult {
    pub run_id: Uuid,
    /// Scenario name
    pub scenario: String,
    pub rows: usize,
    pub cols: usize,
    pub party_sizes: Vec<usize>,
    pub config: SeatingConfig,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    /// Time spent inside the kernel
    pub runtime_us: u64,
    /// Rendered grid, one line per row
    pub grid: Vec<String>,
    pub placements: PartyPlacement,
    pub repaired: Vec<PartyId>,
    pub unresolved: Vec<PartyId>,
    /// Members with a seat
    pub seated: usize,
    /// Members across all parties
    pub members: usize,
}

impl RunResult {
    pub fn is_fully_seated(&self) -> bool {
        self.seated == self.members
    }
}

/// Aggregate results from repeated timed runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchResults {
    pub results: Vec<RunResult>,
    /// Summary statistics by scenario name
    pub summary: HashMap<String, BenchSummary>,
}

/// Summary statistics for one scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchSummary {
    pub scenario: String,
    pub trials: usize,
    pub mean_runtime_us: f64,
    /// Standard error of the mean runtime
    pub runtime_se_us: f64,
    pub min_runtime_us: u64,
    pub max_runtime_us: u64,
    pub repaired_parties: usize,
    pub unresolved_parties: usize,
    pub fully_seated_rate: f64,
}

impl BenchResults {
    pub fn new() -> Self {
        Self {
            results: Vec::new(),
            summary: HashMap::new(),
        }
    }

    pub fn add(&mut self, result: RunResult) {
        self.results.push(result);
    }

    /// Compute summary statistics.
    pub fn compute_summary(&mut self) {
        let mut by_scenario: HashMap<String, Vec<&RunResult>> = HashMap::new();
        for result in &self.results {
            by_scenario
                .entry(result.scenario.clone())
                .or_default()
                .push(result);
        }

        self.summary.clear();
        for (scenario, results) in by_scenario {
            let trials = results.len();
            let n = trials as f64;

            let runtimes: Vec<f64> = results.iter().map(|r| r.runtime_us as f64).collect();
            let mean_runtime_us = runtimes.iter().sum::<f64>() / n;

            // SE = std_dev / sqrt(n)
            let runtime_se_us = if trials > 1 {
                let variance = runtimes
                    .iter()
                    .map(|t| (t - mean_runtime_us).powi(2))
                    .sum::<f64>()
                    / (n - 1.0);
                variance.sqrt() / n.sqrt()
            } else {
                0.0
            };

            let min_runtime_us = results.iter().map(|r| r.runtime_us).min().unwrap_or(0);
            let max_runtime_us = results.iter().map(|r| r.runtime_us).max().unwrap_or(0);

            // Runs are deterministic, so these agree across trials.
            let repaired_parties = results.iter().map(|r| r.repaired.len()).max().unwrap_or(0);
            let unresolved_parties = results.iter().map(|r| r.unresolved.len()).max().unwrap_or(0);

            let fully_seated_rate =
                results.iter().filter(|r| r.is_fully_seated()).count() as f64 / n;

            self.summary.insert(
                scenario.clone(),
                BenchSummary {
                    scenario,
                    trials,
                    mean_runtime_us,
                    runtime_se_us,
                    min_runtime_us,
                    max_runtime_us,
                    repaired_parties,
                    unresolved_parties,
                    fully_seated_rate,
                },
            );
        }
    }

    /// Save results to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// Load results from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let results = serde_json::from_str(&json)?;
        Ok(results)
    }
}

impl Default for BenchResults {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a duration in microseconds for display.
pub fn format_duration(us: u64) -> String {
    if us < 1_000 {
        format!("{}us", us)
    } else if us < 1_000_000 {
        format!("{:.1}ms", us as f64 / 1_000.0)
    } else {
        format!("{:.4}s", us as f64 / 1_000_000.0)
    }
}
