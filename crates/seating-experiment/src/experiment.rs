//! Experiment runner: drives scenarios through the kernel and times them.

use std::time::Instant;

use anyhow::Result;
use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use seating_kernel::{AssignmentOutcome, SeatingConfig, SeatingKernel};

use crate::results::{BenchResults, RunResult};
use crate::scenario::ScenarioSpec;

/// Runs scenarios with one kernel configuration.
pub struct ExperimentRunner {
    kernel: SeatingKernel,
}

impl ExperimentRunner {
    pub fn new(config: SeatingConfig) -> Result<Self> {
        Ok(Self {
            kernel: SeatingKernel::new(config)?,
        })
    }

    pub fn config(&self) -> &SeatingConfig {
        self.kernel.config()
    }

    /// Run a scenario once, returning the kernel outcome and the timed result.
    pub fn run(&self, spec: &ScenarioSpec) -> Result<(AssignmentOutcome, RunResult)> {
        let grid = spec.grid()?;
        debug!(
            scenario = %spec.name,
            rows = spec.rows,
            cols = spec.cols,
            parties = spec.parties.len(),
            reserved = spec.reserved.len(),
            "Starting run"
        );

        let started_at = Utc::now();
        let start = Instant::now();
        let outcome = self.kernel.assign(grid, &spec.parties);
        let runtime_us = start.elapsed().as_micros() as u64;
        let ended_at = Utc::now();

        for party in &outcome.unresolved {
            warn!(scenario = %spec.name, party, "Party left unseated");
        }

        let result = RunResult {
            run_id: Uuid::new_v4(),
            scenario: spec.name.clone(),
            rows: spec.rows,
            cols: spec.cols,
            party_sizes: spec.party_sizes(),
            config: self.kernel.config().clone(),
            started_at,
            ended_at,
            runtime_us,
            grid: outcome.grid.render_rows(),
            placements: outcome.placements.clone(),
            repaired: outcome.repaired.clone(),
            unresolved: outcome.unresolved.clone(),
            seated: outcome.seated_count(),
            members: spec.member_count(),
        };

        Ok((outcome, result))
    }

    /// Run every scenario `trials` times and collect the timings.
    pub fn bench(&self, specs: &[ScenarioSpec], trials: usize) -> Result<BenchResults> {
        let mut results = BenchResults::new();
        let total = specs.len() * trials;
        let mut completed = 0;

        for spec in specs {
            for trial in 0..trials {
                let (_, result) = self.run(spec)?;
                completed += 1;
                info!(
                    progress = format!("{}/{}", completed, total),
                    scenario = %spec.name,
                    trial,
                    runtime_us = result.runtime_us,
                    "Completed run"
                );
                results.add(result);
            }
        }

        results.compute_summary();
        Ok(results)
    }
}
