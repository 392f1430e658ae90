//! Seating Experiment: sample scenarios and timed runs for the seating kernel.
//!
//! This crate wraps the kernel with the pieces needed to exercise it:
//! - preset scenarios and a seeded random scenario generator
//! - a runner that times assignments and records their outcomes
//! - JSON result collection with per-scenario summaries

pub mod experiment;
pub mod results;
pub mod scenario;

pub use experiment::ExperimentRunner;
pub use results::{BenchResults, BenchSummary, RunResult};
pub use scenario::{GeneratorConfig, Scenario, ScenarioGenerator, ScenarioSpec};
