//! Seating Experiment CLI.
//!
//! Commands:
//! - single: Assign one scenario and print the grid
//! - bench: Time every preset scenario over repeated trials
//! - generate: Generate a random scenario and assign it

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use seating_experiment::results::{format_duration, RunResult};
use seating_experiment::{ExperimentRunner, GeneratorConfig, Scenario, ScenarioGenerator};
use seating_kernel::{RepairStrategy, SeatingConfig};

/// Generate a timestamped output path from the given path.
/// e.g., "bench.json" -> "bench-20260108-010530.json"
fn timestamped_path(path: &Path) -> PathBuf {
    let timestamp = Local::now().format("%Y%m%d-%H%M%S");
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("bench");
    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("json");
    let parent = path.parent().unwrap_or(Path::new("."));
    parent.join(format!("{}-{}.{}", stem, timestamp, ext))
}

#[derive(Parser)]
#[command(name = "seating-experiment")]
#[command(version)]
#[command(about = "Spaced seat assignment runs")]
struct Cli {
    /// JSON config file (min_distance, repair, search_budget)
    #[arg(long, env = "SEATING_CONFIG")]
    config: Option<PathBuf>,

    /// Minimum Manhattan distance between members of a party
    #[arg(long)]
    min_distance: Option<u32>,

    /// Repair enumeration: frontier or combinations
    #[arg(long)]
    repair: Option<RepairStrategy>,

    /// Maximum candidate seat sets per repair
    #[arg(long)]
    search_budget: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assign a single scenario
    Single {
        /// Preset: uniform, mixed, pairs
        #[arg(long, default_value = "uniform")]
        scenario: String,

        /// Custom grid rows (with --cols and --sizes)
        #[arg(long)]
        rows: Option<usize>,

        /// Custom grid columns (with --rows and --sizes)
        #[arg(long)]
        cols: Option<usize>,

        /// Custom party sizes (comma-separated)
        #[arg(long, value_delimiter = ',')]
        sizes: Option<Vec<usize>>,
    },

    /// Time the preset scenarios
    Bench {
        /// Number of trials per scenario
        #[arg(long, default_value = "5")]
        trials: usize,

        /// Output file for results
        #[arg(long, default_value = "results/seating-bench.json")]
        output: PathBuf,
    },

    /// Generate a random scenario and assign it
    Generate {
        #[arg(long, default_value = "6")]
        rows: usize,

        #[arg(long, default_value = "6")]
        cols: usize,

        /// Number of parties
        #[arg(long, default_value = "4")]
        parties: usize,

        /// Smallest party size
        #[arg(long, default_value = "2")]
        min_size: usize,

        /// Largest party size
        #[arg(long, default_value = "4")]
        max_size: usize,

        /// Seats reserved before placement
        #[arg(long, default_value = "0")]
        reserved: usize,

        /// Random seed
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl Cli {
    /// Build the kernel config: file first, then command-line overrides.
    fn seating_config(&self) -> Result<SeatingConfig> {
        let mut config = match &self.config {
            Some(path) => SeatingConfig::load(path)?,
            None => SeatingConfig::default(),
        };
        if let Some(min_distance) = self.min_distance {
            config.min_distance = min_distance;
        }
        if let Some(repair) = self.repair {
            config.repair = repair;
        }
        if self.search_budget.is_some() {
            config.search_budget = self.search_budget;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    let config = cli.seating_config()?;
    info!(
        min_distance = config.min_distance,
        repair = config.repair.name(),
        "Loaded config"
    );
    let runner = ExperimentRunner::new(config)?;

    match cli.command {
        Commands::Single {
            scenario,
            rows,
            cols,
            sizes,
        } => {
            let scenario = match (rows, cols, sizes) {
                (None, None, None) => scenario.parse::<Scenario>()?,
                (Some(rows), Some(cols), Some(party_sizes)) => Scenario::Custom {
                    rows,
                    cols,
                    party_sizes,
                },
                _ => bail!("--rows, --cols and --sizes must be given together"),
            };

            let (_, result) = runner.run(&scenario.spec())?;
            print_result(&result);
        }

        Commands::Bench { trials, output } => {
            info!(trials, "Starting bench");

            let specs: Vec<_> = Scenario::presets().iter().map(Scenario::spec).collect();
            let results = runner.bench(&specs, trials)?;

            let output_path = timestamped_path(&output);
            results.save(&output_path)?;

            println!("\n=== Bench Complete ===");
            println!("Results saved to: {}", output_path.display());
            println!("\nSummary:");
            let mut summaries: Vec<_> = results.summary.values().collect();
            summaries.sort_by(|a, b| a.scenario.cmp(&b.scenario));
            for summary in summaries {
                println!(
                    "  {}: mean={} min={} max={} unresolved={}",
                    summary.scenario,
                    format_duration(summary.mean_runtime_us.round() as u64),
                    format_duration(summary.min_runtime_us),
                    format_duration(summary.max_runtime_us),
                    summary.unresolved_parties
                );
            }
        }

        Commands::Generate {
            rows,
            cols,
            parties,
            min_size,
            max_size,
            reserved,
            seed,
        } => {
            let mut generator = ScenarioGenerator::new(GeneratorConfig {
                rows,
                cols,
                parties,
                party_size_range: (min_size, max_size),
                reserved_cells: reserved,
                seed,
            })?;
            let spec = generator.generate();

            println!("Scenario: {}", spec.name);
            println!("Party sizes: {:?}", spec.party_sizes());
            println!("Reserved seats: {}", spec.reserved.len());

            let (_, result) = runner.run(&spec)?;
            print_result(&result);
        }
    }

    Ok(())
}

fn print_result(result: &RunResult) {
    println!();
    for line in &result.grid {
        println!("{}", line);
    }

    println!("\nSeated: {}/{}", result.seated, result.members);
    if !result.repaired.is_empty() {
        println!("Repaired parties: {:?}", result.repaired);
    }
    for party in &result.unresolved {
        println!("Warning: could not fix party {}'s placement.", party);
    }
    println!(
        "\nRuntime: {:.4} seconds",
        result.runtime_us as f64 / 1_000_000.0
    );
}
