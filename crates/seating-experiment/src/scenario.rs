//! Seating scenarios: preset sample runs and a seeded random generator.

use anyhow::{bail, Result};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use seating_kernel::{Coord, Party, SeatGrid};

/// A concrete problem: grid shape, reserved seats and parties in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioSpec {
    pub name: String,
    pub rows: usize,
    pub cols: usize,
    /// Seats unavailable from the start
    pub reserved: Vec<Coord>,
    pub parties: Vec<Party>,
}

impl ScenarioSpec {
    /// Build a scenario with consecutively lettered members.
    pub fn new(name: impl Into<String>, rows: usize, cols: usize, party_sizes: &[usize]) -> Self {
        Self {
            name: name.into(),
            rows,
            cols,
            reserved: Vec::new(),
            parties: lettered_parties(party_sizes),
        }
    }

    /// The initial grid for this scenario.
    pub fn grid(&self) -> Result<SeatGrid> {
        SeatGrid::new(self.rows, self.cols)?.with_reserved(&self.reserved)
    }

    pub fn party_sizes(&self) -> Vec<usize> {
        self.parties.iter().map(Party::size).collect()
    }

    pub fn member_count(&self) -> usize {
        self.parties.iter().map(Party::size).sum()
    }
}

/// Member name for the `index`-th member overall: `A`..`Z`, then `A1`..`Z1`, ...
pub fn member_name(index: usize) -> String {
    let letter = (b'A' + (index % 26) as u8) as char;
    match index / 26 {
        0 => letter.to_string(),
        round => format!("{}{}", letter, round),
    }
}

/// Parties of the given sizes with members lettered in order across parties.
pub fn lettered_parties(sizes: &[usize]) -> Vec<Party> {
    let mut next = 0;
    sizes
        .iter()
        .map(|&size| {
            let members = (next..next + size).map(member_name);
            next += size;
            Party::new(members)
        })
        .collect()
}

/// Preset scenarios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scenario {
    /// 6x6 with four parties of three
    Uniform,
    /// 6x6 with parties of four, three, two and four
    Mixed,
    /// 4x4 with six pairs
    Pairs,
    /// Custom grid and party sizes
    Custom {
        rows: usize,
        cols: usize,
        party_sizes: Vec<usize>,
    },
}

impl Scenario {
    pub fn presets() -> Vec<Scenario> {
        vec![Scenario::Uniform, Scenario::Mixed, Scenario::Pairs]
    }

    pub fn name(&self) -> String {
        match self {
            Scenario::Uniform => "uniform".to_string(),
            Scenario::Mixed => "mixed".to_string(),
            Scenario::Pairs => "pairs".to_string(),
            Scenario::Custom { rows, cols, .. } => format!("custom-{}x{}", rows, cols),
        }
    }

    pub fn spec(&self) -> ScenarioSpec {
        let name = self.name();
        match self {
            Scenario::Uniform => ScenarioSpec::new(name, 6, 6, &[3, 3, 3, 3]),
            Scenario::Mixed => ScenarioSpec::new(name, 6, 6, &[4, 3, 2, 4]),
            Scenario::Pairs => ScenarioSpec::new(name, 4, 4, &[2; 6]),
            Scenario::Custom {
                rows,
                cols,
                party_sizes,
            } => ScenarioSpec::new(name, *rows, *cols, party_sizes),
        }
    }
}

impl std::str::FromStr for Scenario {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "uniform" | "1" => Ok(Scenario::Uniform),
            "mixed" | "2" => Ok(Scenario::Mixed),
            "pairs" | "3" => Ok(Scenario::Pairs),
            _ => bail!("Unknown scenario: {}. Valid: uniform, mixed, pairs", s),
        }
    }
}

/// Configuration for random scenario generation.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub rows: usize,
    pub cols: usize,
    /// Number of parties
    pub parties: usize,
    /// Members per party, inclusive range (min, max)
    pub party_size_range: (usize, usize),
    /// Seats to reserve before placement
    pub reserved_cells: usize,
    /// Random seed for reproducibility (None for random)
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            rows: 6,
            cols: 6,
            parties: 4,
            party_size_range: (2, 4),
            reserved_cells: 0,
            seed: None,
        }
    }
}

/// Generator for random seating scenarios.
pub struct ScenarioGenerator {
    config: GeneratorConfig,
    rng: ChaCha8Rng,
}

impl ScenarioGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        let (min, max) = config.party_size_range;
        if min > max {
            bail!("Invalid party size range: {}..={}", min, max);
        }
        if config.rows == 0 || config.cols == 0 {
            bail!("Grid dimensions must be positive, got {}x{}", config.rows, config.cols);
        }

        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };
        Ok(Self { config, rng })
    }

    pub fn generate(&mut self) -> ScenarioSpec {
        let (min, max) = self.config.party_size_range;
        let sizes: Vec<usize> = (0..self.config.parties)
            .map(|_| self.rng.random_range(min..=max))
            .collect();

        let mut positions: Vec<Coord> = (0..self.config.rows)
            .flat_map(|row| (0..self.config.cols).map(move |col| Coord::new(row, col)))
            .collect();
        positions.shuffle(&mut self.rng);
        let mut reserved: Vec<Coord> = positions
            .into_iter()
            .take(self.config.reserved_cells)
            .collect();
        reserved.sort();

        let name = format!(
            "generated-{}x{}-{:08x}",
            self.config.rows,
            self.config.cols,
            self.rng.random::<u32>()
        );

        ScenarioSpec {
            name,
            rows: self.config.rows,
            cols: self.config.cols,
            reserved,
            parties: lettered_parties(&sizes),
        }
    }

    pub fn generate_batch(&mut self, count: usize) -> Vec<ScenarioSpec> {
        (0..count).map(|_| self.generate()).collect()
    }
}
