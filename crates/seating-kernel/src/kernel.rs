//! The assignment kernel: greedy placement followed by per-party repair.
//!
//! ## Usage
//!
//! ```
//! use seating_kernel::{Party, SeatGrid, SeatingConfig, SeatingKernel};
//!
//! let kernel = SeatingKernel::new(SeatingConfig::default())?;
//! let grid = SeatGrid::new(4, 4)?;
//! let outcome = kernel.assign(grid, &[Party::new(["A", "B"])]);
//!
//! assert!(outcome.unresolved.is_empty());
//! println!("{}", outcome.grid);
//! # Ok::<(), anyhow::Error>(())
//! ```

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::SeatingConfig;
use crate::greedy;
use crate::grid::{Coord, SeatGrid};
use crate::party::{Party, PartyId, PartyPlacement};
use crate::repair;
use crate::violation::{closest_pair, has_violation};

/// Everything one assignment run hands back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentOutcome {
    /// Final occupancy
    pub grid: SeatGrid,
    /// Final seats per party, in member order
    pub placements: PartyPlacement,
    /// Parties whose spacing violation was repaired
    pub repaired: Vec<PartyId>,
    /// Parties whose violation could not be repaired; their seats are left empty
    pub unresolved: Vec<PartyId>,
}

impl AssignmentOutcome {
    pub fn seated_count(&self) -> usize {
        self.placements.seated_count()
    }

    /// True if every member of every party has a seat.
    pub fn is_fully_seated(&self, parties: &[Party]) -> bool {
        parties
            .iter()
            .enumerate()
            .all(|(id, party)| self.placements.get(id).len() == party.size())
    }
}

/// Runs assignments with a fixed configuration.
///
/// The kernel holds no state between runs; each call to `assign` owns its
/// grid from start to finish.
#[derive(Debug, Clone)]
pub struct SeatingKernel {
    config: SeatingConfig,
}

impl SeatingKernel {
    pub fn new(config: SeatingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SeatingConfig {
        &self.config
    }

    /// Assign `parties` onto an all-empty `rows x cols` grid.
    pub fn assign_empty(&self, rows: usize, cols: usize, parties: &[Party]) -> Result<AssignmentOutcome> {
        let grid = SeatGrid::new(rows, cols)?;
        Ok(self.assign(grid, parties))
    }

    /// Seat every party, then repair any party left too close together.
    ///
    /// Parties are handled strictly in input order, so earlier parties get
    /// first choice of both greedy and repaired seats. Never fails: parties
    /// that cannot be repaired are reported in `unresolved`.
    pub fn assign(&self, mut grid: SeatGrid, parties: &[Party]) -> AssignmentOutcome {
        let min_distance = self.config.min_distance;
        let mut placements = greedy::place_all(&mut grid, parties);
        let mut repaired = Vec::new();
        let mut unresolved = Vec::new();

        for party_id in 0..parties.len() {
            if !has_violation(placements.get(party_id), min_distance) {
                continue;
            }

            if let Some((a, b, distance)) = closest_pair(placements.get(party_id)) {
                info!(party = party_id, %a, %b, distance, min_distance, "Fixing party");
            }

            let cleared = self.clear_party(&mut grid, &mut placements, party_id);
            let outcome = repair::search(&grid, cleared.len(), &self.config);
            debug!(
                party = party_id,
                strategy = self.config.repair.name(),
                examined = outcome.examined,
                found = outcome.is_found(),
                "Repair search finished"
            );

            match outcome.seats {
                Some(seats) => {
                    let seats: Vec<Coord> = seats
                        .into_iter()
                        .filter(|seat| grid.occupy(*seat, party_id))
                        .collect();
                    placements.set(party_id, seats);
                    repaired.push(party_id);
                }
                None => {
                    warn!(
                        party = party_id,
                        budget_exhausted = outcome.budget_exhausted,
                        "Could not fix party P{}'s placement",
                        party_id
                    );
                    unresolved.push(party_id);
                }
            }
        }

        AssignmentOutcome {
            grid,
            placements,
            repaired,
            unresolved,
        }
    }

    /// Empty every seat held by `party_id` and drop its placement entries.
    fn clear_party(
        &self,
        grid: &mut SeatGrid,
        placements: &mut PartyPlacement,
        party_id: PartyId,
    ) -> Vec<Coord> {
        let cleared = placements.take(party_id);
        for seat in &cleared {
            grid.release(*seat, party_id);
        }
        cleared
    }
}
