//! Repair search: find a fully spaced seat set for a party that was seated too close.
//!
//! The search only reads the grid. Candidate seats are the cells that are
//! empty when the search starts, in row-major order. The answer is the first
//! seat set, in breadth-first expansion order, whose every pair is at least
//! `min_distance` apart. There is no heuristic or best-first ordering: the
//! search is exhaustive and returns the first feasible set it meets.
//!
//! Two enumerations are provided:
//! - `Frontier` keeps a FIFO queue of partial seat sequences and extends each
//!   with every candidate not already in it.
//! - `Combinations` walks same-size combinations of the candidates in
//!   lexicographic order.
//!
//! Both return the same seat set. Any feasible sequence can be sorted into a
//! feasible combination that comes no later in lexicographic order, so the
//! first feasible sequence the frontier completes is always the first feasible
//! combination.

use std::collections::{HashSet, VecDeque};

use tracing::trace;

use crate::config::{RepairStrategy, SeatingConfig};
use crate::grid::{Coord, SeatGrid};
use crate::violation::has_violation;

/// Result of one repair search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepairOutcome {
    /// The seats found, in expansion order; `None` if the search failed.
    pub seats: Option<Vec<Coord>>,
    /// Full-size candidate seat sets tested against the spacing rule.
    pub examined: usize,
    /// True when the search stopped because the configured budget ran out.
    pub budget_exhausted: bool,
}

impl RepairOutcome {
    fn found(seats: Vec<Coord>, examined: usize) -> Self {
        Self {
            seats: Some(seats),
            examined,
            budget_exhausted: false,
        }
    }

    fn failed(examined: usize, budget_exhausted: bool) -> Self {
        Self {
            seats: None,
            examined,
            budget_exhausted,
        }
    }

    pub fn is_found(&self) -> bool {
        self.seats.is_some()
    }
}

/// Search for `size` mutually spaced seats among the grid's empty cells.
pub fn search(grid: &SeatGrid, size: usize, config: &SeatingConfig) -> RepairOutcome {
    let candidates = grid.empty_cells();
    search_candidates(&candidates, size, config)
}

/// Search over an explicit candidate list, given in row-major order.
pub fn search_candidates(
    candidates: &[Coord],
    size: usize,
    config: &SeatingConfig,
) -> RepairOutcome {
    if size == 0 {
        return RepairOutcome::found(Vec::new(), 0);
    }
    if size > candidates.len() {
        return RepairOutcome::failed(0, false);
    }

    let mut budget = Budget::new(config.search_budget);
    match config.repair {
        RepairStrategy::Frontier => {
            frontier_search(candidates, size, config.min_distance, &mut budget)
        }
        RepairStrategy::Combinations => {
            combination_search(candidates, size, config.min_distance, &mut budget)
        }
    }
}

/// Counts tested candidates against an optional cap.
struct Budget {
    limit: Option<usize>,
    examined: usize,
}

impl Budget {
    fn new(limit: Option<usize>) -> Self {
        Self { limit, examined: 0 }
    }

    /// Record one more test; false once the cap has been reached.
    fn spend(&mut self) -> bool {
        if self.limit.is_some_and(|limit| self.examined >= limit) {
            return false;
        }
        self.examined += 1;
        true
    }
}

fn frontier_search(
    candidates: &[Coord],
    size: usize,
    min_distance: u32,
    budget: &mut Budget,
) -> RepairOutcome {
    let mut frontier: VecDeque<Vec<Coord>> = candidates.iter().map(|c| vec![*c]).collect();
    let mut seen: HashSet<Vec<Coord>> = HashSet::new();

    while let Some(current) = frontier.pop_front() {
        if current.len() == size {
            if !budget.spend() {
                return RepairOutcome::failed(budget.examined, true);
            }
            if !has_violation(&current, min_distance) {
                trace!(examined = budget.examined, frontier = frontier.len(), "Frontier hit");
                return RepairOutcome::found(current, budget.examined);
            }
            continue;
        }

        for &cell in candidates {
            if current.contains(&cell) {
                continue;
            }
            let mut next = Vec::with_capacity(current.len() + 1);
            next.extend_from_slice(&current);
            next.push(cell);
            if seen.insert(next.clone()) {
                frontier.push_back(next);
            }
        }
    }

    RepairOutcome::failed(budget.examined, false)
}

fn combination_search(
    candidates: &[Coord],
    size: usize,
    min_distance: u32,
    budget: &mut Budget,
) -> RepairOutcome {
    let n = candidates.len();
    let mut indices: Vec<usize> = (0..size).collect();
    let mut seats: Vec<Coord> = Vec::with_capacity(size);

    loop {
        if !budget.spend() {
            return RepairOutcome::failed(budget.examined, true);
        }

        seats.clear();
        seats.extend(indices.iter().map(|&i| candidates[i]));
        if !has_violation(&seats, min_distance) {
            trace!(examined = budget.examined, "Combination hit");
            return RepairOutcome::found(seats, budget.examined);
        }

        // Advance to the next combination: bump the rightmost index that
        // still has room, then reset everything after it.
        let Some(pivot) = (0..size).rev().find(|&i| indices[i] < n - size + i) else {
            return RepairOutcome::failed(budget.examined, false);
        };
        indices[pivot] += 1;
        for i in pivot + 1..size {
            indices[i] = indices[i - 1] + 1;
        }
    }
}
