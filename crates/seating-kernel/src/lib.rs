//! Seating Kernel: spaced seat assignment for travel parties.
//!
//! Parties are seated on a fixed rectangular grid so that every pair of a
//! party's members sits at least a minimum Manhattan distance apart. Placement
//! runs in two phases:
//! - a deterministic greedy pass that spreads each party as far as possible
//! - a breadth-first repair search that re-seats any party left too close

pub mod config;
pub mod greedy;
pub mod grid;
pub mod kernel;
pub mod party;
pub mod repair;
pub mod violation;

pub use config::{RepairStrategy, SeatingConfig};
pub use grid::{Cell, Coord, SeatGrid};
pub use kernel::{AssignmentOutcome, SeatingKernel};
pub use party::{Party, PartyId, PartyPlacement};
pub use violation::{has_violation, spread_score};
