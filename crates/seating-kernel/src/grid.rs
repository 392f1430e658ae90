//! Grid types: coordinates, cells and the seat grid that parties are placed on.
//!
//! The grid is a fixed `rows x cols` array. Cells are either empty, reserved
//! (occupied before the run and never available) or held by a party.

use std::fmt;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::party::PartyId;

/// A seat position. Row 0 / column 0 is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance: sum of absolute row and column differences.
    pub fn distance(&self, other: &Coord) -> u32 {
        (self.row.abs_diff(other.row) + self.col.abs_diff(other.col)) as u32
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Occupancy state of a single seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "party", rename_all = "snake_case")]
pub enum Cell {
    #[default]
    Empty,
    /// Pre-occupied in the initial occupancy; never assigned or cleared.
    Reserved,
    Party(PartyId),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn party(&self) -> Option<PartyId> {
        match self {
            Cell::Party(id) => Some(*id),
            _ => None,
        }
    }
}

/// The seat grid. Dimensions are fixed for the lifetime of the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<Cell>>,
}

impl SeatGrid {
    /// Create an all-empty grid.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            bail!("Grid dimensions must be positive, got {}x{}", rows, cols);
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![vec![Cell::Empty; cols]; rows],
        })
    }

    /// Create a grid from an explicit initial occupancy.
    ///
    /// Every row must have the same, non-zero length.
    pub fn from_rows(cells: Vec<Vec<Cell>>) -> Result<Self> {
        let rows = cells.len();
        let cols = cells.first().map(Vec::len).unwrap_or(0);
        if rows == 0 || cols == 0 {
            bail!("Grid dimensions must be positive, got {}x{}", rows, cols);
        }

        for (i, row) in cells.iter().enumerate() {
            if row.len() != cols {
                bail!("Row {} has {} columns, expected {}", i, row.len(), cols);
            }
        }

        Ok(Self { rows, cols, cells })
    }

    /// Mark the given seats as reserved.
    pub fn with_reserved(mut self, seats: &[Coord]) -> Result<Self> {
        for &seat in seats {
            if !self.contains(seat) {
                bail!(
                    "Reserved seat {} is outside the {}x{} grid",
                    seat,
                    self.rows,
                    self.cols
                );
            }
            self.cells[seat.row][seat.col] = Cell::Reserved;
        }
        Ok(self)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cells(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.cells
            .get(coord.row)
            .and_then(|row| row.get(coord.col))
            .copied()
    }

    pub fn is_empty_at(&self, coord: Coord) -> bool {
        self.get(coord).is_some_and(|cell| cell.is_empty())
    }

    /// Seat `party` at `coord`.
    ///
    /// Returns false, leaving the grid untouched, when the seat is out of
    /// bounds or not empty.
    pub fn occupy(&mut self, coord: Coord, party: PartyId) -> bool {
        if !self.is_empty_at(coord) {
            return false;
        }
        self.cells[coord.row][coord.col] = Cell::Party(party);
        true
    }

    /// Empty `coord` if, and only if, it is currently held by `party`.
    pub fn release(&mut self, coord: Coord, party: PartyId) -> bool {
        if self.get(coord) != Some(Cell::Party(party)) {
            return false;
        }
        self.cells[coord.row][coord.col] = Cell::Empty;
        true
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Coord::new(row, col)))
    }

    /// Empty coordinates in row-major order.
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.coords().filter(|c| self.is_empty_at(*c)).collect()
    }

    pub fn empty_count(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| cell.is_empty())
            .count()
    }

    /// Seats currently held by `party`, in row-major order.
    pub fn seats_of(&self, party: PartyId) -> Vec<Coord> {
        self.coords()
            .filter(|c| self.get(*c) == Some(Cell::Party(party)))
            .collect()
    }

    /// Render one row as `" P0 |  . | P1"`.
    pub fn format_row(row: &[Cell]) -> String {
        row.iter()
            .map(|cell| {
                let label = match cell {
                    Cell::Empty => " . ".to_string(),
                    Cell::Reserved => " # ".to_string(),
                    Cell::Party(id) => format!("P{}", id),
                };
                format!("{:>3}", label)
            })
            .collect::<Vec<_>>()
            .join(" | ")
    }

    /// Rendered rows, top to bottom.
    pub fn render_rows(&self) -> Vec<String> {
        self.cells.iter().map(|row| Self::format_row(row)).collect()
    }
}

impl fmt::Display for SeatGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.render_rows() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_is_symmetric() {
        let a = Coord::new(0, 4);
        let b = Coord::new(3, 1);
        assert_eq!(a.distance(&b), 6);
        assert_eq!(b.distance(&a), 6);
        assert_eq!(a.distance(&a), 0);
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        assert!(SeatGrid::new(0, 4).is_err());
        assert!(SeatGrid::new(4, 0).is_err());
        assert!(SeatGrid::from_rows(vec![]).is_err());
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let rows = vec![vec![Cell::Empty; 3], vec![Cell::Empty; 2]];
        assert!(SeatGrid::from_rows(rows).is_err());
    }

    #[test]
    fn test_occupy_and_release() {
        let mut grid = SeatGrid::new(2, 2).unwrap();
        let seat = Coord::new(1, 0);

        assert!(grid.occupy(seat, 3));
        assert!(!grid.occupy(seat, 4), "occupied seat cannot be taken again");
        assert!(!grid.release(seat, 4), "only the holding party can release");
        assert_eq!(grid.get(seat), Some(Cell::Party(3)));

        assert!(grid.release(seat, 3));
        assert!(grid.is_empty_at(seat));
    }

    #[test]
    fn test_occupy_out_of_bounds() {
        let mut grid = SeatGrid::new(2, 2).unwrap();
        assert!(!grid.occupy(Coord::new(2, 0), 0));
        assert_eq!(grid.empty_count(), 4);
    }

    #[test]
    fn test_reserved_cells_are_not_empty() {
        let grid = SeatGrid::new(2, 3)
            .unwrap()
            .with_reserved(&[Coord::new(0, 0), Coord::new(1, 2)])
            .unwrap();

        assert_eq!(grid.empty_count(), 4);
        assert_eq!(
            grid.empty_cells(),
            vec![
                Coord::new(0, 1),
                Coord::new(0, 2),
                Coord::new(1, 0),
                Coord::new(1, 1)
            ]
        );
        assert!(SeatGrid::new(2, 2)
            .unwrap()
            .with_reserved(&[Coord::new(5, 5)])
            .is_err());
    }

    #[test]
    fn test_coords_are_row_major() {
        let grid = SeatGrid::new(2, 2).unwrap();
        let coords: Vec<_> = grid.coords().collect();
        assert_eq!(
            coords,
            vec![
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(1, 0),
                Coord::new(1, 1)
            ]
        );
    }

    #[test]
    fn test_format_row() {
        let row = vec![Cell::Party(0), Cell::Empty, Cell::Reserved, Cell::Party(12)];
        assert_eq!(SeatGrid::format_row(&row), " P0 |  .  |  #  | P12");
    }

    #[test]
    fn test_display_one_line_per_row() {
        let grid = SeatGrid::new(3, 2).unwrap();
        let rendered = grid.to_string();
        assert_eq!(rendered.lines().count(), 3);
        assert_eq!(rendered.lines().next(), Some(" .  |  . "));
    }
}
