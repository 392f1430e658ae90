//! Greedy spread placement.
//!
//! Seats every party, member by member, on the empty cell with the greatest
//! summed distance to the party's already-seated members. Spacing limits are
//! not checked here; the kernel repairs violations afterwards.

use tracing::{debug, trace};

use crate::grid::{Coord, SeatGrid};
use crate::party::{Party, PartyId, PartyPlacement};
use crate::violation::spread_score;

/// Pick the best empty seat for the next member of a party.
///
/// Cells are scanned in row-major order and only a strictly greater score
/// replaces the current best, so ties go to the first cell scanned.
pub fn best_seat(grid: &SeatGrid, placed: &[Coord]) -> Option<Coord> {
    let mut best: Option<(Coord, u32)> = None;
    for coord in grid.coords() {
        if !grid.is_empty_at(coord) {
            continue;
        }
        let score = spread_score(coord, placed);
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((coord, score));
        }
    }
    best.map(|(coord, _)| coord)
}

/// Seat one party and return its seats in member order.
///
/// Members for whom no empty cell remains are skipped.
pub fn place_party(grid: &mut SeatGrid, party_id: PartyId, party: &Party) -> Vec<Coord> {
    let mut placed = Vec::with_capacity(party.size());

    for member in &party.members {
        let Some(seat) = best_seat(grid, &placed) else {
            debug!(party = party_id, member = %member, "No empty seat left");
            continue;
        };
        if grid.occupy(seat, party_id) {
            trace!(party = party_id, member = %member, seat = %seat, "Seated");
            placed.push(seat);
        }
    }

    placed
}

/// Seat every party in input order.
pub fn place_all(grid: &mut SeatGrid, parties: &[Party]) -> PartyPlacement {
    let mut placement = PartyPlacement::new();

    for (party_id, party) in parties.iter().enumerate() {
        let seats = place_party(grid, party_id, party);
        debug!(
            party = party_id,
            members = party.size(),
            seated = seats.len(),
            "Greedy placement"
        );
        placement.set(party_id, seats);
    }

    placement
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;

    fn pair() -> Party {
        Party::new(["A", "B"])
    }

    #[test]
    fn test_first_member_takes_first_empty_cell() {
        let mut grid = SeatGrid::new(3, 3).unwrap();
        let seats = place_party(&mut grid, 0, &Party::new(["A"]));
        assert_eq!(seats, vec![Coord::new(0, 0)]);
    }

    #[test]
    fn test_second_member_takes_farthest_corner() {
        let mut grid = SeatGrid::new(4, 4).unwrap();
        let seats = place_party(&mut grid, 0, &pair());
        assert_eq!(seats, vec![Coord::new(0, 0), Coord::new(3, 3)]);
    }

    #[test]
    fn test_ties_go_to_first_scanned_cell() {
        // From (0,0) on a 2x3 grid, (1,2) is the unique farthest cell.
        // Every remaining cell then scores 3 for the third member, so the
        // first one scanned wins.
        let mut grid = SeatGrid::new(2, 3).unwrap();
        let seats = place_party(&mut grid, 0, &Party::new(["A", "B", "C"]));
        assert_eq!(
            seats,
            vec![Coord::new(0, 0), Coord::new(1, 2), Coord::new(0, 1)]
        );
    }

    #[test]
    fn test_first_member_skips_occupied_cells() {
        let mut grid = SeatGrid::new(2, 2)
            .unwrap()
            .with_reserved(&[Coord::new(0, 0)])
            .unwrap();
        let seats = place_party(&mut grid, 0, &Party::new(["A"]));
        assert_eq!(seats, vec![Coord::new(0, 1)]);
    }

    #[test]
    fn test_first_member_at_origin_despite_other_occupants() {
        let mut grid = SeatGrid::new(4, 4)
            .unwrap()
            .with_reserved(&[Coord::new(3, 3), Coord::new(2, 1)])
            .unwrap();
        let placement = place_all(&mut grid, &[Party::new(["A"])]);
        assert_eq!(placement.get(0)[0], Coord::new(0, 0));
    }

    #[test]
    fn test_full_grid_is_left_unchanged() {
        let mut grid = SeatGrid::from_rows(vec![vec![Cell::Reserved; 2]; 2]).unwrap();
        let before = grid.clone();

        let placement = place_all(&mut grid, &[pair(), pair()]);

        assert_eq!(grid, before);
        assert!(placement.get(0).is_empty());
        assert!(placement.get(1).is_empty());
        assert_eq!(placement.party_count(), 2);
    }

    #[test]
    fn test_runs_out_of_seats_mid_party() {
        let mut grid = SeatGrid::new(1, 3).unwrap();
        let placement = place_all(&mut grid, &[pair(), pair()]);

        assert_eq!(placement.get(0), &[Coord::new(0, 0), Coord::new(0, 2)]);
        assert_eq!(placement.get(1), &[Coord::new(0, 1)]);
        assert_eq!(grid.empty_count(), 0);
    }

    #[test]
    fn test_placement_matches_grid() {
        let mut grid = SeatGrid::new(6, 6).unwrap();
        let parties = vec![Party::new(["A", "B", "C"]); 4];
        let placement = place_all(&mut grid, &parties);

        for (party_id, seats) in placement.iter() {
            let mut sorted = seats.to_vec();
            sorted.sort();
            assert_eq!(sorted, grid.seats_of(party_id));
        }
        assert_eq!(grid.empty_count(), 36 - 12);
    }
}
