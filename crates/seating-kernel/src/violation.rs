//! Spacing checks: the feasibility predicate and the spread score.
//!
//! Both are pure functions over a party's own seats. Other parties' seats are
//! never considered.

use crate::grid::Coord;

/// True if any pair of `seats` sits strictly closer than `min_distance`.
///
/// Sequences with fewer than two seats never violate.
pub fn has_violation(seats: &[Coord], min_distance: u32) -> bool {
    seats.iter().enumerate().any(|(i, a)| {
        seats[i + 1..]
            .iter()
            .any(|b| a.distance(b) < min_distance)
    })
}

/// Summed distance from `seat` to every seat in `placed` (0 when empty).
///
/// Higher means farther from the rest of the party.
pub fn spread_score(seat: Coord, placed: &[Coord]) -> u32 {
    placed.iter().map(|other| seat.distance(other)).sum()
}

/// The closest pair of `seats`, if there are at least two.
pub fn closest_pair(seats: &[Coord]) -> Option<(Coord, Coord, u32)> {
    let mut best: Option<(Coord, Coord, u32)> = None;
    for (i, a) in seats.iter().enumerate() {
        for b in &seats[i + 1..] {
            let d = a.distance(b);
            if best.is_none_or(|(_, _, current)| d < current) {
                best = Some((*a, *b, d));
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seats(pairs: &[(usize, usize)]) -> Vec<Coord> {
        pairs.iter().copied().map(Coord::from).collect()
    }

    #[test]
    fn test_short_sequences_never_violate() {
        assert!(!has_violation(&[], 3));
        assert!(!has_violation(&seats(&[(0, 0)]), 3));
    }

    #[test]
    fn test_violation_below_threshold() {
        // distance 2 < 3
        assert!(has_violation(&seats(&[(0, 0), (1, 1)]), 3));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        // distance exactly 3 is allowed
        assert!(!has_violation(&seats(&[(0, 0), (1, 2)]), 3));
    }

    #[test]
    fn test_any_pair_counts() {
        // first two are far apart, the last pair is adjacent
        let s = seats(&[(0, 0), (5, 5), (5, 4)]);
        assert!(has_violation(&s, 3));
        assert!(!has_violation(&s[..2], 3));
    }

    #[test]
    fn test_spread_score() {
        assert_eq!(spread_score(Coord::new(2, 2), &[]), 0);
        let placed = seats(&[(0, 0), (3, 3)]);
        assert_eq!(spread_score(Coord::new(0, 3), &placed), 6);
    }

    #[test]
    fn test_closest_pair() {
        assert_eq!(closest_pair(&seats(&[(0, 0)])), None);
        let s = seats(&[(0, 0), (5, 5), (5, 4)]);
        assert_eq!(
            closest_pair(&s),
            Some((Coord::new(5, 5), Coord::new(5, 4), 1))
        );
    }
}
