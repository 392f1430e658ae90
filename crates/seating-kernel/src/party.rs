//! Parties and their seat placements.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::grid::Coord;

/// Identifier for a party: its zero-based position in the supplied list.
pub type PartyId = usize;

/// An ordered group of members that must be seated with minimum spacing.
///
/// Members carry no seat-relevant data beyond their count and order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    pub members: Vec<String>,
}

impl Party {
    pub fn new<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    pub fn size(&self) -> usize {
        self.members.len()
    }
}

/// Seats currently assigned to each party, in member order.
///
/// A party's list may be shorter than its member count when placement or
/// repair could not seat everyone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyPlacement {
    seats: BTreeMap<PartyId, Vec<Coord>>,
}

impl PartyPlacement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, party: PartyId) -> &[Coord] {
        self.seats.get(&party).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Replace the seats recorded for `party`.
    pub fn set(&mut self, party: PartyId, seats: Vec<Coord>) {
        self.seats.insert(party, seats);
    }

    /// Drop every seat recorded for `party`, returning what was there.
    pub fn take(&mut self, party: PartyId) -> Vec<Coord> {
        self.seats
            .get_mut(&party)
            .map(std::mem::take)
            .unwrap_or_default()
    }

    /// Parties in identifier order with their seats.
    pub fn iter(&self) -> impl Iterator<Item = (PartyId, &[Coord])> {
        self.seats.iter().map(|(id, seats)| (*id, seats.as_slice()))
    }

    pub fn party_count(&self) -> usize {
        self.seats.len()
    }

    /// Total seats assigned across all parties.
    pub fn seated_count(&self) -> usize {
        self.seats.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_party_size() {
        let party = Party::new(["A", "B", "C"]);
        assert_eq!(party.size(), 3);
        assert_eq!(party.members[1], "B");
    }

    #[test]
    fn test_take_keeps_entry_but_empties_it() {
        let mut placement = PartyPlacement::new();
        placement.set(0, vec![Coord::new(0, 0), Coord::new(1, 1)]);

        let taken = placement.take(0);
        assert_eq!(taken.len(), 2);
        assert!(placement.get(0).is_empty());
        assert_eq!(placement.party_count(), 1);
    }

    #[test]
    fn test_unknown_party_has_no_seats() {
        let placement = PartyPlacement::new();
        assert!(placement.get(7).is_empty());
        assert_eq!(placement.seated_count(), 0);
    }
}
