//! Chain connectivity over same-owner hex adjacency. Chains are never
//! stored; every query re-runs the traversal against the live board.

use std::collections::{HashSet, VecDeque};

use cachex_types::{Coord, Player};
use smallvec::SmallVec;

use crate::board::Board;

impl Board {
    /// Maximal same-owner chain through `seed`, plus its endpoint(s):
    /// the first-found members with minimal and maximal value along the
    /// owner's winning axis (deduplicated when they coincide). An empty
    /// seed yields the degenerate singleton.
    #[must_use]
    pub fn connected(&self, seed: Coord) -> (Vec<Coord>, SmallVec<[Coord; 2]>) {
        let Some(owner) = self.get(seed) else {
            return (vec![seed], SmallVec::from_slice(&[seed]));
        };

        let mut reachable = Vec::new();
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        visited.insert(seed);
        queue.push_back(seed);

        while let Some(current) = queue.pop_front() {
            reachable.push(current);
            for next in self.neighbours(current) {
                if self.get(next) == Some(owner) && visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        let endpoints = chain_endpoints(&reachable, owner);
        (reachable, endpoints)
    }

    /// True iff the chain through `coord` spans the full board on
    /// `player`'s axis. Both extremes are read off the same traversal,
    /// so two disjoint chains each touching one border never count.
    #[must_use]
    pub fn win_detected(&self, coord: Coord, player: Player) -> bool {
        let (reachable, _) = self.connected(coord);
        let min = reachable.iter().map(|c| player.axis_value(*c)).min();
        let max = reachable.iter().map(|c| player.axis_value(*c)).max();
        min == Some(0) && max == Some(self.size() - 1)
    }

    /// Largest chain owned by `player` with its endpoints; ties keep
    /// the first chain found in row-major scan order. Returns empty
    /// collections when the player has no tokens.
    #[must_use]
    pub fn longest_chain(&self, player: Player) -> (Vec<Coord>, SmallVec<[Coord; 2]>) {
        let mut searched: HashSet<Coord> = HashSet::new();
        let mut best: (Vec<Coord>, SmallVec<[Coord; 2]>) = (Vec::new(), SmallVec::new());
        for coord in self.coords() {
            if self.get(coord) != Some(player) || searched.contains(&coord) {
                continue;
            }
            let (chain, endpoints) = self.connected(coord);
            searched.extend(chain.iter().copied());
            if chain.len() > best.0.len() {
                best = (chain, endpoints);
            }
        }
        best
    }
}

// First-found members at the minimal and maximal axis value; strict
// comparisons keep the earliest candidate on ties.
fn chain_endpoints(chain: &[Coord], owner: Player) -> SmallVec<[Coord; 2]> {
    let mut endpoints: SmallVec<[Coord; 2]> = SmallVec::new();
    let (mut min, mut max) = (chain[0], chain[0]);
    for &member in chain {
        if owner.axis_value(member) < owner.axis_value(min) {
            min = member;
        }
        if owner.axis_value(member) > owner.axis_value(max) {
            max = member;
        }
    }
    endpoints.push(min);
    if max != min {
        endpoints.push(max);
    }
    endpoints
}
