//! A* over the hex adjacency graph, used to score how far a chain
//! endpoint still is from a border.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use cachex_types::{Coord, Player};

use crate::board::Board;

impl Board {
    /// Lowest-cost route from `start` to `goal` for `player`, unit step
    /// cost, axial distance as the heuristic. Cells holding the
    /// opponent are impassable; empty and own cells are not. Returns
    /// the path start-first and inclusive of both ends, or an empty
    /// vector when no route exists — "no viable route" is an ordinary
    /// outcome, not an error.
    #[must_use]
    pub fn shortest_path(&self, start: Coord, goal: Coord, player: Player) -> Vec<Coord> {
        let mut open: BinaryHeap<Reverse<(u32, u32, Coord)>> = BinaryHeap::new();
        let mut closed: HashSet<Coord> = HashSet::new();
        let mut came_from: HashMap<Coord, Coord> = HashMap::new();
        let mut g: HashMap<Coord, u32> = HashMap::new();

        let h0 = start.axial_distance(goal);
        g.insert(start, 0);
        open.push(Reverse((h0, h0, start)));

        while let Some(Reverse((_, _, current))) = open.pop() {
            // Stale queue entries for already-settled nodes are skipped
            if !closed.insert(current) {
                continue;
            }
            if current == goal {
                return backtrace(goal, start, &came_from);
            }
            for next in self.neighbours(current) {
                if !self.passable(next, player) || closed.contains(&next) {
                    continue;
                }
                let next_g = g[&current] + 1;
                if next_g < g.get(&next).copied().unwrap_or(u32::MAX) {
                    g.insert(next, next_g);
                    came_from.insert(next, current);
                    let next_h = next.axial_distance(goal);
                    // Priority by f, then h, so ties favour the node
                    // already closer to the goal
                    open.push(Reverse((next_g + next_h, next_h, next)));
                }
            }
        }
        Vec::new()
    }
}

fn backtrace(goal: Coord, start: Coord, came_from: &HashMap<Coord, Coord>) -> Vec<Coord> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        current = came_from[&current];
        path.push(current);
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_route_on_open_board() {
        let board = Board::new(5);
        let path = board.shortest_path(Coord::new(0, 2), Coord::new(4, 2), Player::Red);
        assert_eq!(path.len(), 5);
        assert_eq!(path[0], Coord::new(0, 2));
        assert_eq!(path[4], Coord::new(4, 2));
        for pair in path.windows(2) {
            assert_eq!(pair[0].axial_distance(pair[1]), 1);
        }
    }

    #[test]
    fn own_tokens_are_passable_opponent_tokens_are_not() {
        let mut board = Board::new(5);
        board.set(Coord::new(2, 2), Some(Player::Red));
        let through_own = board.shortest_path(Coord::new(0, 2), Coord::new(4, 2), Player::Red);
        assert_eq!(through_own.len(), 5);
        board.set(Coord::new(2, 2), Some(Player::Blue));
        let around = board.shortest_path(Coord::new(0, 2), Coord::new(4, 2), Player::Red);
        assert!(around.len() > 5);
        assert!(!around.contains(&Coord::new(2, 2)));
    }

    #[test]
    fn walled_off_goal_yields_empty() {
        let mut board = Board::new(5);
        let goal = Coord::new(4, 4);
        for nb in board.neighbours(goal) {
            board.set(nb, Some(Player::Blue));
        }
        let path = board.shortest_path(Coord::new(0, 0), goal, Player::Red);
        assert!(path.is_empty());
    }

    #[test]
    fn start_equals_goal() {
        let board = Board::new(5);
        let path = board.shortest_path(Coord::new(1, 1), Coord::new(1, 1), Player::Blue);
        assert_eq!(path, vec![Coord::new(1, 1)]);
    }

    #[test]
    fn path_length_matches_axial_distance_on_open_board() {
        let board = Board::new(7);
        let start = Coord::new(1, 1);
        let goal = Coord::new(5, 3);
        let path = board.shortest_path(start, goal, Player::Blue);
        assert_eq!(path.len() as u32, start.axial_distance(goal) + 1);
    }
}
