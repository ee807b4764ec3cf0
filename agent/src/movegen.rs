use cachex_types::{Coord, Player};
use itertools::Itertools;

use crate::board::Board;

impl Board {
    /// Candidate placements for `player`: progress, blocks, captures.
    /// A pruning layer, not a legality generator — an empty result
    /// sends the caller to the unstructured fallback policy.
    #[must_use]
    pub fn candidate_moves(&self, player: Player) -> Vec<Coord> {
        let mut moves = self.progress_moves(player);
        moves.extend(self.block_moves(player));
        moves.extend(self.capture_moves(player));
        moves.into_iter().unique().collect()
    }

    fn progress_moves(&self, player: Player) -> Vec<Coord> {
        let (chain, endpoints) = self.longest_chain(player);
        self.endpoint_border_paths(&chain, &endpoints, player)
            .iter()
            .filter_map(|path| path.iter().copied().find(|c| self.is_empty_cell(*c)))
            .collect()
    }

    // Case analysis over {0, 1, 2} endpoints: with two, the lower-axis
    // endpoint heads for the axis-0 side and the other for the far
    // side; with one, skip any side the chain already touches.
    pub(crate) fn endpoint_border_paths(
        &self,
        chain: &[Coord],
        endpoints: &[Coord],
        player: Player,
    ) -> Vec<Vec<Coord>> {
        let n = self.size();
        match endpoints {
            [] => Vec::new(),
            [single] => {
                let touches = |side: i8| chain.iter().any(|c| player.axis_value(*c) == side);
                let skip_low = touches(0);
                let skip_high = touches(n - 1);
                let borders = self
                    .borders(player)
                    .iter()
                    .copied()
                    .filter(|b| {
                        let v = player.axis_value(*b);
                        !(v == 0 && skip_low || v == n - 1 && skip_high)
                    })
                    .collect::<Vec<_>>();
                self.closest_border_path(*single, player, &borders)
                    .into_iter()
                    .collect()
            }
            [a, b, ..] => {
                let (low, high) = if player.axis_value(*a) <= player.axis_value(*b) {
                    (*a, *b)
                } else {
                    (*b, *a)
                };
                let mut paths = Vec::new();
                if let Some(path) = self.closest_border_path(low, player, &self.border_side(player, 0))
                {
                    paths.push(path);
                }
                if let Some(path) =
                    self.closest_border_path(high, player, &self.border_side(player, n - 1))
                {
                    paths.push(path);
                }
                paths
            }
        }
    }

    fn border_side(&self, player: Player, side: i8) -> Vec<Coord> {
        self.borders(player)
            .iter()
            .copied()
            .filter(|b| player.axis_value(*b) == side)
            .collect()
    }

    fn closest_border_path(
        &self,
        from: Coord,
        player: Player,
        borders: &[Coord],
    ) -> Option<Vec<Coord>> {
        let mut best: Option<Vec<Coord>> = None;
        for border in borders {
            if !self.passable(*border, player) {
                continue;
            }
            let path = self.shortest_path(from, *border, player);
            if path.is_empty() {
                continue;
            }
            if best.as_ref().map_or(true, |b| path.len() < b.len()) {
                best = Some(path);
            }
        }
        best
    }

    // Empty extension points of an opponent chain past half the board,
    // kept only in pairs at axial distance exactly 2 (the minimal
    // separation that still covers both continuations).
    pub(crate) fn block_moves(&self, player: Player) -> Vec<Coord> {
        let opp = player.opponent();
        let (opp_chain, opp_ends) = self.longest_chain(opp);
        // Wide types: the chain can hold far more cells than an i8
        if opp_chain.len() * 2 <= self.size() as usize {
            return Vec::new();
        }

        let candidates: Vec<Coord> = opp_ends
            .iter()
            .filter(|e| !self.borders(player).contains(*e))
            .flat_map(|e| self.neighbours(*e))
            .filter(|nb| self.is_empty_cell(*nb))
            .filter(|nb| {
                self.neighbours(*nb)
                    .iter()
                    .filter(|n2| self.get(**n2) == Some(opp) && opp_chain.contains(*n2))
                    .count()
                    == 1
            })
            .collect();

        candidates
            .iter()
            .copied()
            .filter(|a| candidates.iter().any(|b| a.axial_distance(*b) == 2))
            .collect()
    }

    fn capture_moves(&self, player: Player) -> Vec<Coord> {
        let opp = player.opponent();
        let mut moves = Vec::new();
        for &coord in self.occupied() {
            if self.get(coord) != Some(opp) {
                continue;
            }
            for nb in self.neighbours(coord) {
                if self.is_empty_cell(nb) && !self.check_captures(nb, player).is_empty() {
                    moves.push(nb);
                }
            }
        }
        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_toward_both_borders() {
        let mut board = Board::new(5);
        board.set(Coord::new(1, 2), Some(Player::Red));
        board.set(Coord::new(2, 2), Some(Player::Red));
        let moves = board.candidate_moves(Player::Red);
        // Low endpoint advances straight onto the near border
        assert!(moves.contains(&Coord::new(0, 2)));
        // High endpoint advances one row toward the far border
        assert!(moves.iter().any(|c| c.r == 3));
        assert!(moves.iter().all(|c| board.is_empty_cell(*c)));
    }

    #[test]
    fn single_endpoint_skips_touched_side() {
        let mut board = Board::new(5);
        // Flat chain already on Red's low border
        board.set(Coord::new(0, 1), Some(Player::Red));
        board.set(Coord::new(0, 2), Some(Player::Red));
        let moves = board.candidate_moves(Player::Red);
        assert!(!moves.is_empty());
        // Every progress move heads away from the touched side
        assert!(moves.iter().all(|c| c.r >= 1));
    }

    #[test]
    fn no_tokens_no_progress_moves() {
        let board = Board::new(5);
        assert!(board.candidate_moves(Player::Red).is_empty());
    }

    #[test]
    fn blocks_long_opponent_chain() {
        let mut board = Board::new(5);
        for q in 1..=3 {
            board.set(Coord::new(1, q), Some(Player::Blue));
        }
        let blocks = board.block_moves(Player::Red);
        // (2,0) and (0,1) flank the low endpoint at axial distance 2
        assert!(blocks.contains(&Coord::new(2, 0)));
        assert!(blocks.contains(&Coord::new(0, 1)));
        let moves = board.candidate_moves(Player::Red);
        assert!(moves.contains(&Coord::new(2, 0)));
    }

    #[test]
    fn block_scan_handles_chains_beyond_64_cells() {
        let mut board = Board::new(9);
        // 64 connected Red cells: rows 0..=6 full plus one more
        for r in 0..=6 {
            for q in 0..9 {
                board.set(Coord::new(r, q), Some(Player::Red));
            }
        }
        board.set(Coord::new(7, 0), Some(Player::Red));
        let (chain, _) = board.longest_chain(Player::Red);
        assert_eq!(chain.len(), 64);
        let blocks = board.block_moves(Player::Blue);
        assert!(blocks.iter().all(|c| board.is_empty_cell(*c)));
        let moves = board.candidate_moves(Player::Blue);
        assert!(moves.iter().all(|c| board.is_empty_cell(*c)));
    }

    #[test]
    fn short_opponent_chain_is_ignored() {
        let mut board = Board::new(5);
        board.set(Coord::new(1, 1), Some(Player::Blue));
        board.set(Coord::new(1, 2), Some(Player::Blue));
        assert!(board.block_moves(Player::Red).is_empty());
    }

    #[test]
    fn capture_placement_is_a_candidate() {
        let mut board = Board::new(5);
        board.place(Coord::new(1, 0), Player::Blue);
        board.place(Coord::new(0, 1), Player::Blue);
        board.place(Coord::new(1, 1), Player::Red);
        let moves = board.candidate_moves(Player::Red);
        assert!(moves.contains(&Coord::new(0, 0)));
    }

    #[test]
    fn candidates_are_deduplicated() {
        let mut board = Board::new(5);
        board.place(Coord::new(1, 0), Player::Blue);
        board.place(Coord::new(0, 1), Player::Blue);
        board.place(Coord::new(1, 1), Player::Red);
        let moves = board.candidate_moves(Player::Red);
        let mut sorted = moves.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), moves.len());
    }
}
