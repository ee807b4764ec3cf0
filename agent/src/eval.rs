//! Move scoring. Three regimes, kept deliberately asymmetric to match
//! long-standing behaviour: a raw `Progress` value is the summed
//! endpoint-to-border path length (smaller means the connection is
//! closer to done), yet the adversarial search maximizes; the `Block`
//! and `Capture` overrides outrank every raw value, so the search ends
//! up preferring captures, then blocks, then whatever `Progress` value
//! compares highest. Do not collapse this into a single "bigger is
//! better" scale.

use cachex_types::{Coord, Player};

use crate::board::Board;

/// Tagged score regime. Derived `Ord` gives `Progress(_) < Block <
/// Capture`, with `Progress` values comparing numerically as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Score {
    Progress(i64),
    Block,
    Capture,
}

impl Score {
    pub const MIN: Self = Score::Progress(i64::MIN);
    pub const MAX: Self = Score::Capture;
}

impl Board {
    /// Score a hypothetical placement at `coord` by `side`. The token
    /// is placed only for the duration of the path measurement; the
    /// override checks run against the restored board.
    pub fn evaluate(&mut self, coord: Coord, side: Player) -> Score {
        let value = self.speculate(coord, side, |board| {
            let (chain, endpoints) = board.longest_chain(side);
            board
                .endpoint_border_paths(&chain, &endpoints, side)
                .iter()
                .map(|path| path.len() as i64 - 1)
                .sum::<i64>()
        });

        if !self.check_captures(coord, side).is_empty() {
            return Score::Capture;
        }
        if self.block_moves(side).contains(&coord) {
            return Score::Block;
        }
        Score::Progress(value)
    }
}
