//! Depth-bounded minimax with alpha-beta pruning over the candidate
//! set, regenerating candidates at every ply. Each call frame places
//! its own move and undoes it before returning, so the board is back
//! in its pre-search state no matter where pruning cuts the tree off.

use cachex_types::{Coord, Player};

use crate::board::Board;
use crate::eval::Score;

const SEARCH_DEPTH: u8 = 4;

impl Board {
    /// Pick the best-scoring candidate for `me`; ties keep the first
    /// candidate found. `None` when the generator came back empty (or
    /// every line scored at the floor) — the caller falls back to the
    /// unstructured policy.
    pub fn best_move(&mut self, me: Player) -> (Score, Option<Coord>) {
        let mut best_score = Score::MIN;
        let mut best = None;
        for mv in self.candidate_moves(me) {
            let score = self.minimax(mv, SEARCH_DEPTH, Score::MIN, Score::MAX, true, me);
            if score > best_score {
                best_score = score;
                best = Some(mv);
            }
        }
        (best_score, best)
    }

    /// `mv` belongs to the maximizer when `maximizing` is set, to the
    /// opponent otherwise; the acting side is derived per frame rather
    /// than kept in mutable state, so recursion cannot leave a flipped
    /// identity behind. Leaves (depth 0, or no replies) are scored as
    /// if `mv` were about to be played, on the restored board.
    fn minimax(
        &mut self,
        mv: Coord,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
        me: Player,
    ) -> Score {
        let acting = if maximizing { me } else { me.opponent() };
        if depth == 0 {
            return self.evaluate(mv, acting);
        }

        let value = self.speculate(mv, acting, |board| {
            let replies = board.candidate_moves(acting.opponent());
            if replies.is_empty() {
                return None;
            }
            Some(if maximizing {
                // Opponent replies drive the line's value down
                let mut value = Score::MAX;
                for reply in replies {
                    value = value.min(board.minimax(reply, depth - 1, alpha, beta, false, me));
                    beta = beta.min(value);
                    if alpha >= beta {
                        break;
                    }
                }
                value
            } else {
                let mut value = Score::MIN;
                for reply in replies {
                    value = value.max(board.minimax(reply, depth - 1, alpha, beta, true, me));
                    alpha = alpha.max(value);
                    if alpha >= beta {
                        break;
                    }
                }
                value
            })
        });

        match value {
            Some(v) => v,
            None => self.evaluate(mv, acting),
        }
    }
}
