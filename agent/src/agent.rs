//! The referee-facing player: owns the board for one game, applies
//! confirmed actions from either side, and picks an action when asked.
//! The referee validates legality independently; the checks here only
//! guard against input that would corrupt the board model.

use cachex_types::{Action, Coord, Player};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::board::Board;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("coordinate {0:?} is outside the board")]
    InvalidCoordinate(Coord),
    #[error("steal received before any opening placement")]
    StealWithoutOpening,
}

pub struct Agent {
    me: Player,
    board: Board,
    turn_count: u32,
    winner: Option<Player>,
    rng: StdRng,
}

impl Agent {
    /// One instance per game.
    #[must_use]
    pub fn new(me: Player, n: i8) -> Self {
        Self::with_seed(me, n, rand::thread_rng().gen())
    }

    /// Deterministic fallback randomness, for drivers and tests.
    #[must_use]
    pub fn with_seed(me: Player, n: i8, seed: u64) -> Self {
        Self {
            me,
            board: Board::new(n),
            turn_count: 0,
            winner: None,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub const fn me(&self) -> Player {
        self.me
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Choose an action for our turn. Opening book first: a corner on
    /// the game's first placement, the steal in reply to the opponent's
    /// opening. After that the adversarial search decides, with the
    /// unstructured fallback covering an empty candidate set or a
    /// search result the board no longer agrees with.
    pub fn action(&mut self) -> Action {
        if self.turn_count == 0 {
            return Action::Place(self.fallback_move());
        }
        if self.turn_count == 1 {
            return Action::Steal;
        }

        let has_own = self
            .board
            .coords()
            .any(|c| self.board.get(c) == Some(self.me));
        if !has_own {
            return Action::Place(self.fallback_move());
        }

        let (_, mv) = self.board.best_move(self.me);
        match mv {
            Some(coord) if self.board.is_empty_cell(coord) => Action::Place(coord),
            _ => Action::Place(self.fallback_move()),
        }
    }

    /// Corner preference, then a uniformly random empty cell. The exact
    /// center is barred on the game's very first placement when the
    /// board size is odd.
    fn fallback_move(&mut self) -> Coord {
        let n = self.board.size();
        let corners = [
            Coord::new(0, 0),
            Coord::new(0, n - 1),
            Coord::new(n - 1, 0),
            Coord::new(n - 1, n - 1),
        ];
        for corner in corners {
            if self.board.is_empty_cell(corner) {
                return corner;
            }
        }
        let center_barred = n % 2 == 1 && self.turn_count == 0;
        let center = Coord::new((n - 1) / 2, (n - 1) / 2);
        loop {
            let coord = Coord::new(self.rng.gen_range(0..n), self.rng.gen_range(0..n));
            if !self.board.is_empty_cell(coord) {
                continue;
            }
            if center_barred && coord == center {
                continue;
            }
            return coord;
        }
    }

    /// A confirmed action from either side, already validated by the
    /// referee. Applies it to the board model and tracks a win once
    /// enough turns have passed for a spanning chain to exist.
    pub fn turn(&mut self, player: Player, action: &Action) -> Result<(), ProtocolError> {
        match action {
            Action::Place(coord) => {
                if !self.board.in_bounds(*coord) {
                    return Err(ProtocolError::InvalidCoordinate(*coord));
                }
                self.board.place(*coord, player);
                let span_possible = self.turn_count + 1 >= self.board.size() as u32 * 2 - 1;
                if self.winner.is_none()
                    && span_possible
                    && self.board.win_detected(*coord, player)
                {
                    self.winner = Some(player);
                }
            }
            Action::Steal => {
                if self.board.opening().is_none() {
                    return Err(ProtocolError::StealWithoutOpening);
                }
                self.board.steal();
            }
        }
        self.turn_count += 1;
        Ok(())
    }
}
