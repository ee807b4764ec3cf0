use enum_map::Enum;
use serde::{Deserialize, Serialize};

use crate::Coord;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Enum, Serialize, Deserialize)]
pub enum Player {
    Red,
    Blue,
}

pub const ALL_PLAYERS: [Player; 2] = [Player::Red, Player::Blue];

impl Player {
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::Red => Player::Blue,
            Player::Blue => Player::Red,
        }
    }

    /// Position of `coord` along this player's winning axis: `r` for
    /// Red, `q` for Blue.
    #[must_use]
    pub const fn axis_value(self, coord: Coord) -> i8 {
        match self {
            Player::Red => coord.r,
            Player::Blue => coord.q,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_involution() {
        for p in ALL_PLAYERS {
            assert_ne!(p, p.opponent());
            assert_eq!(p, p.opponent().opponent());
        }
    }

    #[test]
    fn axis_value() {
        let c = Coord::new(3, 7);
        assert_eq!(Player::Red.axis_value(c), 3);
        assert_eq!(Player::Blue.axis_value(c), 7);
    }
}
