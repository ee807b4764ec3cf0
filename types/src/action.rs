use serde::{Deserialize, Serialize};

use crate::Coord;

/// An action as exchanged with the referee. `Steal` is only legal as
/// the reply to the opening placement.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Place(Coord),
    Steal,
}

impl Action {
    #[must_use]
    pub const fn place(r: i8, q: i8) -> Self {
        Self::Place(Coord::new(r, q))
    }
}
