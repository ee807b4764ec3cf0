use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash, Serialize, Deserialize,
)]
pub struct Coord {
    pub r: i8,
    pub q: i8,
}

// Neighbour offsets, clockwise. Adjacency and capture lookups share
// this table, so the ordering is fixed.
pub const HEX_STEPS: [Coord; 6] = [
    Coord::new(1, -1),
    Coord::new(1, 0),
    Coord::new(0, 1),
    Coord::new(-1, 1),
    Coord::new(-1, 0),
    Coord::new(0, -1),
];

impl Coord {
    pub const ZERO: Self = Self::new(0, 0);

    #[must_use]
    #[inline(always)]
    pub const fn new(r: i8, q: i8) -> Self {
        Self { r, q }
    }

    #[must_use]
    #[inline(always)]
    pub const fn add(self, other: Self) -> Self {
        Self::new(self.r + other.r, self.q + other.q)
    }

    #[must_use]
    #[inline(always)]
    pub const fn transpose(self) -> Self {
        Self::new(self.q, self.r)
    }

    /// Hex-grid distance; admissible as a pathfinding heuristic.
    #[must_use]
    pub const fn axial_distance(self, other: Self) -> u32 {
        let (ar, aq) = (self.r as i32, self.q as i32);
        let (br, bq) = (other.r as i32, other.q as i32);
        let dq = (aq - bq).unsigned_abs();
        let dqr = (aq + ar - bq - br).unsigned_abs();
        let dr = (ar - br).unsigned_abs();
        (dq + dqr + dr) / 2
    }
}
