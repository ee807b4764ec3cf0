use std::fmt;

use cachex_types::{Coord, Player, CAPTURE_PATTERNS, HEX_STEPS};
use enum_map::EnumMap;
use smallvec::SmallVec;

/// The n×n game board plus the bookkeeping the move generator needs:
/// the ordered record of every placement and the per-player border
/// cells. One instance is shared between real play and speculative
/// search; the search must restore every mutation it makes.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    n: i8,
    cells: Vec<Option<Player>>,
    occupied: Vec<Coord>,
    borders: EnumMap<Player, Vec<Coord>>,
    opening: Option<Coord>,
}

impl Board {
    #[must_use]
    pub fn new(n: i8) -> Self {
        assert!(n >= 2, "board size must be at least 2");
        // Keeps coord components plus capture-pattern offsets (±2)
        // representable in i8
        assert!(n <= 125, "board size must be at most 125");
        let all: Vec<Coord> = (0..n)
            .flat_map(|r| (0..n).map(move |q| Coord::new(r, q)))
            .collect();
        let borders = EnumMap::from_fn(|p: Player| {
            all.iter()
                .copied()
                .filter(|c| p.axis_value(*c) == 0 || p.axis_value(*c) == n - 1)
                .collect()
        });
        Self {
            n,
            cells: vec![None; n as usize * n as usize],
            occupied: Vec::new(),
            borders,
            opening: None,
        }
    }

    #[must_use]
    pub const fn size(&self) -> i8 {
        self.n
    }

    /// All cells in row-major external order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let n = self.n;
        (0..n).flat_map(move |r| (0..n).map(move |q| Coord::new(r, q)))
    }

    #[must_use]
    pub const fn in_bounds(&self, coord: Coord) -> bool {
        coord.r >= 0 && coord.r < self.n && coord.q >= 0 && coord.q < self.n
    }

    /// Storage row is mirrored relative to the external row coordinate;
    /// the two players' winning axes are reflected in storage layout.
    /// Every cell access goes through here.
    fn index(&self, coord: Coord) -> usize {
        assert!(
            self.in_bounds(coord),
            "coordinate {coord:?} outside {0}x{0} board",
            self.n
        );
        let axial_r = (self.n - 1 - coord.r) as usize;
        axial_r * self.n as usize + coord.q as usize
    }

    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<Player> {
        self.cells[self.index(coord)]
    }

    /// Raw write with no legality validation; callers (and the external
    /// referee) are responsible for only writing legal placements.
    pub fn set(&mut self, coord: Coord, token: Option<Player>) {
        let idx = self.index(coord);
        self.cells[idx] = token;
    }

    #[must_use]
    pub fn is_empty_cell(&self, coord: Coord) -> bool {
        self.get(coord).is_none()
    }

    /// True iff `player` may traverse `coord`: empty or their own token.
    #[must_use]
    pub fn passable(&self, coord: Coord, player: Player) -> bool {
        match self.get(coord) {
            None => true,
            Some(owner) => owner == player,
        }
    }

    /// In-bounds neighbours in fixed clockwise order.
    #[must_use]
    pub fn neighbours(&self, coord: Coord) -> SmallVec<[Coord; 6]> {
        HEX_STEPS
            .iter()
            .map(|step| coord.add(*step))
            .filter(|c| self.in_bounds(*c))
            .collect()
    }

    /// Ordered record of every placement so far. Captured cells are not
    /// removed; only the steal rule ever rewrites an entry.
    #[must_use]
    pub fn occupied(&self) -> &[Coord] {
        &self.occupied
    }

    #[must_use]
    pub const fn opening(&self) -> Option<Coord> {
        self.opening
    }

    /// Border cells for `player`'s winning axis (axis value 0 or n-1).
    #[must_use]
    pub fn borders(&self, player: Player) -> &[Coord] {
        &self.borders[player]
    }

    /// Apply a confirmed placement: token, captures, occupied record.
    pub fn place(&mut self, coord: Coord, player: Player) {
        if self.occupied.is_empty() {
            self.opening = Some(coord);
        }
        self.set(coord, Some(player));
        self.apply_captures(coord);
        self.occupied.push(coord);
    }

    /// Diamond triples around `coord` whose cells read
    /// `[owner, opponent, opponent]`. Evaluated entirely against the
    /// current board state so overlapping diamonds cannot interfere.
    fn diamond_captures(&self, coord: Coord, owner: Player) -> SmallVec<[Coord; 4]> {
        let mid = Some(owner.opponent());
        let mut captured: SmallVec<[Coord; 4]> = SmallVec::new();
        for [outer, mid1, mid2] in CAPTURE_PATTERNS {
            let triple = [coord.add(outer), coord.add(mid1), coord.add(mid2)];
            if !triple.iter().all(|c| self.in_bounds(*c)) {
                continue;
            }
            if self.get(triple[0]) == Some(owner)
                && self.get(triple[1]) == mid
                && self.get(triple[2]) == mid
            {
                for cell in [triple[1], triple[2]] {
                    if !captured.contains(&cell) {
                        captured.push(cell);
                    }
                }
            }
        }
        captured
    }

    /// Resolve captures triggered by the token just placed at `coord`.
    /// All patterns are matched first, then the union is cleared, so a
    /// cell shared by two diamonds is captured exactly once.
    pub fn apply_captures(&mut self, coord: Coord) {
        let Some(owner) = self.get(coord) else {
            // Nothing placed here; degenerate, no captures.
            return;
        };
        let captured = self.diamond_captures(coord, owner);
        for cell in captured {
            self.set(cell, None);
        }
    }

    /// Captures a hypothetical placement at `coord` by `by` would make.
    /// Same pattern walk as [`Self::apply_captures`], without mutating.
    #[must_use]
    pub fn check_captures(&self, coord: Coord, by: Player) -> SmallVec<[Coord; 4]> {
        self.diamond_captures(coord, by)
    }

    /// Pie rule: the opening token is removed and the second mover gets
    /// the diagonally mirrored cell instead. The occupied record keeps
    /// its length; only the opening entry is rewritten.
    pub fn steal(&mut self) {
        let Some(opening) = self.opening else {
            return;
        };
        let mirrored = opening.transpose();
        self.set(opening, None);
        self.set(mirrored, Some(Player::Blue));
        if let Some(entry) = self.occupied.iter_mut().find(|c| **c == opening) {
            *entry = mirrored;
        }
        self.opening = Some(mirrored);
    }

    /// Run `f` with a token temporarily at `coord`. The placement is
    /// always undone before returning; every speculative mutation in
    /// the search goes through here so none can leak into real turns.
    pub fn speculate<T>(&mut self, coord: Coord, side: Player, f: impl FnOnce(&mut Self) -> T) -> T {
        self.set(coord, Some(side));
        let out = f(self);
        self.set(coord, None);
        out
    }

    #[cfg(test)]
    pub(crate) fn raw(&self, row: usize, col: usize) -> Option<Player> {
        self.cells[row * self.n as usize + col]
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in (0..self.n).rev() {
            write!(f, "{:indent$}", "", indent = r as usize)?;
            for q in 0..self.n {
                let glyph = match self.get(Coord::new(r, q)) {
                    None => '.',
                    Some(Player::Red) => 'R',
                    Some(Player::Blue) => 'B',
                };
                write!(f, "{glyph} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
