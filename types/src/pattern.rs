use crate::coord::{Coord, HEX_STEPS};

/// Offset triples `[outer, mid1, mid2]` for every diamond around a
/// placement: the placed cell and `outer` flank the two mid cells.
pub const CAPTURE_PATTERNS: [[Coord; 3]; 12] = capture_patterns();

const fn capture_patterns() -> [[Coord; 3]; 12] {
    let mut out = [[Coord::ZERO; 3]; 12];
    let mut i = 0;
    while i < 6 {
        let n1 = HEX_STEPS[i];
        let n2 = HEX_STEPS[(i + 1) % 6];
        out[i] = [n1.add(n2), n1, n2];
        let n2 = HEX_STEPS[(i + 2) % 6];
        out[i + 6] = [n1.add(n2), n1, n2];
        i += 1;
    }
    out
}
