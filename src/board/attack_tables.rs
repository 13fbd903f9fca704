use once_cell::sync::Lazy;

use super::Square;

const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const KING_DELTAS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(crate) const DIAGONAL_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const STRAIGHT_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// One bit per destination square, indexed by `Square::index`.
fn step_masks(deltas: &[(isize, isize)]) -> [u64; 64] {
    let mut masks = [0u64; 64];
    for from in Square::all() {
        let mut mask = 0u64;
        for &(d_row, d_col) in deltas {
            if let Some(to) = from.offset(d_row, d_col) {
                mask |= 1u64 << to.index();
            }
        }
        masks[from.index()] = mask;
    }
    masks
}

pub(crate) static KNIGHT_TARGETS: Lazy<[u64; 64]> = Lazy::new(|| step_masks(&KNIGHT_DELTAS));

pub(crate) static KING_TARGETS: Lazy<[u64; 64]> = Lazy::new(|| step_masks(&KING_DELTAS));

#[inline]
pub(crate) fn knight_reaches(from: Square, to: Square) -> bool {
    KNIGHT_TARGETS[from.index()] & (1u64 << to.index()) != 0
}

#[inline]
pub(crate) fn king_reaches(from: Square, to: Square) -> bool {
    KING_TARGETS[from.index()] & (1u64 << to.index()) != 0
}

/// Destinations in a step mask, lowest index first.
pub(crate) fn targets(mask: u64) -> impl Iterator<Item = Square> {
    let mut bits = mask;
    std::iter::from_fn(move || {
        if bits == 0 {
            return None;
        }
        let idx = bits.trailing_zeros() as usize;
        bits &= bits - 1;
        Some(Square::from_index(idx))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_knight_mask_counts() {
        assert_eq!(KNIGHT_TARGETS[sq("a1").index()].count_ones(), 2);
        assert_eq!(KNIGHT_TARGETS[sq("b1").index()].count_ones(), 3);
        assert_eq!(KNIGHT_TARGETS[sq("d4").index()].count_ones(), 8);
    }

    #[test]
    fn test_king_mask_counts() {
        assert_eq!(KING_TARGETS[sq("h8").index()].count_ones(), 3);
        assert_eq!(KING_TARGETS[sq("e1").index()].count_ones(), 5);
        assert_eq!(KING_TARGETS[sq("e4").index()].count_ones(), 8);
    }

    #[test]
    fn test_reaches_matches_geometry() {
        assert!(knight_reaches(sq("g1"), sq("f3")));
        assert!(!knight_reaches(sq("g1"), sq("g3")));
        assert!(king_reaches(sq("e1"), sq("f2")));
        assert!(!king_reaches(sq("e1"), sq("g1")));
    }

    #[test]
    fn test_targets_iterates_mask() {
        let found: Vec<String> = targets(KNIGHT_TARGETS[sq("a1").index()])
            .map(|s| s.to_string())
            .collect();
        assert_eq!(found, vec!["b3".to_string(), "c2".to_string()]);
    }
}
