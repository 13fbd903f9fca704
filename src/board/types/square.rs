//! Square types and coordinate conversion.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the board, stored as (row, col).
///
/// Row 0 is rank 8 and row 7 is rank 1, so the grid reads top-down the way a
/// board is drawn from White's side. Column 0 is file a. Serialized as
/// algebraic text, so decoding rejects anything off the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Create a square with bounds checking.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Caller guarantees `row` and `col` are both below 8.
    #[inline]
    pub(crate) const fn at(row: usize, col: usize) -> Self {
        debug_assert!(row < 8 && col < 8);
        Square {
            row: row as u8,
            col: col as u8,
        }
    }

    /// Row index (0 = rank 8).
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    /// Column index (0 = file a).
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Rank number as printed on the board (1-8).
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        8 - self.row as usize
    }

    /// File letter (`'a'..='h'`).
    #[inline]
    #[must_use]
    pub const fn file(self) -> char {
        (b'a' + self.col) as char
    }

    /// Row-major index (a8 = 0, h8 = 7, ..., h1 = 63).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    #[inline]
    pub(crate) const fn from_index(idx: usize) -> Self {
        Square::at(idx / 8, idx % 8)
    }

    /// Step by a (row, col) delta, returning `None` when leaving the board.
    #[inline]
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        let row = self.row as isize + d_row;
        let col = self.col as isize + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square::at(row as usize, col as usize))
        } else {
            None
        }
    }

    /// All 64 squares, row-major from a8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        if row >= 8 {
            return Err(SquareError::RowOutOfBounds { row });
        }
        if col >= 8 {
            return Err(SquareError::ColOutOfBounds { col });
        }
        Ok(Square::at(row, col))
    }
}

impl TryFrom<String> for Square {
    type Error = SquareError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Square> for String {
    fn from(sq: Square) -> Self {
        sq.to_string()
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };

        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let col = match bytes[0].to_ascii_lowercase() {
            c @ b'a'..=b'h' => (c - b'a') as usize,
            _ => return Err(invalid()),
        };

        let rank = match bytes[1] {
            r @ b'1'..=b'8' => (r - b'0') as usize,
            _ => return Err(invalid()),
        };

        Ok(Square::at(7 - (rank - 1), col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_maps_rank_to_flipped_row() {
        let sq: Square = "e4".parse().unwrap();
        assert_eq!((sq.row(), sq.col()), (4, 4));

        let a8: Square = "a8".parse().unwrap();
        assert_eq!((a8.row(), a8.col()), (0, 0));

        let h1: Square = "h1".parse().unwrap();
        assert_eq!((h1.row(), h1.col()), (7, 7));
    }

    #[test]
    fn test_parse_file_is_case_insensitive() {
        assert_eq!("E2".parse::<Square>(), "e2".parse::<Square>());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "e", "e22", "i1", "a0", "a9", "44", "ee", "é1"] {
            assert!(
                matches!(
                    bad.parse::<Square>(),
                    Err(SquareError::InvalidNotation { .. })
                ),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_display_round_trips_every_square() {
        for sq in Square::all() {
            let text = sq.to_string();
            assert_eq!(text.parse::<Square>().unwrap(), sq);
        }
        assert_eq!(Square::all().count(), 64);
    }

    #[test]
    fn test_try_from_bounds() {
        assert_eq!(Square::try_from((8, 0)), Err(SquareError::RowOutOfBounds { row: 8 }));
        assert_eq!(Square::try_from((0, 9)), Err(SquareError::ColOutOfBounds { col: 9 }));
        assert_eq!(Square::try_from((6, 4)).unwrap().to_string(), "e2");
    }

    #[test]
    fn test_string_conversions() {
        assert_eq!(Square::try_from("g7".to_string()).unwrap(), "g7".parse().unwrap());
        assert!(Square::try_from("z9".to_string()).is_err());
        let text: String = Square::at(0, 0).into();
        assert_eq!(text, "a8");
    }

    #[test]
    fn test_offset_stays_on_board() {
        let a1: Square = "a1".parse().unwrap();
        assert_eq!(a1.offset(1, 0), None);
        assert_eq!(a1.offset(0, -1), None);
        assert_eq!(a1.offset(-1, 1).unwrap().to_string(), "b2");
    }
}
