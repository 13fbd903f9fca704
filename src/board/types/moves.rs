//! Move request and move record types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::CastleSide;
use super::piece::{Color, Piece};
use super::square::Square;

/// A requested move: origin, destination and an optional promotion choice.
///
/// The promotion piece is only consulted when a pawn reaches its final row;
/// `None` means queen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Piece>,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_promotion(from: Square, to: Square, piece: Piece) -> Self {
        Move {
            from,
            to,
            promotion: Some(piece),
        }
    }

    /// Piece a promoting pawn turns into.
    #[inline]
    #[must_use]
    pub(crate) fn promotion_piece(self) -> Piece {
        match self.promotion {
            Some(piece) if piece.is_promotion_target() => piece,
            _ => Piece::Queen,
        }
    }
}

/// What the applier actually did with a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    Quiet,
    Capture,
    DoublePawnPush,
    EnPassant,
    Castle(CastleSide),
    Promotion(Piece),
}

/// A move as applied to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub color: Color,
    pub piece: Piece,
    /// Piece removed from the board, including an en-passant victim.
    pub captured: Option<Piece>,
    pub kind: MoveKind,
}

impl MoveRecord {
    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// Long coordinate form (`e2e4`, `e7e8q`), as external engines expect it.
impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let MoveKind::Promotion(piece) = self.kind {
            write!(f, "{}", piece.to_char())?;
        }
        Ok(())
    }
}
