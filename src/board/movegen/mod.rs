//! Pseudo-legal move checking.
//!
//! Answers whether a piece may travel from one square to another under its
//! movement rules, without regard to the safety of its own king.

mod kings;
mod knights;
mod pawns;
mod sliders;

pub(crate) use kings::{castle_side, KING_HOME_COL};

use super::error::MoveRejection;
use super::{Board, Color, Piece, Square};

impl Board {
    /// Checks shared by every piece type: an own piece on `from`, the right
    /// side to move, a real displacement and no friendly capture.
    pub(crate) fn precheck(&self, from: Square, to: Square) -> Result<(Color, Piece), MoveRejection> {
        let (color, piece) = self
            .piece_at(from)
            .ok_or(MoveRejection::EmptySquare { square: from })?;
        if color != self.side_to_move {
            return Err(MoveRejection::WrongTurn {
                expected: self.side_to_move,
            });
        }
        if from == to {
            return Err(MoveRejection::SameSquare { square: from });
        }
        if self.color_on(to) == Some(color) {
            return Err(MoveRejection::FriendlyFire { square: to });
        }
        Ok((color, piece))
    }

    /// Full pseudo-legality check for the side to move.
    pub(crate) fn is_pseudo_legal(&self, from: Square, to: Square) -> Result<(), MoveRejection> {
        let (color, piece) = self.precheck(from, to)?;
        self.check_geometry(from, to, color, piece)
    }

    /// Per-type movement rules. Assumes `to` is not `from` and holds no
    /// piece of `color`.
    pub(crate) fn check_geometry(
        &self,
        from: Square,
        to: Square,
        color: Color,
        piece: Piece,
    ) -> Result<(), MoveRejection> {
        match piece {
            Piece::Pawn => self.check_pawn_move(from, to, color),
            Piece::Knight => self.check_knight_move(from, to),
            Piece::Bishop | Piece::Rook | Piece::Queen => self.check_sliding_move(from, to, piece),
            Piece::King => self.check_king_move(from, to, color),
        }
    }

    /// Pseudo-legal destinations of the piece on `from`, ignoring whose turn
    /// it is.
    pub(crate) fn pseudo_legal_targets(&self, from: Square) -> Vec<Square> {
        let Some((color, piece)) = self.piece_at(from) else {
            return Vec::new();
        };
        let candidates = match piece {
            Piece::Pawn => self.pawn_candidates(from, color),
            Piece::Knight => self.knight_candidates(from),
            Piece::Bishop | Piece::Rook | Piece::Queen => self.sliding_candidates(from, piece),
            Piece::King => self.king_candidates(from, color),
        };
        candidates
            .into_iter()
            .filter(|&to| self.color_on(to) != Some(color))
            .filter(|&to| self.check_geometry(from, to, color, piece).is_ok())
            .collect()
    }
}

/// Signed (row, col) displacement from `from` to `to`.
#[inline]
pub(crate) fn displacement(from: Square, to: Square) -> (isize, isize) {
    (
        to.row() as isize - from.row() as isize,
        to.col() as isize - from.col() as isize,
    )
}
