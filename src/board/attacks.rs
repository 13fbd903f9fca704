//! Attack detection.
//!
//! Same geometry as the move checker, except that pawns attack only their
//! two forward diagonals whatever stands there, and castling never attacks.

use super::attack_tables::{king_reaches, knight_reaches};
use super::movegen::displacement;
use super::{Board, Color, Piece, Square};

impl Board {
    /// Whether `piece` of `color` standing on `from` could capture on `target`.
    #[must_use]
    pub fn attacks(&self, from: Square, color: Color, piece: Piece, target: Square) -> bool {
        if from == target {
            return false;
        }
        match piece {
            Piece::Pawn => {
                let (d_row, d_col) = displacement(from, target);
                d_row == color.pawn_direction() && d_col.abs() == 1
            }
            Piece::Knight => knight_reaches(from, target),
            Piece::King => king_reaches(from, target),
            Piece::Bishop | Piece::Rook | Piece::Queen => {
                self.check_sliding_move(from, target, piece).is_ok()
            }
        }
    }

    /// Whether any piece of `by` attacks `square`.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        self.squares_of(by)
            .any(|(from, piece)| self.attacks(from, by, piece, square))
    }

    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.squares_of(color)
            .find(|&(_, piece)| piece == Piece::King)
            .map(|(sq, _)| sq)
    }

    /// A missing king is never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.find_king(color)
            .is_some_and(|king| self.is_square_attacked(king, color.opponent()))
    }
}
