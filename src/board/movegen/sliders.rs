use super::super::attack_tables::{DIAGONAL_DIRECTIONS, STRAIGHT_DIRECTIONS};
use super::super::error::MoveRejection;
use super::super::{Board, Piece, Square};
use super::displacement;

impl Board {
    pub(crate) fn check_sliding_move(
        &self,
        from: Square,
        to: Square,
        piece: Piece,
    ) -> Result<(), MoveRejection> {
        let (d_row, d_col) = displacement(from, to);
        let straight = d_row == 0 || d_col == 0;
        let diagonal = d_row.abs() == d_col.abs();

        let along_line =
            (straight && piece.slides_straight()) || (diagonal && piece.slides_diagonally());
        if !along_line || (d_row == 0 && d_col == 0) {
            return Err(MoveRejection::IllegalGeometry { from, to });
        }

        if self.path_is_clear(from, to) {
            Ok(())
        } else {
            Err(MoveRejection::PathBlocked { from, to })
        }
    }

    /// True when every square strictly between `from` and `to` is empty.
    /// The two squares must share a row, column or diagonal.
    pub(crate) fn path_is_clear(&self, from: Square, to: Square) -> bool {
        let (d_row, d_col) = displacement(from, to);
        let (step_row, step_col) = (d_row.signum(), d_col.signum());

        let mut current = from.offset(step_row, step_col);
        while let Some(sq) = current {
            if sq == to {
                return true;
            }
            if !self.is_empty(sq) {
                return false;
            }
            current = sq.offset(step_row, step_col);
        }
        false
    }

    /// Squares along each ray up to and including the first occupied one.
    pub(crate) fn sliding_candidates(&self, from: Square, piece: Piece) -> Vec<Square> {
        let mut directions = Vec::with_capacity(8);
        if piece.slides_straight() {
            directions.extend_from_slice(&STRAIGHT_DIRECTIONS);
        }
        if piece.slides_diagonally() {
            directions.extend_from_slice(&DIAGONAL_DIRECTIONS);
        }

        let mut squares = Vec::new();
        for (d_row, d_col) in directions {
            let mut current = from.offset(d_row, d_col);
            while let Some(sq) = current {
                squares.push(sq);
                if !self.is_empty(sq) {
                    break;
                }
                current = sq.offset(d_row, d_col);
            }
        }
        squares
    }
}
