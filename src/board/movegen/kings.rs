use super::super::attack_tables::{king_reaches, targets, KING_TARGETS};
use super::super::error::MoveRejection;
use super::super::{Board, CastleSide, Color, Piece, Square};

/// Column the king starts on.
pub(crate) const KING_HOME_COL: usize = 4;

impl Board {
    pub(crate) fn check_king_move(
        &self,
        from: Square,
        to: Square,
        color: Color,
    ) -> Result<(), MoveRejection> {
        if king_reaches(from, to) {
            return Ok(());
        }
        match castle_side(from, to, color) {
            Some(side) => self.check_castling(color, side),
            None => Err(MoveRejection::IllegalGeometry { from, to }),
        }
    }

    /// Right still held, friendly rook on its corner, nothing in between.
    fn check_castling(&self, color: Color, side: CastleSide) -> Result<(), MoveRejection> {
        let row = color.back_row();
        let unavailable = MoveRejection::CastlingUnavailable { color, side };

        if !self.has_castling_right(color, side) {
            return Err(unavailable);
        }
        let rook_home = Square::at(row, side.rook_home_col());
        if self.piece_at(rook_home) != Some((color, Piece::Rook)) {
            return Err(unavailable);
        }
        if !self.path_is_clear(Square::at(row, KING_HOME_COL), rook_home) {
            return Err(unavailable);
        }
        Ok(())
    }

    pub(crate) fn king_candidates(&self, from: Square, color: Color) -> Vec<Square> {
        let mut squares: Vec<Square> = targets(KING_TARGETS[from.index()]).collect();
        if from == Square::at(color.back_row(), KING_HOME_COL) {
            for side in [CastleSide::Kingside, CastleSide::Queenside] {
                squares.push(Square::at(color.back_row(), side.king_target_col()));
            }
        }
        squares
    }
}

/// The castling wing when `from -> to` is a two-column king move from its
/// home square along the back row.
pub(crate) fn castle_side(from: Square, to: Square, color: Color) -> Option<CastleSide> {
    let row = color.back_row();
    if from != Square::at(row, KING_HOME_COL) || to.row() != row {
        return None;
    }
    match to.col() {
        6 => Some(CastleSide::Kingside),
        2 => Some(CastleSide::Queenside),
        _ => None,
    }
}
