use super::super::attack_tables::{knight_reaches, targets, KNIGHT_TARGETS};
use super::super::error::MoveRejection;
use super::super::{Board, Square};

impl Board {
    pub(crate) fn check_knight_move(&self, from: Square, to: Square) -> Result<(), MoveRejection> {
        if knight_reaches(from, to) {
            Ok(())
        } else {
            Err(MoveRejection::IllegalGeometry { from, to })
        }
    }

    pub(crate) fn knight_candidates(&self, from: Square) -> Vec<Square> {
        targets(KNIGHT_TARGETS[from.index()]).collect()
    }
}
