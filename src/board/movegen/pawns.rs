use super::super::error::MoveRejection;
use super::super::{Board, Color, Square};
use super::displacement;

impl Board {
    pub(crate) fn check_pawn_move(
        &self,
        from: Square,
        to: Square,
        color: Color,
    ) -> Result<(), MoveRejection> {
        let dir = color.pawn_direction();
        let (d_row, d_col) = displacement(from, to);

        if d_col == 0 {
            if d_row == dir {
                return if self.is_empty(to) {
                    Ok(())
                } else {
                    Err(MoveRejection::PathBlocked { from, to })
                };
            }
            if d_row == 2 * dir && from.row() == color.pawn_start_row() {
                let clear = from
                    .offset(dir, 0)
                    .is_some_and(|mid| self.is_empty(mid))
                    && self.is_empty(to);
                return if clear {
                    Ok(())
                } else {
                    Err(MoveRejection::PathBlocked { from, to })
                };
            }
            return Err(MoveRejection::IllegalGeometry { from, to });
        }

        if d_col.abs() == 1 && d_row == dir {
            let captures_enemy = self.color_on(to) == Some(color.opponent());
            let en_passant = self.is_empty(to) && self.en_passant_target == Some(to);
            if captures_enemy || en_passant {
                return Ok(());
            }
        }

        Err(MoveRejection::IllegalGeometry { from, to })
    }

    pub(crate) fn pawn_candidates(&self, from: Square, color: Color) -> Vec<Square> {
        let dir = color.pawn_direction();
        [(dir, 0), (2 * dir, 0), (dir, -1), (dir, 1)]
            .into_iter()
            .filter_map(|(d_row, d_col)| from.offset(d_row, d_col))
            .collect()
    }
}
