//! Move application.
//!
//! Relocates the moving piece and performs the extra edits special moves
//! need: the castling rook hop, the en-passant capture, promotion, the
//! en-passant target and castling-rights bookkeeping. The same code runs for
//! the live board and for king-safety simulation on clones.

use super::movegen::castle_side;
use super::{Board, CastleSide, Color, Move, MoveKind, MoveRecord, Piece, Square};

impl Board {
    /// Apply `mv` without any legality checks and return what happened.
    ///
    /// Returns `None` and leaves the board unchanged when `mv.from` is empty.
    /// Does not flip the turn; see `finish_turn`.
    pub(crate) fn apply_move(&mut self, mv: Move) -> Option<MoveRecord> {
        let (color, piece) = self.take_piece(mv.from)?;
        let previous_en_passant = self.en_passant_target.take();
        let mut captured = self.take_piece(mv.to).map(|(_, p)| p);

        let kind = match piece {
            Piece::Pawn => self.apply_pawn_move(mv, color, previous_en_passant, &mut captured),
            Piece::King => self.apply_king_move(mv, color),
            Piece::Rook => {
                if mv.from.row() == color.back_row() {
                    if let Some(side) = CastleSide::from_rook_col(mv.from.col()) {
                        self.castling_rights.remove(color, side);
                    }
                }
                self.set_piece(mv.to, color, piece);
                MoveKind::Quiet
            }
            Piece::Knight | Piece::Bishop | Piece::Queen => {
                self.set_piece(mv.to, color, piece);
                MoveKind::Quiet
            }
        };

        if captured == Some(Piece::Rook) {
            self.revoke_for_captured_rook(mv.to, color.opponent());
        }

        let kind = match kind {
            MoveKind::Quiet if captured.is_some() => MoveKind::Capture,
            other => other,
        };

        Some(MoveRecord {
            from: mv.from,
            to: mv.to,
            color,
            piece,
            captured,
            kind,
        })
    }

    fn apply_pawn_move(
        &mut self,
        mv: Move,
        color: Color,
        previous_en_passant: Option<Square>,
        captured: &mut Option<Piece>,
    ) -> MoveKind {
        let diagonal = mv.from.col() != mv.to.col();
        let mut kind = MoveKind::Quiet;

        if diagonal && captured.is_none() && previous_en_passant == Some(mv.to) {
            // The victim sits beside the origin, on the destination's file.
            let victim = Square::at(mv.from.row(), mv.to.col());
            if self.piece_at(victim) == Some((color.opponent(), Piece::Pawn)) {
                self.take_piece(victim);
                *captured = Some(Piece::Pawn);
            }
            kind = MoveKind::EnPassant;
        }

        if mv.to.row() == color.promotion_row() {
            let promoted = mv.promotion_piece();
            self.set_piece(mv.to, color, promoted);
            return MoveKind::Promotion(promoted);
        }

        self.set_piece(mv.to, color, Piece::Pawn);

        if mv.from.row().abs_diff(mv.to.row()) == 2 {
            let mid_row = (mv.from.row() + mv.to.row()) / 2;
            self.en_passant_target = Some(Square::at(mid_row, mv.from.col()));
            kind = MoveKind::DoublePawnPush;
        }
        kind
    }

    fn apply_king_move(&mut self, mv: Move, color: Color) -> MoveKind {
        self.castling_rights.remove_color(color);
        self.set_piece(mv.to, color, Piece::King);

        let Some(side) = castle_side(mv.from, mv.to, color) else {
            return MoveKind::Quiet;
        };
        let row = color.back_row();
        let rook_from = Square::at(row, side.rook_home_col());
        let rook_to = Square::at(row, side.rook_target_col());
        if let Some((rook_color, rook)) = self.take_piece(rook_from) {
            self.set_piece(rook_to, rook_color, rook);
        }
        MoveKind::Castle(side)
    }

    /// A rook taken on its home corner takes its side's castling right with it.
    fn revoke_for_captured_rook(&mut self, square: Square, owner: Color) {
        if square.row() != owner.back_row() {
            return;
        }
        if let Some(side) = CastleSide::from_rook_col(square.col()) {
            self.castling_rights.remove(owner, side);
        }
    }
}
