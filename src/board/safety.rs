//! King-safety validation.
//!
//! A candidate move is played on a throwaway copy of the board and the
//! mover's king is then tested for attack. The live board is never touched.

use crate::logging::log_warn;
use crate::options::{CastlingCheck, GameOptions};

use super::error::MoveRejection;
use super::movegen::castle_side;
use super::movegen::KING_HOME_COL;
use super::{Board, CastleSide, Color, Move, Piece, Square};

/// How much of the rule set a move request is checked against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Validation {
    /// Pseudo-legality and king safety.
    Full,
    /// Pseudo-legality only, for moves already vetted elsewhere.
    Trusted,
}

impl Board {
    /// Every rule that applies to `mv` at this validation level.
    pub(crate) fn check_move(
        &self,
        mv: Move,
        validation: Validation,
        options: &GameOptions,
    ) -> Result<(), MoveRejection> {
        if self.is_game_over() {
            return Err(MoveRejection::GameOver);
        }
        self.is_pseudo_legal(mv.from, mv.to)?;
        match validation {
            Validation::Full => self.check_king_safety(mv, options),
            Validation::Trusted => Ok(()),
        }
    }

    /// King-safety half of the legality check. `mv` must already be
    /// pseudo-legal.
    pub(crate) fn check_king_safety(
        &self,
        mv: Move,
        options: &GameOptions,
    ) -> Result<(), MoveRejection> {
        let Some((color, piece)) = self.piece_at(mv.from) else {
            return Err(MoveRejection::EmptySquare { square: mv.from });
        };

        if piece == Piece::King && options.castling_check == CastlingCheck::Strict {
            if let Some(side) = castle_side(mv.from, mv.to, color) {
                if self.castling_crosses_attack(color, side) {
                    return Err(MoveRejection::CastlingThroughCheck { color, side });
                }
            }
        }

        if self.leaves_king_safe(mv, color) {
            Ok(())
        } else {
            Err(MoveRejection::KingInCheck { color })
        }
    }

    /// Simulate `mv` on a clone and test whether `color`'s king survives
    /// unattacked.
    pub(crate) fn leaves_king_safe(&self, mv: Move, color: Color) -> bool {
        let mut scratch = self.clone();
        scratch.apply_move(mv);
        match scratch.find_king(color) {
            Some(king) => !scratch.is_square_attacked(king, color.opponent()),
            None => {
                log_warn!("no {color} king after simulating {}{}", mv.from, mv.to);
                true
            }
        }
    }

    /// Whether the king's start square or the square it crosses is attacked.
    /// The landing square is covered by the simulation.
    fn castling_crosses_attack(&self, color: Color, side: CastleSide) -> bool {
        let row = color.back_row();
        [KING_HOME_COL, side.rook_target_col()]
            .into_iter()
            .any(|col| self.is_square_attacked(Square::at(row, col), color.opponent()))
    }

    /// Destinations the piece on `from` may legally reach this turn.
    #[must_use]
    pub fn legal_targets(&self, from: Square, options: &GameOptions) -> Vec<Square> {
        if self.is_game_over() || self.color_on(from) != Some(self.side_to_move) {
            return Vec::new();
        }
        self.pseudo_legal_targets(from)
            .into_iter()
            .filter(|&to| self.check_king_safety(Move::new(from, to), options).is_ok())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardBuilder;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_pinned_piece_cannot_leave_line() {
        let board = BoardBuilder::new()
            .piece(sq("e1"), Color::White, Piece::King)
            .piece(sq("e2"), Color::White, Piece::Bishop)
            .piece(sq("e8"), Color::Black, Piece::Rook)
            .build();
        let options = GameOptions::default();
        let mv = Move::new(sq("e2"), sq("d3"));

        assert!(board.check_move(mv, Validation::Trusted, &options).is_ok());
        assert_eq!(
            board.check_move(mv, Validation::Full, &options),
            Err(MoveRejection::KingInCheck {
                color: Color::White
            })
        );
    }

    #[test]
    fn test_simulation_leaves_board_untouched() {
        let board = BoardBuilder::starting_position().build();
        let before = board.clone();
        assert!(board.leaves_king_safe(Move::new(sq("e2"), sq("e4")), Color::White));
        assert_eq!(board, before);
    }

    #[test]
    fn test_en_passant_exposing_king_is_rejected() {
        // Capturing removes both pawns from the fifth rank and opens the rook's line.
        let board = BoardBuilder::new()
            .piece(sq("a5"), Color::White, Piece::King)
            .piece(sq("e5"), Color::White, Piece::Pawn)
            .piece(sq("d5"), Color::Black, Piece::Pawn)
            .piece(sq("h5"), Color::Black, Piece::Rook)
            .piece(sq("e8"), Color::Black, Piece::King)
            .en_passant(sq("d6"))
            .build();
        let options = GameOptions::default();
        let mv = Move::new(sq("e5"), sq("d6"));
        assert!(board.is_pseudo_legal(mv.from, mv.to).is_ok());
        assert!(board.check_move(mv, Validation::Full, &options).is_err());
    }

    #[test]
    fn test_castling_through_attacked_square() {
        let board = BoardBuilder::new()
            .piece(sq("e1"), Color::White, Piece::King)
            .piece(sq("h1"), Color::White, Piece::Rook)
            .piece(sq("f8"), Color::Black, Piece::Rook)
            .piece(sq("a8"), Color::Black, Piece::King)
            .castle_kingside(Color::White)
            .build();
        let mv = Move::new(sq("e1"), sq("g1"));

        let strict = GameOptions::default();
        assert_eq!(
            board.check_move(mv, Validation::Full, &strict),
            Err(MoveRejection::CastlingThroughCheck {
                color: Color::White,
                side: CastleSide::Kingside
            })
        );

        let lenient = GameOptions {
            castling_check: CastlingCheck::DestinationOnly,
            ..GameOptions::default()
        };
        assert!(board.check_move(mv, Validation::Full, &lenient).is_ok());
    }

    #[test]
    fn test_castling_out_of_check_is_rejected() {
        let board = BoardBuilder::new()
            .piece(sq("e1"), Color::White, Piece::King)
            .piece(sq("a1"), Color::White, Piece::Rook)
            .piece(sq("e8"), Color::Black, Piece::Rook)
            .piece(sq("h8"), Color::Black, Piece::King)
            .castle_queenside(Color::White)
            .build();
        assert!(board
            .check_move(
                Move::new(sq("e1"), sq("c1")),
                Validation::Full,
                &GameOptions::default()
            )
            .is_err());
    }

    #[test]
    fn test_legal_targets_of_pinned_knight_is_empty() {
        let board = BoardBuilder::new()
            .piece(sq("e1"), Color::White, Piece::King)
            .piece(sq("e3"), Color::White, Piece::Knight)
            .piece(sq("e7"), Color::Black, Piece::Queen)
            .build();
        assert!(board
            .legal_targets(sq("e3"), &GameOptions::default())
            .is_empty());
        assert_eq!(
            board.legal_targets(sq("e1"), &GameOptions::default()).len(),
            5
        );
    }

    #[test]
    fn test_missing_own_king_is_treated_as_safe() {
        let board = BoardBuilder::new()
            .piece(sq("a2"), Color::White, Piece::Pawn)
            .piece(sq("h8"), Color::Black, Piece::Queen)
            .build();
        assert!(board.leaves_king_safe(Move::new(sq("a2"), sq("a3")), Color::White));
    }
}
