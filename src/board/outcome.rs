//! Turn hand-over and game-end classification.

use crate::logging::log_warn;
use crate::options::{EndDetection, GameOptions};

use super::{Board, Color, GameResult, GameStatus, Move};

impl Board {
    /// Pass the turn and classify the position for the new side to move.
    pub(crate) fn finish_turn(&mut self, options: &GameOptions) -> GameStatus {
        let mover = self.side_to_move;
        self.side_to_move = mover.opponent();
        let (status, result) = self.classify(options);
        self.status = status;
        self.result = result;
        status
    }

    fn classify(&self, options: &GameOptions) -> (GameStatus, GameResult) {
        let side = self.side_to_move;
        let mover = side.opponent();

        if self.find_king(side).is_none() {
            log_warn!("{side} has no king; awarding the game to {mover}");
            return (GameStatus::KingMissing, GameResult::win_for(mover));
        }

        if self.has_any_move(side, options.end_detection, options) {
            (GameStatus::InProgress, GameResult::Undecided)
        } else if self.is_in_check(side) {
            (GameStatus::Checkmate, GameResult::win_for(mover))
        } else {
            (GameStatus::Stalemate, GameResult::Draw)
        }
    }

    /// Whether `color` has at least one move under `detection`.
    pub(crate) fn has_any_move(
        &self,
        color: Color,
        detection: EndDetection,
        options: &GameOptions,
    ) -> bool {
        self.squares_of(color).any(|(from, _)| {
            self.pseudo_legal_targets(from)
                .into_iter()
                .any(|to| match detection {
                    EndDetection::PseudoLegal => true,
                    EndDetection::Legal => self
                        .check_king_safety(Move::new(from, to), options)
                        .is_ok(),
                })
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{BoardBuilder, Color, GameResult, GameStatus, Piece, Square};
    use crate::options::{EndDetection, GameOptions};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_turn_flips_and_game_continues() {
        let mut board = BoardBuilder::starting_position().build();
        let status = board.finish_turn(&GameOptions::default());
        assert_eq!(status, GameStatus::InProgress);
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(board.result(), GameResult::Undecided);
    }

    #[test]
    fn test_back_rank_mate() {
        // White just played Ra8; Black to move after the hand-over.
        let mut board = BoardBuilder::new()
            .piece(sq("g8"), Color::Black, Piece::King)
            .piece(sq("f7"), Color::Black, Piece::Pawn)
            .piece(sq("g7"), Color::Black, Piece::Pawn)
            .piece(sq("h7"), Color::Black, Piece::Pawn)
            .piece(sq("a8"), Color::White, Piece::Rook)
            .piece(sq("g1"), Color::White, Piece::King)
            .build();
        let status = board.finish_turn(&GameOptions::default());
        assert_eq!(status, GameStatus::Checkmate);
        assert_eq!(board.result(), GameResult::WhiteWins);
        assert!(board.is_game_over());
    }

    #[test]
    fn test_king_in_corner_stalemate() {
        let mut board = BoardBuilder::new()
            .piece(sq("h8"), Color::Black, Piece::King)
            .piece(sq("f7"), Color::White, Piece::Queen)
            .piece(sq("g6"), Color::White, Piece::King)
            .build();
        let status = board.finish_turn(&GameOptions::default());
        assert_eq!(status, GameStatus::Stalemate);
        assert_eq!(board.result(), GameResult::Draw);
    }

    #[test]
    fn test_missing_king_awards_mover() {
        let mut board = BoardBuilder::new()
            .piece(sq("e1"), Color::White, Piece::King)
            .piece(sq("a7"), Color::Black, Piece::Pawn)
            .build();
        let status = board.finish_turn(&GameOptions::default());
        assert_eq!(status, GameStatus::KingMissing);
        assert_eq!(board.result(), GameResult::WhiteWins);
    }

    #[test]
    fn test_pseudo_legal_detection_misses_mate() {
        // Checkmate where the black king still has geometric moves, all into check.
        let position = BoardBuilder::new()
            .piece(sq("h8"), Color::Black, Piece::King)
            .piece(sq("g7"), Color::White, Piece::Queen)
            .piece(sq("f6"), Color::White, Piece::King);

        let mut strict = position.clone().build();
        assert_eq!(strict.finish_turn(&GameOptions::default()), GameStatus::Checkmate);

        let lenient_options = GameOptions {
            end_detection: EndDetection::PseudoLegal,
            ..GameOptions::default()
        };
        let mut lenient = position.build();
        assert_eq!(lenient.finish_turn(&lenient_options), GameStatus::InProgress);
    }
}
