//! Move entry points for already-vetted moves.

use crate::board::{Move, MoveRecord, MoveRejection, Square, Validation};

use super::{parse_move, Game};

/// Borrowed handle that plays moves without the king-safety check.
///
/// Obtained from [`Game::trusted`]. Every other rule still applies: the
/// piece must belong to the side to move, the movement must be
/// geometrically valid and the game must not be over.
#[derive(Debug)]
pub struct TrustedMoves<'a> {
    game: &'a mut Game,
}

impl<'a> TrustedMoves<'a> {
    pub(super) fn new(game: &'a mut Game) -> Self {
        TrustedMoves { game }
    }

    #[must_use]
    pub fn is_move_legal(&self, from: &str, to: &str) -> bool {
        parse_move(from, to, None).is_ok_and(|mv| {
            self.game
                .board
                .check_move(mv, Validation::Trusted, &self.game.options)
                .is_ok()
        })
    }

    pub fn try_make_move(&mut self, from: &str, to: &str) -> bool {
        self.make_move(from, to, None).is_ok()
    }

    pub fn try_make_move_with_promotion(&mut self, from: &str, to: &str, promotion: char) -> bool {
        self.make_move(from, to, Some(promotion)).is_ok()
    }

    pub fn make_move(
        &mut self,
        from: &str,
        to: &str,
        promotion: Option<char>,
    ) -> Result<MoveRecord, MoveRejection> {
        let mv = parse_move(from, to, promotion)?;
        self.game.execute(mv, Validation::Trusted)
    }

    pub fn play(&mut self, mv: Move) -> Result<MoveRecord, MoveRejection> {
        self.game.execute(mv, Validation::Trusted)
    }

    /// Pseudo-legal destinations of the piece on `from`, for the side to move.
    #[must_use]
    pub fn targets(&self, from: Square) -> Vec<Square> {
        let board = &self.game.board;
        if board.is_game_over() || board.color_on(from) != Some(board.side_to_move()) {
            return Vec::new();
        }
        board.pseudo_legal_targets(from)
    }
}
