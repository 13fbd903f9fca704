//! Game facade over the board.
//!
//! `Game` is what a host talks to: it takes moves as coordinate strings,
//! validates them, applies them, keeps the move history and reports the
//! outcome. Illegal requests are answered with `false` or a
//! [`MoveRejection`], never with a panic.

mod trusted;

use std::fmt;

use crate::board::{
    Board, CastleSide, CastlingRights, Color, GameResult, GameStatus, Move, MoveRecord,
    MoveRejection, Piece, Square, SquareError, Validation,
};
use crate::logging::{log_debug, log_info, log_trace};
use crate::options::GameOptions;

pub use trusted::TrustedMoves;

/// A game in progress: position, rule options and move history.
#[derive(Clone, Debug, Default)]
pub struct Game {
    board: Board,
    options: GameOptions,
    history: Vec<MoveRecord>,
}

impl Game {
    /// New game from the initial position with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_options(options: GameOptions) -> Self {
        Game {
            board: Board::new(),
            options,
            history: Vec::new(),
        }
    }

    /// Resume play from an arbitrary position, usually one built with
    /// [`BoardBuilder`](crate::board::BoardBuilder).
    #[must_use]
    pub fn from_board(board: Board, options: GameOptions) -> Self {
        Game {
            board,
            options,
            history: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Options take effect from the next move on.
    pub fn set_options(&mut self, options: GameOptions) {
        self.options = options;
    }

    pub fn options_mut(&mut self) -> &mut GameOptions {
        &mut self.options
    }

    /// Contents of the square named by `square`, e.g. `"e2"`.
    pub fn piece_at(&self, square: &str) -> Result<Option<(Color, Piece)>, SquareError> {
        let sq: Square = square.parse()?;
        Ok(self.board.piece_at(sq))
    }

    /// Whether the side to move may play `from` to `to`.
    #[must_use]
    pub fn is_move_legal(&self, from: &str, to: &str) -> bool {
        self.check_move(from, to).is_ok()
    }

    /// Why `from` to `to` would be refused, if it would.
    pub fn check_move(&self, from: &str, to: &str) -> Result<(), MoveRejection> {
        let mv = parse_move(from, to, None)?;
        self.board.check_move(mv, Validation::Full, &self.options)
    }

    /// Play `from` to `to`, promoting to a queen if a pawn reaches its last
    /// rank. Returns whether the move was made.
    pub fn try_make_move(&mut self, from: &str, to: &str) -> bool {
        self.make_move(from, to, None).is_ok()
    }

    /// Like [`try_make_move`](Self::try_make_move) with a promotion choice
    /// (`q`, `r`, `b` or `n`, any case). Anything else promotes to a queen.
    pub fn try_make_move_with_promotion(&mut self, from: &str, to: &str, promotion: char) -> bool {
        self.make_move(from, to, Some(promotion)).is_ok()
    }

    /// Validate and play a move, returning what was done.
    pub fn make_move(
        &mut self,
        from: &str,
        to: &str,
        promotion: Option<char>,
    ) -> Result<MoveRecord, MoveRejection> {
        let mv = parse_move(from, to, promotion)?;
        self.execute(mv, Validation::Full)
    }

    /// Validate and play an already-parsed move.
    pub fn play(&mut self, mv: Move) -> Result<MoveRecord, MoveRejection> {
        self.execute(mv, Validation::Full)
    }

    /// Move entry points that skip the king-safety check, for moves already
    /// vetted elsewhere. Turn order, movement rules and the game-over state
    /// still apply.
    pub fn trusted(&mut self) -> TrustedMoves<'_> {
        TrustedMoves::new(self)
    }

    /// Back to the initial position. Options are kept.
    pub fn reset(&mut self) {
        self.board.reset();
        self.history.clear();
        log_debug!("game reset");
    }

    pub(crate) fn execute(
        &mut self,
        mv: Move,
        validation: Validation,
    ) -> Result<MoveRecord, MoveRejection> {
        if let Err(reason) = self.board.check_move(mv, validation, &self.options) {
            log_trace!("rejected {}{}: {reason}", mv.from, mv.to);
            return Err(reason);
        }

        let record = self
            .board
            .apply_move(mv)
            .ok_or(MoveRejection::EmptySquare { square: mv.from })?;
        self.history.push(record);

        let status = self.board.finish_turn(&self.options);
        log_debug!("{} played {record}", record.color);
        if status != GameStatus::InProgress {
            log_info!(
                "game over after {} moves: {status:?}, {:?}",
                self.history.len(),
                self.board.result()
            );
        }
        Ok(record)
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    #[inline]
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.board.is_game_over()
    }

    #[inline]
    #[must_use]
    pub fn result(&self) -> GameResult {
        self.board.result()
    }

    #[inline]
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.board.en_passant_target()
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.board.castling_rights()
    }

    /// Whether `color` still holds the right to castle on `side`. Says
    /// nothing about whether castling is playable right now.
    #[must_use]
    pub fn can_castle(&self, color: Color, side: CastleSide) -> bool {
        self.board.has_castling_right(color, side)
    }

    /// Whether the side to move is in check.
    #[must_use]
    pub fn is_in_check(&self) -> bool {
        self.board.is_in_check(self.board.side_to_move())
    }

    /// Squares the piece on `from` may legally move to. Empty when the
    /// square is empty, holds an opponent piece or the game is over.
    pub fn legal_targets(&self, from: &str) -> Result<Vec<Square>, SquareError> {
        let sq: Square = from.parse()?;
        Ok(self.board.legal_targets(sq, &self.options))
    }

    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Moves so far in long coordinate form, space separated
    /// (`"e2e4 e7e5 g1f3"`).
    #[must_use]
    pub fn moves_uci(&self) -> String {
        self.history
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        match self.board.result() {
            GameResult::Undecided => write!(f, "{} to move", self.board.side_to_move()),
            GameResult::WhiteWins => write!(f, "1-0 ({:?})", self.board.status()),
            GameResult::BlackWins => write!(f, "0-1 ({:?})", self.board.status()),
            GameResult::Draw => write!(f, "1/2-1/2 ({:?})", self.board.status()),
        }
    }
}

fn parse_move(from: &str, to: &str, promotion: Option<char>) -> Result<Move, MoveRejection> {
    let from: Square = from.parse()?;
    let to: Square = to.parse()?;
    Ok(match promotion {
        Some(c) => Move::with_promotion(from, to, Piece::promotion_from_char(c)),
        None => Move::new(from, to),
    })
}
