use once_cell::sync::Lazy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{CastleSide, CastlingRights, Color, Piece, Square};

/// Position reached by `Board::new` and `Board::reset`.
static INITIAL_POSITION: Lazy<Board> = Lazy::new(|| {
    let mut board = Board::empty();
    let back_rank = [
        Piece::Rook,
        Piece::Knight,
        Piece::Bishop,
        Piece::Queen,
        Piece::King,
        Piece::Bishop,
        Piece::Knight,
        Piece::Rook,
    ];
    for (col, piece) in back_rank.iter().enumerate() {
        board.set_piece(Square::at(Color::White.back_row(), col), Color::White, *piece);
        board.set_piece(Square::at(Color::Black.back_row(), col), Color::Black, *piece);
        board.set_piece(Square::at(Color::White.pawn_start_row(), col), Color::White, Piece::Pawn);
        board.set_piece(Square::at(Color::Black.pawn_start_row(), col), Color::Black, Piece::Pawn);
    }
    board.castling_rights = CastlingRights::all();
    board
});

/// Phase of the game as classified after each move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    InProgress,
    Checkmate,
    Stalemate,
    /// The side to move has no king. Only reachable from hand-built or
    /// trusted positions.
    KingMissing,
}

/// Outcome of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameResult {
    #[default]
    Undecided,
    WhiteWins,
    BlackWins,
    Draw,
}

impl GameResult {
    #[must_use]
    pub const fn win_for(color: Color) -> Self {
        match color {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }
}

/// The 8x8 grid together with turn, castling, en-passant and outcome state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: [[Option<(Color, Piece)>; 8]; 8],
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) status: GameStatus,
    pub(crate) result: GameResult,
}

impl Board {
    /// Standard initial position, White to move.
    #[must_use]
    pub fn new() -> Self {
        INITIAL_POSITION.clone()
    }

    pub(crate) fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            status: GameStatus::InProgress,
            result: GameResult::Undecided,
        }
    }

    /// Restore the standard initial position and game state.
    pub fn reset(&mut self) {
        self.clone_from(&INITIAL_POSITION);
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.row()][sq.col()]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Get just the piece type on a square (without color)
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    /// Get just the color of the piece on a square
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    /// Overwrites whatever occupied `sq`.
    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.row()][sq.col()] = Some((color, piece));
    }

    #[inline]
    pub(crate) fn take_piece(&mut self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.row()][sq.col()].take()
    }

    /// Occupied squares with their pieces, row-major from a8.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|(c, p)| (sq, c, p)))
    }

    /// Squares holding pieces of `color`.
    pub(crate) fn squares_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces()
            .filter(move |(_, c, _)| *c == color)
            .map(|(sq, _, piece)| (sq, piece))
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    #[must_use]
    pub fn has_castling_right(&self, color: Color, side: CastleSide) -> bool {
        self.castling_rights.has(color, side)
    }

    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn result(&self) -> GameResult {
        self.result
    }

    #[inline]
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
