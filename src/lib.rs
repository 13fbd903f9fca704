//! Chess rules core: board state, move validation and game-end detection
//! for a two-player game driven by a UI or an engine adapter.

mod logging;

pub mod board;
pub mod game;
pub mod options;
pub mod sync;

pub use board::{Board, Color, GameResult, GameStatus, Move, MoveRejection, Piece, Square};
pub use game::Game;
pub use options::GameOptions;
pub use sync::SharedGame;
