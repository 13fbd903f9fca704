//! Chess board representation and rule checking.
//!
//! An 8x8 mailbox grid with turn, castling, en-passant and outcome state.
//! Moves are checked geometrically, filtered for king safety by simulation on
//! a cloned board, and applied with full handling of castling, en passant
//! and promotion.
//!
//! # Example
//! ```
//! use chess_core::board::{Board, Square};
//! use chess_core::options::GameOptions;
//!
//! let board = Board::new();
//! let e2: Square = "e2".parse().unwrap();
//! let targets = board.legal_targets(e2, &GameOptions::default());
//! assert_eq!(targets.len(), 2);
//! ```

mod attack_tables;
mod attacks;
mod builder;
mod display;
mod error;
mod make_move;
mod movegen;
mod outcome;
pub mod prelude;
mod safety;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{MoveRejection, OptionError, SquareError};
pub use state::{Board, GameResult, GameStatus};
pub use types::{CastleSide, CastlingRights, Color, Move, MoveKind, MoveRecord, Piece, Square};

pub(crate) use safety::Validation;
