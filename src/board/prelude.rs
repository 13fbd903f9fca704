//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_core::board::prelude::*;
//! ```

pub use super::{
    Board, BoardBuilder, CastleSide, CastlingRights, Color, GameResult, GameStatus, Move,
    MoveRejection, Piece, Square, SquareError,
};
pub use crate::game::Game;
pub use crate::options::GameOptions;
