//! Core chess types.
//!
//! This module contains the fundamental types used throughout the crate:
//! - `Piece` and `Color` - chess piece types and colors
//! - `Square` - (row, col) board coordinate
//! - `Move` and `MoveRecord` - requested and applied moves
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::{CastleSide, CastlingRights};
pub use moves::{Move, MoveKind, MoveRecord};
pub use piece::{Color, Piece};
pub use square::Square;
