//! Error types for board and game operations.

use std::fmt;

use super::{CastleSide, Color, Square};

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Why a move was refused.
///
/// These are expected outcomes of user input, not faults; the boolean
/// operations on `Game` collapse them to `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveRejection {
    /// A coordinate could not be parsed
    InvalidSquare(SquareError),
    /// The game has already ended
    GameOver,
    /// No piece on the origin square
    EmptySquare { square: Square },
    /// The piece belongs to the side not on move
    WrongTurn { expected: Color },
    /// Origin and destination are the same square
    SameSquare { square: Square },
    /// Destination holds a piece of the mover's color
    FriendlyFire { square: Square },
    /// The piece cannot move that way
    IllegalGeometry { from: Square, to: Square },
    /// A sliding or double-step path is obstructed
    PathBlocked { from: Square, to: Square },
    /// Castling right lost, rook missing or squares occupied
    CastlingUnavailable { color: Color, side: CastleSide },
    /// Castling out of, or across, an attacked square
    CastlingThroughCheck { color: Color, side: CastleSide },
    /// The move would leave the mover's king attacked
    KingInCheck { color: Color },
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::InvalidSquare(err) => write!(f, "{err}"),
            MoveRejection::GameOver => write!(f, "The game is over"),
            MoveRejection::EmptySquare { square } => {
                write!(f, "No piece on {square}")
            }
            MoveRejection::WrongTurn { expected } => {
                write!(f, "It is {expected}'s turn")
            }
            MoveRejection::SameSquare { square } => {
                write!(f, "Origin and destination are both {square}")
            }
            MoveRejection::FriendlyFire { square } => {
                write!(f, "Cannot capture own piece on {square}")
            }
            MoveRejection::IllegalGeometry { from, to } => {
                write!(f, "Piece on {from} cannot move to {to}")
            }
            MoveRejection::PathBlocked { from, to } => {
                write!(f, "Path from {from} to {to} is blocked")
            }
            MoveRejection::CastlingUnavailable { color, side } => {
                write!(f, "{color} cannot castle {side:?}")
            }
            MoveRejection::CastlingThroughCheck { color, side } => {
                write!(f, "{color} cannot castle {side:?} through check")
            }
            MoveRejection::KingInCheck { color } => {
                write!(f, "Move leaves the {color} king in check")
            }
        }
    }
}

impl std::error::Error for MoveRejection {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveRejection::InvalidSquare(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SquareError> for MoveRejection {
    fn from(err: SquareError) -> Self {
        MoveRejection::InvalidSquare(err)
    }
}

/// Error type for option parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    /// Option name not recognised
    UnknownOption { name: String },
    /// Value missing or not valid for the option
    InvalidValue { name: String, value: String },
}

impl fmt::Display for OptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionError::UnknownOption { name } => {
                write!(f, "Unknown option '{name}'")
            }
            OptionError::InvalidValue { name, value } => {
                write!(f, "Invalid value '{value}' for option '{name}'")
            }
        }
    }
}

impl std::error::Error for OptionError {}
