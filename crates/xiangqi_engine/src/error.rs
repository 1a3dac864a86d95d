//! Error types for the engine.
//!
//! The rules engine is total over well-formed inputs and reports game
//! conditions as values, not errors. The one fallible surface is
//! [`crate::status::validate_move`], which the multiplayer server uses to
//! reject and report bad client submissions.

use thiserror::Error;

use crate::types::{PieceColor, Position};

/// Reasons a proposed move is rejected by [`crate::status::validate_move`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Coordinates outside the 10x9 grid
    #[error("position ({row}, {col}) is off the board")]
    OutOfBounds { row: u8, col: u8 },

    /// No piece on the source square
    #[error("no piece at {position}")]
    EmptySquare { position: Position },

    /// The piece belongs to the other player
    #[error("piece at {position} does not belong to {expected}")]
    WrongColor {
        position: Position,
        expected: PieceColor,
    },

    /// The destination is not reachable by the piece, or the move would
    /// leave its own king exposed
    #[error("piece at {from} cannot move to {to}")]
    IllegalDestination { from: Position, to: Position },
}

/// Result type alias for move validation.
pub type MoveResult<T> = Result<T, MoveError>;
