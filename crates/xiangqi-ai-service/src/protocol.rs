//! Messages crossing the worker boundary.
//!
//! Both sides exchange plain data so the boundary can be an in-process
//! channel here and a socket or browser worker elsewhere without touching
//! the engine.

use serde::{Deserialize, Serialize};
use xiangqi_engine::{Board, Move, PieceColor};

/// Asks the worker for the best move on `board` when `color` is to play.
///
/// `sequence` tags the request; the worker echoes it back so the caller can
/// match answers to questions and drop answers it no longer wants.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SearchRequest {
    pub board: Board,
    pub color: PieceColor,
    pub depth: u32,
    pub sequence: u64,
}

/// The worker's answer. `best_move` is `None` when the side to move has no
/// legal move, which the caller reads as game over.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SearchResponse {
    #[serde(rename = "move")]
    pub best_move: Option<Move>,
    pub sequence: u64,
}
