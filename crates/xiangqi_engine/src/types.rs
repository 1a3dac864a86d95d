//! Core value types shared by every engine module.
//!
//! All of these are small Copy values with serde derives because the UI,
//! the multiplayer server, and the AI worker ship them across their
//! boundaries as messages. Wire spellings are snake_case and pinned by
//! tests; a serialized piece uses the field name `type` for its kind.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of rows on the board. Row 0 is Black's back rank, row 9 is Red's.
pub const BOARD_ROWS: usize = 10;

/// Number of columns on the board.
pub const BOARD_COLS: usize = 9;

/// The two sides of a game. Red moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PieceColor {
    Red,
    Black,
}

impl PieceColor {
    /// The opposing side.
    #[inline]
    pub fn opponent(self) -> PieceColor {
        match self {
            PieceColor::Red => PieceColor::Black,
            PieceColor::Black => PieceColor::Red,
        }
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceColor::Red => write!(f, "red"),
            PieceColor::Black => write!(f, "black"),
        }
    }
}

/// The seven piece kinds of Xiangqi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PieceType {
    King,
    Advisor,
    Elephant,
    Horse,
    Rook,
    Cannon,
    Pawn,
}

/// A piece on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    #[serde(rename = "type")]
    pub piece_type: PieceType,
    pub color: PieceColor,
}

impl Piece {
    #[inline]
    pub fn new(piece_type: PieceType, color: PieceColor) -> Piece {
        Piece { piece_type, color }
    }
}

/// A board coordinate: `row` in 0..=9, `col` in 0..=8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    #[inline]
    pub fn new(row: u8, col: u8) -> Position {
        Position { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A single move.
///
/// `captured` records what stood on `to` before the move was played. It is
/// informational only and always recomputed from the board being moved on,
/// never trusted from a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    pub captured: Option<Piece>,
}

/// Overall game state as the rules engine sees it.
///
/// `Draw` exists for collaborators that negotiate draws externally; the
/// engine itself only ever reports `InProgress` or a win, and resignation
/// maps to a win for the other side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    RedWins,
    BlackWins,
    Draw,
}

impl GameStatus {
    /// The winning side, if the game is over with a winner.
    pub fn winner(self) -> Option<PieceColor> {
        match self {
            GameStatus::RedWins => Some(PieceColor::Red),
            GameStatus::BlackWins => Some(PieceColor::Black),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_opponent_flips_sides() {
        assert_eq!(PieceColor::Red.opponent(), PieceColor::Black);
        assert_eq!(PieceColor::Black.opponent(), PieceColor::Red);
        assert_eq!(PieceColor::Red.opponent().opponent(), PieceColor::Red);
    }

    #[test]
    fn test_color_and_piece_wire_spelling() {
        assert_eq!(serde_json::to_value(PieceColor::Red).unwrap(), json!("red"));
        assert_eq!(
            serde_json::to_value(PieceType::Elephant).unwrap(),
            json!("elephant")
        );

        let piece = Piece::new(PieceType::King, PieceColor::Black);
        assert_eq!(
            serde_json::to_value(piece).unwrap(),
            json!({ "type": "king", "color": "black" }),
            "Piece should serialize with a `type` field"
        );
    }

    #[test]
    fn test_status_wire_spelling() {
        assert_eq!(
            serde_json::to_value(GameStatus::InProgress).unwrap(),
            json!("in_progress")
        );
        assert_eq!(
            serde_json::to_value(GameStatus::RedWins).unwrap(),
            json!("red_wins")
        );
        assert_eq!(
            serde_json::to_value(GameStatus::BlackWins).unwrap(),
            json!("black_wins")
        );
        assert_eq!(serde_json::to_value(GameStatus::Draw).unwrap(), json!("draw"));
    }

    #[test]
    fn test_position_wire_shape() {
        let pos = Position::new(6, 4);
        assert_eq!(
            serde_json::to_value(pos).unwrap(),
            json!({ "row": 6, "col": 4 })
        );
        let back: Position = serde_json::from_value(json!({ "row": 6, "col": 4 })).unwrap();
        assert_eq!(back, pos);
    }

    #[test]
    fn test_winner_only_for_decided_games() {
        assert_eq!(GameStatus::RedWins.winner(), Some(PieceColor::Red));
        assert_eq!(GameStatus::BlackWins.winner(), Some(PieceColor::Black));
        assert_eq!(GameStatus::InProgress.winner(), None);
        assert_eq!(GameStatus::Draw.winner(), None);
    }
}
