//! The board value.
//!
//! A board is a plain 10x9 array of optional pieces, small enough to copy
//! at every search ply instead of mutating in place. `apply_move` returns a
//! fresh board and performs no legality checking; legality lives in
//! [`crate::move_gen`] and [`crate::status`].

use serde::{Deserialize, Serialize};

use crate::types::{Piece, PieceColor, PieceType, Position, BOARD_COLS, BOARD_ROWS};

/// True when the signed coordinate pair lies on the board. Geometry probes
/// work in signed space so stepping off an edge is an ordinary miss.
#[inline]
pub fn in_bounds(row: i8, col: i8) -> bool {
    row >= 0 && (row as usize) < BOARD_ROWS && col >= 0 && (col as usize) < BOARD_COLS
}

/// A 10x9 grid of cells in row-major order, row 0 at Black's back rank.
///
/// Serializes as an array of rows with `null` for empty cells, the shape
/// the UI and server exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    grid: [[Option<Piece>; BOARD_COLS]; BOARD_ROWS],
}

impl Board {
    /// A board with no pieces, for building fixtures.
    pub fn empty() -> Board {
        Board {
            grid: [[None; BOARD_COLS]; BOARD_ROWS],
        }
    }

    /// The standard starting position.
    pub fn initial() -> Board {
        use PieceType::{Advisor, Cannon, Elephant, Horse, King, Pawn, Rook};

        const BACK_RANK: [PieceType; BOARD_COLS] = [
            Rook, Horse, Elephant, Advisor, King, Advisor, Elephant, Horse, Rook,
        ];

        let mut board = Board::empty();
        for (col, &piece_type) in BACK_RANK.iter().enumerate() {
            board.grid[0][col] = Some(Piece::new(piece_type, PieceColor::Black));
            board.grid[9][col] = Some(Piece::new(piece_type, PieceColor::Red));
        }
        for col in [1, 7] {
            board.grid[2][col] = Some(Piece::new(Cannon, PieceColor::Black));
            board.grid[7][col] = Some(Piece::new(Cannon, PieceColor::Red));
        }
        for col in (0..BOARD_COLS).step_by(2) {
            board.grid[3][col] = Some(Piece::new(Pawn, PieceColor::Black));
            board.grid[6][col] = Some(Piece::new(Pawn, PieceColor::Red));
        }
        board
    }

    /// A board populated from `(piece, position)` pairs. Out-of-range
    /// positions are ignored.
    pub fn from_pieces(pieces: &[(Piece, Position)]) -> Board {
        let mut board = Board::empty();
        for &(piece, pos) in pieces {
            board.set(pos, Some(piece));
        }
        board
    }

    /// The piece at `pos`, if any. Out-of-range positions read as empty.
    #[inline]
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.grid
            .get(pos.row as usize)
            .and_then(|row| row.get(pos.col as usize))
            .copied()
            .flatten()
    }

    /// Whether the cell at `pos` is empty.
    #[inline]
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.piece_at(pos).is_none()
    }

    /// Signed-coordinate cell read used by the move geometry. Off-board
    /// reads yield `None`.
    #[inline]
    pub(crate) fn cell(&self, row: i8, col: i8) -> Option<Piece> {
        if !in_bounds(row, col) {
            return None;
        }
        self.grid[row as usize][col as usize]
    }

    #[inline]
    pub(crate) fn set(&mut self, pos: Position, piece: Option<Piece>) {
        if let Some(cell) = self
            .grid
            .get_mut(pos.row as usize)
            .and_then(|row| row.get_mut(pos.col as usize))
        {
            *cell = piece;
        }
    }

    /// A new board with the piece at `from` moved to `to` and the origin
    /// cleared. No legality checking of any kind.
    #[must_use]
    pub fn apply_move(&self, from: Position, to: Position) -> Board {
        let mut next = *self;
        next.set(to, self.piece_at(from));
        next.set(from, None);
        next
    }

    /// Iterator over occupied cells in row-major order. Scan order matters:
    /// it is what makes move generation, and therefore search tie-breaking,
    /// deterministic.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.grid.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| {
                cell.map(|piece| (Position::new(row as u8, col as u8), piece))
            })
        })
    }

    /// Locates the king of `color`, if it is still on the board.
    pub fn king_position(&self, color: PieceColor) -> Option<Position> {
        self.pieces()
            .find(|(_, piece)| piece.piece_type == PieceType::King && piece.color == color)
            .map(|(pos, _)| pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_piece_counts() {
        let board = Board::initial();
        let total = board.pieces().count();
        assert_eq!(total, 32, "Each side starts with 16 pieces");

        let red = board
            .pieces()
            .filter(|(_, p)| p.color == PieceColor::Red)
            .count();
        assert_eq!(red, 16);
    }

    #[test]
    fn test_initial_layout_spot_checks() {
        let board = Board::initial();

        assert_eq!(
            board.piece_at(Position::new(0, 4)),
            Some(Piece::new(PieceType::King, PieceColor::Black))
        );
        assert_eq!(
            board.piece_at(Position::new(9, 4)),
            Some(Piece::new(PieceType::King, PieceColor::Red))
        );
        assert_eq!(
            board.piece_at(Position::new(2, 1)),
            Some(Piece::new(PieceType::Cannon, PieceColor::Black))
        );
        assert_eq!(
            board.piece_at(Position::new(7, 7)),
            Some(Piece::new(PieceType::Cannon, PieceColor::Red))
        );
        assert_eq!(
            board.piece_at(Position::new(6, 4)),
            Some(Piece::new(PieceType::Pawn, PieceColor::Red))
        );
        assert_eq!(
            board.piece_at(Position::new(3, 8)),
            Some(Piece::new(PieceType::Pawn, PieceColor::Black))
        );
        assert!(board.is_empty_at(Position::new(5, 4)), "River row is empty");
    }

    #[test]
    fn test_apply_move_leaves_source_board_untouched() {
        let board = Board::initial();
        let from = Position::new(6, 4);
        let to = Position::new(5, 4);

        let next = board.apply_move(from, to);

        assert_eq!(
            board.piece_at(from),
            Some(Piece::new(PieceType::Pawn, PieceColor::Red)),
            "Original board must not change"
        );
        assert!(next.is_empty_at(from));
        assert_eq!(
            next.piece_at(to),
            Some(Piece::new(PieceType::Pawn, PieceColor::Red))
        );
    }

    #[test]
    fn test_apply_move_overwrites_capture() {
        let rook = Piece::new(PieceType::Rook, PieceColor::Red);
        let pawn = Piece::new(PieceType::Pawn, PieceColor::Black);
        let board = Board::from_pieces(&[
            (rook, Position::new(5, 0)),
            (pawn, Position::new(3, 0)),
        ]);

        let next = board.apply_move(Position::new(5, 0), Position::new(3, 0));
        assert_eq!(next.piece_at(Position::new(3, 0)), Some(rook));
        assert_eq!(next.pieces().count(), 1, "Captured pawn is gone");
    }

    #[test]
    fn test_out_of_range_reads_are_empty() {
        let board = Board::initial();
        assert_eq!(board.piece_at(Position::new(10, 0)), None);
        assert_eq!(board.piece_at(Position::new(0, 9)), None);
        assert_eq!(board.cell(-1, 4), None);
        assert_eq!(board.cell(4, 100), None);
    }

    #[test]
    fn test_king_position() {
        let board = Board::initial();
        assert_eq!(
            board.king_position(PieceColor::Black),
            Some(Position::new(0, 4))
        );
        assert_eq!(
            board.king_position(PieceColor::Red),
            Some(Position::new(9, 4))
        );
        assert_eq!(Board::empty().king_position(PieceColor::Red), None);
    }

    #[test]
    fn test_in_bounds() {
        assert!(in_bounds(0, 0));
        assert!(in_bounds(9, 8));
        assert!(!in_bounds(-1, 0));
        assert!(!in_bounds(10, 0));
        assert!(!in_bounds(0, 9));
    }

    #[test]
    fn test_board_wire_shape() {
        let board = Board::from_pieces(&[(
            Piece::new(PieceType::King, PieceColor::Red),
            Position::new(9, 4),
        )]);
        let value = serde_json::to_value(board).unwrap();
        let rows = value.as_array().expect("board serializes as rows");
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].as_array().unwrap().len(), 9);
        assert!(rows[0][0].is_null());
        assert_eq!(
            rows[9][4],
            serde_json::json!({ "type": "king", "color": "red" })
        );
    }
}
