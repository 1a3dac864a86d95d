//! Game-over detection and server-side move validation.

use crate::board::{in_bounds, Board};
use crate::error::{MoveError, MoveResult};
use crate::move_gen::legal_moves;
use crate::types::{GameStatus, Move, PieceColor, Position};

/// True when `color` has no legal move at all. Xiangqi draws no line
/// between checkmate and stalemate; either way the side to move has lost.
pub fn is_checkmate(board: &Board, color: PieceColor) -> bool {
    board
        .pieces()
        .filter(|(_, piece)| piece.color == color)
        .all(|(pos, _)| legal_moves(board, pos).is_empty())
}

/// Status of the game given that `next_to_move` is about to play. Called
/// after every committed move with the board it produced.
pub fn status_after_move(board: &Board, next_to_move: PieceColor) -> GameStatus {
    if is_checkmate(board, next_to_move) {
        match next_to_move {
            PieceColor::Red => GameStatus::BlackWins,
            PieceColor::Black => GameStatus::RedWins,
        }
    } else {
        GameStatus::InProgress
    }
}

/// Validates a move proposed by `color` against the server's own board.
///
/// Checks run in order: both coordinates on the grid, a piece on `from`,
/// owned by `color`, and `to` among that piece's legal destinations. On
/// success returns the move enriched with any captured piece. Client
/// boards are never consulted; only positions cross the trust boundary.
pub fn validate_move(
    board: &Board,
    color: PieceColor,
    from: Position,
    to: Position,
) -> MoveResult<Move> {
    for pos in [from, to] {
        if !in_bounds(pos.row as i8, pos.col as i8) {
            return Err(MoveError::OutOfBounds {
                row: pos.row,
                col: pos.col,
            });
        }
    }

    let piece = board
        .piece_at(from)
        .ok_or(MoveError::EmptySquare { position: from })?;
    if piece.color != color {
        return Err(MoveError::WrongColor {
            position: from,
            expected: color,
        });
    }
    if !legal_moves(board, from).contains(&to) {
        return Err(MoveError::IllegalDestination { from, to });
    }

    Ok(Move {
        from,
        to,
        captured: board.piece_at(to),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Piece, PieceType};

    fn create_test_board(pieces: &[(PieceType, PieceColor, (u8, u8))]) -> Board {
        let placed: Vec<(Piece, Position)> = pieces
            .iter()
            .map(|&(piece_type, color, (row, col))| {
                (Piece::new(piece_type, color), Position::new(row, col))
            })
            .collect();
        Board::from_pieces(&placed)
    }

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col)
    }

    /// Black king cornered by two red rooks covering rows 0 and 1.
    fn mated_black() -> Board {
        create_test_board(&[
            (PieceType::King, PieceColor::Black, (0, 4)),
            (PieceType::Rook, PieceColor::Red, (0, 8)),
            (PieceType::Rook, PieceColor::Red, (1, 8)),
            (PieceType::King, PieceColor::Red, (9, 3)),
        ])
    }

    #[test]
    fn test_checkmate_fixture() {
        let board = mated_black();
        assert!(is_checkmate(&board, PieceColor::Black));
        assert!(
            !is_checkmate(&board, PieceColor::Red),
            "Red still has moves"
        );
    }

    #[test]
    fn test_status_credits_the_other_color() {
        let board = mated_black();
        assert_eq!(
            status_after_move(&board, PieceColor::Black),
            GameStatus::RedWins
        );
    }

    #[test]
    fn test_stalemate_counts_as_a_loss() {
        // Black is not in check, but every king step lands on a covered
        // square: rooks on columns 3 and 5 cover the side steps and the
        // rook on row 1 covers the advance.
        let board = create_test_board(&[
            (PieceType::King, PieceColor::Black, (0, 4)),
            (PieceType::Rook, PieceColor::Red, (1, 0)),
            (PieceType::Rook, PieceColor::Red, (5, 3)),
            (PieceType::Rook, PieceColor::Red, (5, 5)),
            (PieceType::King, PieceColor::Red, (9, 3)),
        ]);
        assert!(!crate::move_gen::is_in_check(&board, PieceColor::Black));
        assert!(is_checkmate(&board, PieceColor::Black));
        assert_eq!(
            status_after_move(&board, PieceColor::Black),
            GameStatus::RedWins
        );
    }

    #[test]
    fn test_status_in_progress_from_start() {
        let board = Board::initial();
        assert_eq!(
            status_after_move(&board, PieceColor::Red),
            GameStatus::InProgress
        );
        assert_eq!(
            status_after_move(&board, PieceColor::Black),
            GameStatus::InProgress
        );
    }

    #[test]
    fn test_check_alone_is_not_game_over() {
        let board = create_test_board(&[
            (PieceType::King, PieceColor::Black, (0, 4)),
            (PieceType::Rook, PieceColor::Red, (0, 8)),
            (PieceType::King, PieceColor::Red, (9, 3)),
        ]);
        assert!(crate::move_gen::is_in_check(&board, PieceColor::Black));
        assert_eq!(
            status_after_move(&board, PieceColor::Black),
            GameStatus::InProgress,
            "King can step out of the rook's line"
        );
    }

    #[test]
    fn test_validate_move_accepts_legal_submission() {
        let board = Board::initial();
        let mv = validate_move(&board, PieceColor::Red, pos(6, 4), pos(5, 4))
            .expect("Opening pawn push is legal");
        assert_eq!(mv.from, pos(6, 4));
        assert_eq!(mv.to, pos(5, 4));
        assert_eq!(mv.captured, None);
    }

    #[test]
    fn test_validate_move_reports_captures() {
        let board = Board::initial();
        let mv = validate_move(&board, PieceColor::Red, pos(7, 1), pos(0, 1))
            .expect("Cannon takes the horse over its screen");
        assert_eq!(
            mv.captured,
            Some(Piece::new(PieceType::Horse, PieceColor::Black))
        );
    }

    #[test]
    fn test_validate_move_rejections() {
        let board = Board::initial();

        assert_eq!(
            validate_move(&board, PieceColor::Red, pos(12, 0), pos(5, 4)),
            Err(MoveError::OutOfBounds { row: 12, col: 0 })
        );
        assert_eq!(
            validate_move(&board, PieceColor::Red, pos(5, 4), pos(4, 4)),
            Err(MoveError::EmptySquare {
                position: pos(5, 4)
            })
        );
        assert_eq!(
            validate_move(&board, PieceColor::Red, pos(3, 4), pos(4, 4)),
            Err(MoveError::WrongColor {
                position: pos(3, 4),
                expected: PieceColor::Red
            }),
            "Moving the opponent's pawn is rejected"
        );
        assert_eq!(
            validate_move(&board, PieceColor::Red, pos(6, 4), pos(4, 4)),
            Err(MoveError::IllegalDestination {
                from: pos(6, 4),
                to: pos(4, 4)
            }),
            "Pawns advance one step, not two"
        );
    }

    #[test]
    fn test_validate_move_error_messages() {
        let err = MoveError::WrongColor {
            position: pos(3, 4),
            expected: PieceColor::Red,
        };
        assert_eq!(
            err.to_string(),
            "piece at (3, 4) does not belong to red"
        );
    }
}
