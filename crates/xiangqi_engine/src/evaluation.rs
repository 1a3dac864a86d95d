//! Static position evaluation.
//!
//! Scores a board from one side's point of view: material value plus a
//! positional bonus per piece, added for the perspective side and
//! subtracted for the opponent, then adjusted 50 points for a king
//! currently in check. Positional tables exist for pawn, horse, rook and
//! cannon only; they are authored from Red's viewpoint and Black reads
//! them mirrored through the board center.

use crate::board::Board;
use crate::move_gen::is_in_check;
use crate::types::{PieceColor, PieceType, Position, BOARD_COLS, BOARD_ROWS};

/// Material value of a piece kind.
pub fn material_value(piece_type: PieceType) -> i32 {
    match piece_type {
        PieceType::King => 10_000,
        PieceType::Rook => 600,
        PieceType::Cannon => 285,
        PieceType::Horse => 270,
        PieceType::Elephant => 120,
        PieceType::Advisor => 120,
        PieceType::Pawn => 30,
    }
}

#[rustfmt::skip]
const PAWN_TABLE: [[i32; BOARD_COLS]; BOARD_ROWS] = [
    [ 0,  0,  0,  0,  0,  0,  0,  0,  0],
    [ 0,  0,  0,  0,  0,  0,  0,  0,  0],
    [ 0,  0,  0,  0,  0,  0,  0,  0,  0],
    [40,  0, 40,  0, 50,  0, 40,  0, 40],
    [50, 10, 50, 20, 60, 20, 50, 10, 50],
    [ 0,  0,  0,  0,  0,  0,  0,  0,  0],
    [10,  0, 10,  0, 15,  0, 10,  0, 10],
    [ 0,  0,  0,  0,  0,  0,  0,  0,  0],
    [ 0,  0,  0,  0,  0,  0,  0,  0,  0],
    [ 0,  0,  0,  0,  0,  0,  0,  0,  0],
];

#[rustfmt::skip]
const HORSE_TABLE: [[i32; BOARD_COLS]; BOARD_ROWS] = [
    [ 0,  0,  0,  0,  0,  0,  0,  0,  0],
    [ 0,  0,  0,  0,  0,  0,  0,  0,  0],
    [ 0,  0,  0,  0,  0,  0,  0,  0,  0],
    [ 0,  0, 10, 20, 10, 20, 10,  0,  0],
    [ 0,  0, 20, 30, 30, 30, 20,  0,  0],
    [ 0,  0, 20, 30, 30, 30, 20,  0,  0],
    [ 0,  0, 10, 20, 10, 20, 10,  0,  0],
    [ 0,  0,  0,  0,  0,  0,  0,  0,  0],
    [ 0,  0,  0,  0,  0,  0,  0,  0,  0],
    [ 0,  0,  0,  0,  0,  0,  0,  0,  0],
];

#[rustfmt::skip]
const ROOK_TABLE: [[i32; BOARD_COLS]; BOARD_ROWS] = [
    [10, 10, 10, 20, 20, 20, 10, 10, 10],
    [20, 30, 30, 40, 40, 40, 30, 30, 20],
    [10, 20, 20, 30, 30, 30, 20, 20, 10],
    [10, 20, 20, 30, 30, 30, 20, 20, 10],
    [ 0, 10, 10, 20, 20, 20, 10, 10,  0],
    [ 0, 10, 10, 20, 20, 20, 10, 10,  0],
    [10, 20, 20, 30, 30, 30, 20, 20, 10],
    [10, 20, 20, 30, 30, 30, 20, 20, 10],
    [20, 30, 30, 40, 40, 40, 30, 30, 20],
    [10, 10, 10, 20, 20, 20, 10, 10, 10],
];

#[rustfmt::skip]
const CANNON_TABLE: [[i32; BOARD_COLS]; BOARD_ROWS] = [
    [ 0,  0, 10,  0,  0,  0, 10,  0,  0],
    [ 0,  0,  0,  0,  0,  0,  0,  0,  0],
    [10, 10, 20, 20, 20, 20, 20, 10, 10],
    [10, 20, 30, 30, 30, 30, 30, 20, 10],
    [10, 20, 30, 30, 40, 30, 30, 20, 10],
    [10, 20, 30, 30, 40, 30, 30, 20, 10],
    [10, 20, 30, 30, 30, 30, 30, 20, 10],
    [10, 10, 20, 20, 20, 20, 20, 10, 10],
    [ 0,  0,  0,  0,  0,  0,  0,  0,  0],
    [ 0,  0, 10,  0,  0,  0, 10,  0,  0],
];

/// Positional bonus for a piece standing on `pos`. Black indexes the Red
/// tables at the mirrored cell (9 - row, 8 - col).
fn position_bonus(piece_type: PieceType, pos: Position, color: PieceColor) -> i32 {
    let (row, col) = match color {
        PieceColor::Red => (pos.row as usize, pos.col as usize),
        PieceColor::Black => (9 - pos.row as usize, 8 - pos.col as usize),
    };
    match piece_type {
        PieceType::Pawn => PAWN_TABLE[row][col],
        PieceType::Horse => HORSE_TABLE[row][col],
        PieceType::Rook => ROOK_TABLE[row][col],
        PieceType::Cannon => CANNON_TABLE[row][col],
        _ => 0,
    }
}

/// Static evaluation of `board` for `perspective`: positive when that side
/// stands better. After material and position are summed, being able to
/// keep the opponent in check is worth 50 points and standing in check
/// costs the same.
pub fn evaluate(board: &Board, perspective: PieceColor) -> i32 {
    let mut score = 0;
    for (pos, piece) in board.pieces() {
        let value =
            material_value(piece.piece_type) + position_bonus(piece.piece_type, pos, piece.color);
        if piece.color == perspective {
            score += value;
        } else {
            score -= value;
        }
    }

    if is_in_check(board, perspective.opponent()) {
        score += 50;
    }
    if is_in_check(board, perspective) {
        score -= 50;
    }
    score
}
