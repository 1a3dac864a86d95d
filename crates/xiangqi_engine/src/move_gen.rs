//! Piece movement rules and the legality filter.
//!
//! Pure functions with no side effects. `raw_moves` is bare geometry;
//! `legal_moves` additionally rejects moves that leave the mover's own king
//! in check or the two kings facing each other on an open file.
//!
//! Probe order inside each generator is fixed (up, down, left, right, and
//! left before right for pawn sidesteps). Together with the stable capture
//! sort in [`crate::search`] it decides which of two equally scored moves
//! the search picks, so it must not be reordered.

use crate::board::{in_bounds, Board};
use crate::types::{Move, Piece, PieceColor, PieceType, Position};

const PALACE_COL_MIN: i8 = 3;
const PALACE_COL_MAX: i8 = 5;

/// Palace row span for `color`: rows 7..=9 for Red, 0..=2 for Black.
#[inline]
fn palace_rows(color: PieceColor) -> (i8, i8) {
    match color {
        PieceColor::Red => (7, 9),
        PieceColor::Black => (0, 2),
    }
}

#[inline]
fn in_palace(color: PieceColor, row: i8, col: i8) -> bool {
    let (min_row, max_row) = palace_rows(color);
    row >= min_row && row <= max_row && col >= PALACE_COL_MIN && col <= PALACE_COL_MAX
}

/// Elephant territory: the piece may never cross the river, enforced on
/// the destination row only.
#[inline]
fn own_side_row(color: PieceColor, row: i8) -> bool {
    match color {
        PieceColor::Red => row >= 5,
        PieceColor::Black => row <= 4,
    }
}

/// In bounds and empty.
#[inline]
fn is_free(board: &Board, row: i8, col: i8) -> bool {
    in_bounds(row, col) && board.cell(row, col).is_none()
}

/// Push `(row, col)` when it is on the board and not held by `color`.
#[inline]
fn push_step(board: &Board, color: PieceColor, row: i8, col: i8, moves: &mut Vec<Position>) {
    if !in_bounds(row, col) {
        return;
    }
    match board.cell(row, col) {
        Some(piece) if piece.color == color => {}
        _ => moves.push(Position::new(row as u8, col as u8)),
    }
}

/// One orthogonal step, confined to the palace.
fn king_moves(board: &Board, pos: Position, color: PieceColor, moves: &mut Vec<Position>) {
    let (row, col) = (pos.row as i8, pos.col as i8);
    for (dr, dc) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
        let (r, c) = (row + dr, col + dc);
        if in_palace(color, r, c) {
            push_step(board, color, r, c, moves);
        }
    }
}

/// One diagonal step, confined to the palace.
fn advisor_moves(board: &Board, pos: Position, color: PieceColor, moves: &mut Vec<Position>) {
    let (row, col) = (pos.row as i8, pos.col as i8);
    for (dr, dc) in [(-1, -1), (-1, 1), (1, -1), (1, 1)] {
        let (r, c) = (row + dr, col + dc);
        if in_palace(color, r, c) {
            push_step(board, color, r, c, moves);
        }
    }
}

/// Two diagonal steps on its own side of the river, blocked when the
/// intervening diagonal cell (the "eye") is occupied.
fn elephant_moves(board: &Board, pos: Position, color: PieceColor, moves: &mut Vec<Position>) {
    let (row, col) = (pos.row as i8, pos.col as i8);
    const STEPS: [(i8, i8); 4] = [(-2, -2), (-2, 2), (2, -2), (2, 2)];
    const EYES: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

    for i in 0..STEPS.len() {
        let (dr, dc) = STEPS[i];
        let (er, ec) = EYES[i];
        let (r, c) = (row + dr, col + dc);
        if own_side_row(color, r) && in_bounds(r, c) && is_free(board, row + er, col + ec) {
            push_step(board, color, r, c, moves);
        }
    }
}

/// One orthogonal step then one diagonal step outward. Each of the four
/// base directions is blocked when its orthogonal "leg" cell is occupied.
fn horse_moves(board: &Board, pos: Position, color: PieceColor, moves: &mut Vec<Position>) {
    let (row, col) = (pos.row as i8, pos.col as i8);
    // (leg, two destinations reached over that leg)
    const PATTERNS: [((i8, i8), [(i8, i8); 2]); 4] = [
        ((-1, 0), [(-2, -1), (-2, 1)]),
        ((1, 0), [(2, -1), (2, 1)]),
        ((0, -1), [(-1, -2), (1, -2)]),
        ((0, 1), [(-1, 2), (1, 2)]),
    ];

    for ((leg_r, leg_c), steps) in PATTERNS {
        if !is_free(board, row + leg_r, col + leg_c) {
            continue;
        }
        for (dr, dc) in steps {
            push_step(board, color, row + dr, col + dc, moves);
        }
    }
}

/// Slides orthogonally until blocked; the first occupied cell is a capture
/// when it holds an enemy piece.
fn rook_moves(board: &Board, pos: Position, color: PieceColor, moves: &mut Vec<Position>) {
    let (row, col) = (pos.row as i8, pos.col as i8);
    for (dr, dc) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
        let (mut r, mut c) = (row + dr, col + dc);
        while in_bounds(r, c) {
            match board.cell(r, c) {
                None => moves.push(Position::new(r as u8, c as u8)),
                Some(piece) => {
                    if piece.color != color {
                        moves.push(Position::new(r as u8, c as u8));
                    }
                    break;
                }
            }
            r += dr;
            c += dc;
        }
    }
}

/// Slides like a rook while the path is empty, but captures only by
/// jumping exactly one screen piece of either color.
fn cannon_moves(board: &Board, pos: Position, color: PieceColor, moves: &mut Vec<Position>) {
    let (row, col) = (pos.row as i8, pos.col as i8);
    for (dr, dc) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
        let (mut r, mut c) = (row + dr, col + dc);
        let mut jumped = false;
        while in_bounds(r, c) {
            match board.cell(r, c) {
                None => {
                    if !jumped {
                        moves.push(Position::new(r as u8, c as u8));
                    }
                }
                Some(piece) => {
                    if jumped {
                        if piece.color != color {
                            moves.push(Position::new(r as u8, c as u8));
                        }
                        break;
                    }
                    jumped = true;
                }
            }
            r += dr;
            c += dc;
        }
    }
}

/// One step forward; after crossing the river also one step sideways,
/// left probed before right. Never backward.
fn pawn_moves(board: &Board, pos: Position, color: PieceColor, moves: &mut Vec<Position>) {
    let (row, col) = (pos.row as i8, pos.col as i8);
    let forward = match color {
        PieceColor::Red => -1,
        PieceColor::Black => 1,
    };
    push_step(board, color, row + forward, col, moves);

    let crossed = match color {
        PieceColor::Red => row <= 4,
        PieceColor::Black => row >= 5,
    };
    if crossed {
        push_step(board, color, row, col - 1, moves);
        push_step(board, color, row, col + 1, moves);
    }
}

/// Movement geometry for the piece at `pos`, ignoring check entirely.
/// Empty and out-of-range squares yield an empty list.
pub fn raw_moves(board: &Board, pos: Position) -> Vec<Position> {
    let piece = match board.piece_at(pos) {
        Some(piece) => piece,
        None => return Vec::new(),
    };

    let mut moves = Vec::new();
    match piece.piece_type {
        PieceType::King => king_moves(board, pos, piece.color, &mut moves),
        PieceType::Advisor => advisor_moves(board, pos, piece.color, &mut moves),
        PieceType::Elephant => elephant_moves(board, pos, piece.color, &mut moves),
        PieceType::Horse => horse_moves(board, pos, piece.color, &mut moves),
        PieceType::Rook => rook_moves(board, pos, piece.color, &mut moves),
        PieceType::Cannon => cannon_moves(board, pos, piece.color, &mut moves),
        PieceType::Pawn => pawn_moves(board, pos, piece.color, &mut moves),
    }
    moves
}

/// True when the two kings stand on the same file with nothing between
/// them, the configuration the flying-general rule forbids.
pub fn kings_facing(board: &Board) -> bool {
    let red = match board.king_position(PieceColor::Red) {
        Some(pos) => pos,
        None => return false,
    };
    let black = match board.king_position(PieceColor::Black) {
        Some(pos) => pos,
        None => return false,
    };
    if red.col != black.col {
        return false;
    }

    let top = red.row.min(black.row);
    let bottom = red.row.max(black.row);
    for row in top + 1..bottom {
        if board.piece_at(Position::new(row, red.col)).is_some() {
            return false;
        }
    }
    true
}

/// Whether `color`'s king is attacked by any enemy piece's raw move.
/// A board with that king missing reports as in check, which lets
/// capture-the-king lines resolve uniformly during search.
pub fn is_in_check(board: &Board, color: PieceColor) -> bool {
    let king = match board.king_position(color) {
        Some(pos) => pos,
        None => return true,
    };

    board
        .pieces()
        .filter(|(_, piece)| piece.color != color)
        .any(|(pos, _)| raw_moves(board, pos).contains(&king))
}

/// Legal destinations for the piece at `pos`: its raw geometry minus every
/// move that leaves the kings facing or the mover's own king in check.
/// Each candidate is simulated on a scratch board; no shortcuts.
pub fn legal_moves(board: &Board, pos: Position) -> Vec<Position> {
    let piece = match board.piece_at(pos) {
        Some(piece) => piece,
        None => return Vec::new(),
    };

    raw_moves(board, pos)
        .into_iter()
        .filter(|&to| {
            let next = board.apply_move(pos, to);
            !kings_facing(&next) && !is_in_check(&next, piece.color)
        })
        .collect()
}

/// Every legal move for `color`, scanned in row-major board order and
/// enriched with the piece currently on the destination.
pub fn all_legal_moves(board: &Board, color: PieceColor) -> Vec<Move> {
    let mut moves = Vec::new();
    for (from, piece) in board.pieces() {
        if piece.color != color {
            continue;
        }
        for to in legal_moves(board, from) {
            moves.push(Move {
                from,
                to,
                captured: board.piece_at(to),
            });
        }
    }
    moves
}
