//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! Every entry point is a pure function of its arguments; searching the
//! same board at the same depth always returns the same move. The search
//! probes checkmate exhaustively at every node rather than tracking checks
//! incrementally, trading speed for rule-level simplicity.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::evaluation::evaluate;
use crate::move_gen::all_legal_moves;
use crate::status::is_checkmate;
use crate::types::{Move, PieceColor, PieceType};

/// Base score of a checkmated position. The remaining search depth at the
/// node where the mate is seen is added on top, so of two mating lines the
/// one detected with more depth in hand scores higher.
pub const MATE_SCORE: i32 = 99_999;

/// Search depth presets for the AI opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Plies searched ahead at this difficulty.
    pub fn search_depth(self) -> u32 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
        }
    }
}

/// Generation token for cooperative cancellation.
///
/// A search remembers the sequence number it was started for; once the
/// shared latest-sequence counter moves past it, the search is superseded
/// and unwinds at the next sibling-move boundary. Its result must then be
/// discarded by the caller.
#[derive(Debug, Clone)]
pub struct SearchToken {
    latest: Arc<AtomicU64>,
    sequence: u64,
}

impl SearchToken {
    /// Token tied to `sequence` under the shared `latest` counter.
    pub fn new(latest: Arc<AtomicU64>, sequence: u64) -> SearchToken {
        SearchToken { latest, sequence }
    }

    /// A token that is never superseded, for plain synchronous searches.
    pub fn never() -> SearchToken {
        SearchToken {
            latest: Arc::new(AtomicU64::new(0)),
            sequence: 0,
        }
    }

    /// True once a newer sequence has been issued.
    #[inline]
    pub fn is_superseded(&self) -> bool {
        self.latest.load(Ordering::Relaxed) != self.sequence
    }
}

/// Capture priority for move ordering, most valuable victim first.
fn capture_priority(piece_type: PieceType) -> i32 {
    match piece_type {
        PieceType::King => 6,
        PieceType::Rook => 5,
        PieceType::Cannon => 4,
        PieceType::Horse => 3,
        PieceType::Elephant => 2,
        PieceType::Advisor => 1,
        PieceType::Pawn => 0,
    }
}

fn move_priority(mv: &Move) -> i32 {
    match mv.captured {
        Some(piece) => capture_priority(piece.piece_type),
        None => -1,
    }
}

/// Orders moves so the most valuable captures are searched first. The sort
/// is stable: moves of equal priority keep their generation order, which
/// is what makes tie-breaking deterministic.
fn order_moves(moves: &mut [Move]) {
    moves.sort_by(|a, b| move_priority(b).cmp(&move_priority(a)));
}

fn minimax(
    board: &Board,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    perspective: PieceColor,
    to_move: PieceColor,
    token: &SearchToken,
) -> i32 {
    let opponent = to_move.opponent();

    // The mate probe runs before the depth gate so a mate on the horizon
    // is still scored as a mate, not as a static evaluation.
    if is_checkmate(board, to_move) {
        let mate = MATE_SCORE + depth as i32;
        return if maximizing { -mate } else { mate };
    }

    if depth == 0 {
        return evaluate(board, perspective);
    }

    let mut moves = all_legal_moves(board, to_move);
    if moves.is_empty() {
        return evaluate(board, perspective);
    }
    order_moves(&mut moves);

    if maximizing {
        let mut max_eval = i32::MIN;
        for mv in &moves {
            if token.is_superseded() {
                break;
            }
            let next = board.apply_move(mv.from, mv.to);
            let score = minimax(&next, depth - 1, alpha, beta, false, perspective, opponent, token);
            max_eval = max_eval.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for mv in &moves {
            if token.is_superseded() {
                break;
            }
            let next = board.apply_move(mv.from, mv.to);
            let score = minimax(&next, depth - 1, alpha, beta, true, perspective, opponent, token);
            min_eval = min_eval.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}

/// Picks the best move for `color`, searching `depth` plies ahead.
///
/// Deterministic: when several moves score equally the first one in
/// capture-ordered generation order wins. Returns `None` when `color` has
/// no legal moves. A depth of 0 degenerates to a one-ply greedy pick.
pub fn find_best_move(board: &Board, color: PieceColor, depth: u32) -> Option<Move> {
    find_best_move_with(board, color, depth, &SearchToken::never())
}

/// [`find_best_move`] with a cancellation token. The token is polled
/// between sibling moves at every node; a superseded search stops early
/// and whatever it returns must be discarded.
pub fn find_best_move_with(
    board: &Board,
    color: PieceColor,
    depth: u32,
    token: &SearchToken,
) -> Option<Move> {
    let opponent = color.opponent();
    let mut moves = all_legal_moves(board, color);
    order_moves(&mut moves);

    let mut best_move = None;
    let mut best_score = i32::MIN;
    for mv in moves {
        if token.is_superseded() {
            break;
        }
        let next = board.apply_move(mv.from, mv.to);
        // Each root move gets a fresh full window; only the strictly
        // better score replaces the incumbent.
        let score = minimax(
            &next,
            depth.saturating_sub(1),
            i32::MIN,
            i32::MAX,
            false,
            color,
            opponent,
            token,
        );
        if score > best_score {
            best_score = score;
            best_move = Some(mv);
        }
    }
    best_move
}
