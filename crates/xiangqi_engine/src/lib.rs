//! Xiangqi (Chinese Chess) rules engine and search.
//!
//! Pure, side-effect-free computations over an explicit board value: piece
//! movement and legality, check and checkmate detection, static evaluation,
//! and a fixed-depth minimax search with alpha-beta pruning. The crate is
//! shared by a local turn-taking UI, an authoritative multiplayer server
//! that re-validates every client move, and the background search worker in
//! `xiangqi-ai-service`. Nothing here performs I/O or holds global state, so
//! every function is safe to call concurrently on independent board values.
//!
//! Coordinates are (row, col) with row 0 as Black's back rank and row 9 as
//! Red's. Red moves first.

pub mod board;
pub mod error;
pub mod evaluation;
pub mod move_gen;
pub mod search;
pub mod status;
pub mod types;

pub use board::{in_bounds, Board};
pub use error::{MoveError, MoveResult};
pub use evaluation::evaluate;
pub use move_gen::{all_legal_moves, is_in_check, kings_facing, legal_moves, raw_moves};
pub use search::{find_best_move, find_best_move_with, Difficulty, SearchToken, MATE_SCORE};
pub use status::{is_checkmate, status_after_move, validate_move};
pub use types::{GameStatus, Move, Piece, PieceColor, PieceType, Position, BOARD_COLS, BOARD_ROWS};
