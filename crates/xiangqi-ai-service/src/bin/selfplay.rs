//! Engine-vs-engine self-play through the worker service.
//!
//! Drives a full game move by move, re-validating every worker answer the
//! way the authoritative server would. Handy for eyeballing search quality
//! and smoke-testing the whole stack from one terminal.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;

use xiangqi_ai_service::AiService;
use xiangqi_engine::{status_after_move, validate_move, Board, GameStatus, PieceColor};

#[derive(Parser, Debug)]
#[command(about = "Plays the xiangqi engine against itself through the AI worker")]
struct Args {
    /// Search depth in plies for both sides
    #[arg(long, default_value_t = 3)]
    depth: u32,

    /// Stop after this many plies if nobody has won
    #[arg(long, default_value_t = 200)]
    max_plies: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let mut service = AiService::spawn();
    let mut board = Board::initial();
    let mut to_move = PieceColor::Red;
    let mut status = GameStatus::InProgress;

    for ply in 1..=args.max_plies {
        service.submit(board, to_move, args.depth);
        let response = service
            .wait(Duration::from_secs(600))
            .context("Worker did not answer within ten minutes")?;
        let Some(proposed) = response.best_move else {
            bail!("{} has no legal move but the game is not over", to_move);
        };

        let mv = validate_move(&board, to_move, proposed.from, proposed.to)
            .with_context(|| format!("Worker proposed an illegal move at ply {}", ply))?;
        board = board.apply_move(mv.from, mv.to);

        match mv.captured {
            Some(piece) => info!(
                "Ply {} | {} plays {} -> {} taking {:?}",
                ply, to_move, mv.from, mv.to, piece.piece_type
            ),
            None => info!("Ply {} | {} plays {} -> {}", ply, to_move, mv.from, mv.to),
        }

        to_move = to_move.opponent();
        status = status_after_move(&board, to_move);
        if status != GameStatus::InProgress {
            info!("Game over at ply {} | Status: {:?}", ply, status);
            break;
        }
    }

    if status == GameStatus::InProgress {
        info!("No winner within {} plies", args.max_plies);
    }

    service.shutdown();
    Ok(())
}
