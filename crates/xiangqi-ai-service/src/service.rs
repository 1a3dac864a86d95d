//! The worker thread and its front-end handle.
//!
//! One thread owns the search loop. The handle keeps a monotonically
//! increasing sequence number in an atomic shared with the thread; the
//! number of the newest submitted request is the only one anybody answers.
//! Superseding a request cancels it at the next token poll inside the
//! search, so a deep search dies quickly once a newer board arrives.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, TryRecvError};
use tracing::{debug, info, warn};

use xiangqi_engine::{find_best_move_with, Board, PieceColor, SearchToken};

use crate::protocol::{SearchRequest, SearchResponse};

/// Handle to the search worker thread.
///
/// Submitting a request supersedes whatever is still in flight. Responses
/// to superseded requests are dropped, never delivered, so callers only
/// ever see the answer to their newest question.
pub struct AiService {
    requests: Sender<SearchRequest>,
    responses: Receiver<SearchResponse>,
    latest: Arc<AtomicU64>,
    next_sequence: u64,
    worker: JoinHandle<()>,
}

impl AiService {
    /// Starts the worker thread.
    pub fn spawn() -> AiService {
        let (request_tx, request_rx) = crossbeam_channel::unbounded::<SearchRequest>();
        let (response_tx, response_rx) = crossbeam_channel::unbounded::<SearchResponse>();
        let latest = Arc::new(AtomicU64::new(0));

        let worker_latest = Arc::clone(&latest);
        let worker = std::thread::spawn(move || worker_loop(request_rx, response_tx, worker_latest));

        AiService {
            requests: request_tx,
            responses: response_rx,
            latest,
            next_sequence: 0,
            worker,
        }
    }

    /// Submits a search and returns its sequence number. Any search still
    /// in flight is superseded the moment this stores the new number.
    pub fn submit(&mut self, board: Board, color: PieceColor, depth: u32) -> u64 {
        self.next_sequence += 1;
        let sequence = self.next_sequence;
        self.latest.store(sequence, Ordering::Relaxed);

        let request = SearchRequest {
            board,
            color,
            depth,
            sequence,
        };
        if self.requests.send(request).is_err() {
            warn!("[AI] Worker is gone | Seq: {} dropped", sequence);
        }
        sequence
    }

    /// Non-blocking poll for the answer to the newest request. Answers to
    /// older requests found in the channel are discarded.
    pub fn try_poll(&mut self) -> Option<SearchResponse> {
        loop {
            match self.responses.try_recv() {
                Ok(response) if response.sequence == self.next_sequence => return Some(response),
                Ok(stale) => {
                    debug!(
                        "[AI] Dropping stale response | Seq: {} | Latest: {}",
                        stale.sequence, self.next_sequence
                    );
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return None,
            }
        }
    }

    /// Blocks until the newest request is answered or `timeout` passes.
    pub fn wait(&mut self, timeout: Duration) -> Option<SearchResponse> {
        let deadline = Instant::now().checked_add(timeout)?;
        loop {
            match self.responses.recv_deadline(deadline) {
                Ok(response) if response.sequence == self.next_sequence => return Some(response),
                Ok(stale) => {
                    debug!(
                        "[AI] Dropping stale response | Seq: {} | Latest: {}",
                        stale.sequence, self.next_sequence
                    );
                }
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                    return None
                }
            }
        }
    }

    /// Cancels any in-flight search and joins the worker thread.
    pub fn shutdown(self) {
        self.latest.store(u64::MAX, Ordering::Relaxed);
        drop(self.requests);
        if self.worker.join().is_err() {
            warn!("[AI] Worker thread panicked before shutdown");
        }
    }
}

fn worker_loop(
    requests: Receiver<SearchRequest>,
    responses: Sender<SearchResponse>,
    latest: Arc<AtomicU64>,
) {
    while let Ok(request) = requests.recv() {
        let sequence = request.sequence;

        // A newer request may already be queued behind this one.
        if latest.load(Ordering::Relaxed) != sequence {
            debug!("[AI] Skipping superseded request | Seq: {}", sequence);
            continue;
        }

        info!(
            "[AI] Search started | Seq: {} | Color: {} | Depth: {}",
            sequence, request.color, request.depth
        );
        let token = SearchToken::new(Arc::clone(&latest), sequence);
        let best_move = find_best_move_with(&request.board, request.color, request.depth, &token);

        if token.is_superseded() {
            debug!("[AI] Search superseded mid-flight | Seq: {}", sequence);
            continue;
        }
        match &best_move {
            Some(mv) => info!(
                "[AI] Search complete | Seq: {} | Best: {} -> {}",
                sequence, mv.from, mv.to
            ),
            None => info!("[AI] Search complete | Seq: {} | No legal move", sequence),
        }

        if responses
            .send(SearchResponse {
                best_move,
                sequence,
            })
            .is_err()
        {
            break;
        }
    }
}
