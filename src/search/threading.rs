//! Background search on a worker thread.
//!
//! The worker owns its own copy of the position and its own RNG, so nothing
//! mutable is shared with the caller. The result comes back over a channel
//! exactly once.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread::{self, JoinHandle};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::game_state::chess_types::GameState;
use crate::search::board_scoring::PieceSquareScorer;
use crate::search::minimax::{minimax_search, SearchConfig, SearchResult};

/// Handle to a search running on another thread.
#[derive(Debug)]
pub struct SearchHandle {
    receiver: Receiver<SearchResult>,
    worker: Option<JoinHandle<()>>,
    finished: Option<SearchResult>,
}

/// Start a search on `game_state` in a new thread. `seed` feeds the move
/// shuffler when `config.shuffle` is set.
pub fn spawn_search(game_state: GameState, config: SearchConfig, seed: u64) -> SearchHandle {
    let (sender, receiver) = mpsc::channel();

    let worker = thread::spawn(move || {
        let mut rng = StdRng::seed_from_u64(seed);
        let result = minimax_search(&game_state, &PieceSquareScorer, config, &mut rng);
        // The receiver may already be gone if the caller lost interest.
        let _ = sender.send(result);
    });

    SearchHandle {
        receiver,
        worker: Some(worker),
        finished: None,
    }
}

impl SearchHandle {
    /// Non-blocking poll. Returns the result once the worker has delivered
    /// it, and keeps returning it on later calls.
    pub fn try_result(&mut self) -> Result<Option<SearchResult>, String> {
        if self.finished.is_some() {
            return Ok(self.finished);
        }
        match self.receiver.try_recv() {
            Ok(result) => {
                self.finished = Some(result);
                self.join_worker()?;
                Ok(self.finished)
            }
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => {
                self.join_worker()?;
                Err("search worker stopped without a result".to_owned())
            }
        }
    }

    /// Block until the worker delivers its result.
    pub fn wait(mut self) -> Result<SearchResult, String> {
        if let Some(result) = self.finished {
            return Ok(result);
        }
        let result = self
            .receiver
            .recv()
            .map_err(|_| "search worker stopped without a result".to_owned());
        self.join_worker()?;
        result
    }

    fn join_worker(&mut self) -> Result<(), String> {
        match self.worker.take() {
            Some(worker) => worker
                .join()
                .map_err(|_| "search worker thread panicked".to_owned()),
            None => Ok(()),
        }
    }
}
