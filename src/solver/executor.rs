//! Execution strategies for the guess search
//!
//! The minimax search is the same everywhere; executors only decide where it
//! runs and how often the caller's stop predicate gets a say.

use super::minimax::{Selection, select_best_guess};
use super::{CancelToken, SearchError, Universe};
use crate::core::Code;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

/// Default interval between stop-predicate checks while a worker searches
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs a guess search for the orchestrator
pub trait Executor {
    /// Search for the next guess, consulting `stop` at every suspension point
    ///
    /// # Errors
    /// `SearchError::Cancelled` when `stop` returned true, otherwise whatever
    /// the search itself reported.
    fn search(
        &self,
        universe: &Universe,
        candidates: &[Code],
        stop: &mut dyn FnMut() -> bool,
    ) -> Result<Selection, SearchError>;
}

/// Enum wrapper for all executor types
///
/// Allows runtime selection of the execution strategy while maintaining
/// static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutorType {
    /// Search on the calling thread
    Direct(DirectExecutor),
    /// Search on a worker thread, polling for the result
    Offloaded(OffloadedExecutor),
}

impl ExecutorType {
    /// Create an executor from its name
    ///
    /// Supported names: "direct", "offload". Defaults to offload if the name
    /// is unrecognized.
    #[must_use]
    pub fn from_name(name: &str, poll_interval: Duration) -> Self {
        match name {
            "direct" | "inline" => Self::Direct(DirectExecutor),
            _ => Self::Offloaded(OffloadedExecutor::new(poll_interval)),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Direct(_) => "direct",
            Self::Offloaded(_) => "offload",
        }
    }
}

impl Default for ExecutorType {
    fn default() -> Self {
        Self::Offloaded(OffloadedExecutor::default())
    }
}

impl Executor for ExecutorType {
    fn search(
        &self,
        universe: &Universe,
        candidates: &[Code],
        stop: &mut dyn FnMut() -> bool,
    ) -> Result<Selection, SearchError> {
        match self {
            Self::Direct(e) => e.search(universe, candidates, stop),
            Self::Offloaded(e) => e.search(universe, candidates, stop),
        }
    }
}

/// Runs the search on the caller's thread
///
/// The stop predicate is checked once up front; after that the search runs
/// to completion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectExecutor;

impl Executor for DirectExecutor {
    fn search(
        &self,
        universe: &Universe,
        candidates: &[Code],
        stop: &mut dyn FnMut() -> bool,
    ) -> Result<Selection, SearchError> {
        if stop() {
            return Err(SearchError::Cancelled);
        }
        select_best_guess(universe.as_slice(), candidates, &CancelToken::new())
    }
}

/// Runs the search on a dedicated worker thread
///
/// The worker receives its own copy of the candidates and a shared handle to
/// the immutable universe. The caller polls for the result every
/// `poll_interval`, checking the stop predicate before each wait. When it
/// fires the worker is abandoned, not joined; its token is flipped so it
/// winds down at the next probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffloadedExecutor {
    pub poll_interval: Duration,
}

impl OffloadedExecutor {
    #[must_use]
    pub const fn new(poll_interval: Duration) -> Self {
        Self { poll_interval }
    }
}

impl Default for OffloadedExecutor {
    fn default() -> Self {
        Self::new(DEFAULT_POLL_INTERVAL)
    }
}

impl Executor for OffloadedExecutor {
    fn search(
        &self,
        universe: &Universe,
        candidates: &[Code],
        stop: &mut dyn FnMut() -> bool,
    ) -> Result<Selection, SearchError> {
        // Not worth a thread
        if candidates.len() <= 2 {
            return select_best_guess(universe.as_slice(), candidates, &CancelToken::new());
        }

        let token = CancelToken::new();
        let (tx, rx) = mpsc::channel();
        let worker_universe = universe.clone();
        let worker_candidates = candidates.to_vec();
        let worker_token = token.clone();

        let spawned = thread::Builder::new()
            .name("guess-search".to_string())
            .spawn(move || {
                let result = select_best_guess(
                    worker_universe.as_slice(),
                    &worker_candidates,
                    &worker_token,
                );
                // The receiver is gone if the search was abandoned
                let _ = tx.send(result);
            });

        if let Err(err) = spawned {
            tracing::error!(%err, "failed to spawn search worker");
            return Err(SearchError::WorkerLost);
        }

        let started = Instant::now();
        let mut polls = 0usize;
        loop {
            if stop() {
                token.cancel();
                tracing::debug!(polls, elapsed = ?started.elapsed(), "search worker abandoned");
                return Err(SearchError::Cancelled);
            }

            match rx.recv_timeout(self.poll_interval) {
                Ok(result) => {
                    tracing::debug!(polls, elapsed = ?started.elapsed(), "search worker finished");
                    return result;
                }
                Err(RecvTimeoutError::Timeout) => polls += 1,
                Err(RecvTimeoutError::Disconnected) => return Err(SearchError::WorkerLost),
            }
        }
    }
}
