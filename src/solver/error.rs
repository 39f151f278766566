//! Search failures

use thiserror::Error;

/// Why a guess search produced no guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The stop predicate fired; not a failure of the search itself
    #[error("search cancelled")]
    Cancelled,

    #[error("no candidates remain")]
    Exhausted,

    #[error("search worker stopped without answering")]
    WorkerLost,
}
