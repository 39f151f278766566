//! Minimax-based guess selection
//!
//! Every code of the universe is a legal probe, not only the live
//! candidates: a code that cannot be the secret may still split the
//! remaining candidates better.

use super::calculator::calculate_max_remaining;
use crate::core::Code;
use crate::solver::{CancelToken, SearchError};
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Outcome of one guess search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Chosen probe
    pub guess: Code,
    /// Largest feedback group the probe can leave behind
    pub worst_case: usize,
    /// Number of probes scored (0 when the search was skipped)
    pub evaluated: usize,
}

/// Select the probe minimizing the worst-case remaining candidates
///
/// - With two or fewer candidates the first one is returned without search:
///   either it is the secret, or the other one is confirmed next turn.
/// - Ties prefer probes that are themselves candidates (they might win
///   outright), then the probe seen first in universe order.
///
/// The token is checked before every probe, so a cancelled search stops
/// after the probes already in flight.
///
/// # Errors
/// - `SearchError::Exhausted` when there are no candidates
/// - `SearchError::Cancelled` when the token fires during the search
///
/// # Examples
/// ```
/// use baseball_solver::core::{Feedback, Scale};
/// use baseball_solver::solver::minimax::select_best_guess;
/// use baseball_solver::solver::{CancelToken, Universe, filter_candidates};
///
/// let scale = Scale::new(3).unwrap();
/// let universe = Universe::generate(scale);
/// let opening = universe.as_slice()[0];
/// let candidates = filter_candidates(universe.as_slice(), &opening, Feedback::new(1, 1));
///
/// let selection = select_best_guess(universe.as_slice(), &candidates, &CancelToken::new()).unwrap();
/// assert!(selection.worst_case < candidates.len());
/// ```
pub fn select_best_guess(
    universe: &[Code],
    candidates: &[Code],
    cancel: &CancelToken,
) -> Result<Selection, SearchError> {
    if candidates.len() <= 2 {
        return candidates
            .first()
            .map(|&guess| Selection {
                guess,
                worst_case: 1,
                evaluated: 0,
            })
            .ok_or(SearchError::Exhausted);
    }

    let live: FxHashSet<Code> = candidates.iter().copied().collect();

    // Key (worst case, not-a-candidate, position) reproduces the sequential
    // first-seen rule regardless of how rayon splits the work
    let best = universe
        .par_iter()
        .enumerate()
        .filter_map(|(index, probe)| {
            if cancel.is_cancelled() {
                return None;
            }
            let worst_case = calculate_max_remaining(probe, candidates);
            Some((worst_case, !live.contains(probe), index))
        })
        .min();

    if cancel.is_cancelled() {
        return Err(SearchError::Cancelled);
    }

    best.map(|(worst_case, _, index)| Selection {
        guess: universe[index],
        worst_case,
        evaluated: universe.len(),
    })
    .ok_or(SearchError::Exhausted)
}
