//! Minimax worst-case calculation for strike/ball feedback
//!
//! Given a probe and set of candidates, computes the maximum remaining
//! candidates for any possible feedback.

use crate::core::{Code, Feedback};
use rustc_hash::FxHashMap;

/// Strike and ball both stay below 10, so `strike * 10 + ball` fits
const BUCKETS: usize = 100;

/// Calculate the maximum remaining candidates for a probe
///
/// Returns the worst-case number of remaining candidates after this probe.
///
/// # Strategy
/// For each possible feedback that could result from this probe:
/// - Count how many candidates would produce that feedback
/// - Return the maximum count (worst case)
///
/// # Examples
/// ```
/// use baseball_solver::core::{Scale, validate_code};
/// use baseball_solver::solver::minimax::calculate_max_remaining;
///
/// let scale = Scale::new(3).unwrap();
/// let probe = validate_code("012", scale).unwrap();
/// let candidates = vec![
///     validate_code("012", scale).unwrap(),
///     validate_code("345", scale).unwrap(),
/// ];
///
/// assert_eq!(calculate_max_remaining(&probe, &candidates), 1);
/// ```
#[must_use]
pub fn calculate_max_remaining(probe: &Code, candidates: &[Code]) -> usize {
    // Array histogram: this runs |universe| times per turn
    let mut counts = [0usize; BUCKETS];
    for candidate in candidates {
        counts[Feedback::score(probe, candidate).bucket()] += 1;
    }
    counts.into_iter().max().unwrap_or(0)
}

/// Group candidates by the feedback they produce with the probe
///
/// Slower than `calculate_max_remaining` but keeps the feedback keys, which
/// the analysis views display.
#[must_use]
pub fn group_by_feedback(probe: &Code, candidates: &[Code]) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let feedback = Feedback::score(probe, candidate);
        *counts.entry(feedback).or_insert(0) += 1;
    }

    counts
}
