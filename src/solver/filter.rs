//! Candidate narrowing
//!
//! If `c` were the secret, replaying the last guess against it must reproduce
//! exactly the feedback that was observed. Every code failing that test is
//! inconsistent with the evidence and is dropped.

use crate::core::{Code, Feedback};
use rayon::prelude::*;

/// Keep the candidates that would have produced `observed` for `guess`
///
/// Returns a new set in input order. An empty result means the
/// observations contradict each other.
///
/// # Examples
/// ```
/// use baseball_solver::core::{Feedback, Scale, validate_code};
/// use baseball_solver::solver::{Universe, filter_candidates};
///
/// let scale = Scale::new(3).unwrap();
/// let universe = Universe::generate(scale);
/// let guess = validate_code("012", scale).unwrap();
///
/// let remaining = filter_candidates(universe.as_slice(), &guess, Feedback::new(3, 0));
/// assert_eq!(remaining, vec![guess]);
/// ```
#[must_use]
pub fn filter_candidates(candidates: &[Code], guess: &Code, observed: Feedback) -> Vec<Code> {
    candidates
        .par_iter()
        .filter(|candidate| Feedback::score(guess, candidate) == observed)
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Scale, validate_code};
    use crate::solver::Universe;

    fn setup(n: usize) -> (Scale, Universe) {
        let scale = Scale::new(n).unwrap();
        (scale, Universe::generate(scale))
    }

    #[test]
    fn filter_never_removes_the_secret() {
        let (scale, universe) = setup(4);
        let secret = validate_code("5079", scale).unwrap();

        let mut candidates = universe.as_slice().to_vec();
        for guess_text in ["0123", "4567", "8901", "5097"] {
            let guess = validate_code(guess_text, scale).unwrap();
            let observed = Feedback::score(&guess, &secret);
            candidates = filter_candidates(&candidates, &guess, observed);
            assert!(candidates.contains(&secret), "secret lost after {guess}");
        }
    }

    #[test]
    fn filter_is_monotone_and_converges() {
        let (scale, universe) = setup(3);
        let secret = validate_code("742", scale).unwrap();

        let mut candidates = universe.as_slice().to_vec();
        let mut sizes = vec![candidates.len()];
        for guess in universe.iter().step_by(37) {
            let observed = Feedback::score(guess, &secret);
            candidates = filter_candidates(&candidates, guess, observed);
            sizes.push(candidates.len());
        }
        let observed = Feedback::score(&secret, &secret);
        candidates = filter_candidates(&candidates, &secret, observed);

        assert!(sizes.windows(2).all(|w| w[1] <= w[0]));
        assert_eq!(candidates, vec![secret]);
    }

    #[test]
    fn filter_keeps_order() {
        let (scale, universe) = setup(3);
        let guess = validate_code("012", scale).unwrap();
        let remaining = filter_candidates(universe.as_slice(), &guess, Feedback::new(0, 0));

        let mut sorted = remaining.clone();
        sorted.sort();
        assert_eq!(remaining, sorted);
        // Codes built from the seven digits 3..=9
        assert_eq!(remaining.len(), 7 * 6 * 5);
    }

    #[test]
    fn impossible_feedback_empties_the_set() {
        let (scale, universe) = setup(4);
        let guess = validate_code("0123", scale).unwrap();

        assert!(filter_candidates(universe.as_slice(), &guess, Feedback::new(3, 1)).is_empty());
        assert!(filter_candidates(universe.as_slice(), &guess, Feedback::new(5, 0)).is_empty());
    }

    #[test]
    fn successive_filters_keep_the_secret() {
        let (scale, universe) = setup(4);
        let secret = validate_code("3810", scale).unwrap();

        let mut remaining = universe.as_slice().to_vec();
        for text in ["0123", "4567", "1830"] {
            let guess = validate_code(text, scale).unwrap();
            let before = remaining.len();
            remaining = filter_candidates(&remaining, &guess, Feedback::score(&guess, &secret));
            assert!(remaining.len() < before);
            assert!(remaining.contains(&secret));
        }
        assert!(remaining.is_sorted());
    }
}
