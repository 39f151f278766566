//! Probe analysis command
//!
//! Shows how a single code partitions the full universe by feedback.

use crate::core::{Code, Feedback, Scale, ValidationError, validate_code};
use crate::solver::Universe;
use crate::solver::minimax::group_by_feedback;

/// Result of analyzing a probe
pub struct AnalysisResult {
    pub code: Code,
    /// Feedback groups ordered by strikes, then balls
    pub partitions: Vec<(Feedback, usize)>,
    pub worst_case: usize,
    pub expected_remaining: f64,
    pub total_candidates: usize,
}

/// Analyze how `code` splits every code of the scale
///
/// # Errors
///
/// Returns the validation error when `code` is not a code of the scale.
pub fn analyze_code(code: &str, scale: Scale) -> Result<AnalysisResult, ValidationError> {
    let probe = validate_code(code.trim(), scale)?;
    let universe = Universe::generate(scale);

    let mut partitions: Vec<(Feedback, usize)> =
        group_by_feedback(&probe, universe.as_slice()).into_iter().collect();
    partitions.sort_unstable();

    let total_candidates = universe.len();
    let worst_case = partitions.iter().map(|&(_, n)| n).max().unwrap_or(0);
    // Chance of landing in a group times its size
    let expected_remaining = partitions
        .iter()
        .map(|&(_, n)| (n * n) as f64)
        .sum::<f64>()
        / total_candidates as f64;

    Ok(AnalysisResult {
        code: probe,
        partitions,
        worst_case,
        expected_remaining,
        total_candidates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_opening() {
        let result = analyze_code("0123", Scale::default()).unwrap();

        assert_eq!(result.total_candidates, 5040);
        assert_eq!(
            result.partitions.iter().map(|&(_, n)| n).sum::<usize>(),
            5040
        );
        assert_eq!(result.worst_case, 1440);
        assert!(result.partitions.contains(&(Feedback::new(4, 0), 1)));
        assert!(result.partitions.contains(&(Feedback::new(0, 0), 360)));
    }

    #[test]
    fn partitions_are_sorted() {
        let result = analyze_code("987", Scale::new(3).unwrap()).unwrap();
        assert!(result.partitions.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn expected_remaining_is_bounded() {
        let result = analyze_code("4567", Scale::default()).unwrap();
        assert!(result.expected_remaining >= 1.0);
        assert!(result.expected_remaining <= result.worst_case as f64);
    }

    #[test]
    fn analyze_invalid_code() {
        assert!(analyze_code("0000", Scale::default()).is_err());
        assert!(analyze_code("012", Scale::default()).is_err());
    }
}
