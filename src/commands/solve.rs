//! Code solving command
//!
//! Plays Autoplay toward a given secret and returns the solution path.

use crate::core::{Scale, ValidationError};
use crate::session::{Mode, Narration, Outcome, SolverConfig, SolverSession, Turn};
use std::time::{Duration, Instant};

/// Configuration for solving a code
pub struct SolveConfig {
    pub secret: String,
    pub scale: Scale,
    pub solver: SolverConfig,
}

impl SolveConfig {
    #[must_use]
    pub fn new(secret: String, scale: Scale) -> Self {
        Self {
            secret,
            scale,
            solver: SolverConfig::default(),
        }
    }
}

/// Result of solving a code
pub struct SolveResult {
    pub secret: String,
    pub outcome: Outcome,
    pub steps: Vec<Turn>,
    pub narration: Vec<Narration>,
    pub duration: Duration,
}

impl SolveResult {
    #[must_use]
    pub const fn success(&self) -> bool {
        self.outcome.is_solved()
    }
}

/// Solve a specific secret with the engine playing both sides
///
/// # Errors
///
/// Returns the validation error when the secret is not a code of the scale.
pub fn solve_code(config: SolveConfig) -> Result<SolveResult, ValidationError> {
    let start = Instant::now();
    let mut session = SolverSession::with_config(
        config.scale,
        Mode::Autoplay,
        Some(&config.secret),
        config.solver,
    );
    let narration: Vec<Narration> = session.run(|| false).collect();

    let outcome = match session.outcome() {
        Some(Outcome::Invalid(err)) => return Err(err.clone()),
        Some(outcome) => outcome.clone(),
        // A stream that never stops can only pause for input, which Autoplay never needs
        None => Outcome::Cancelled,
    };

    Ok(SolveResult {
        secret: config.secret,
        outcome,
        steps: session.history().to_vec(),
        narration,
        duration: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scale(n: usize) -> Scale {
        Scale::new(n).unwrap()
    }

    #[test]
    fn solve_code_succeeds() {
        let result = solve_code(SolveConfig::new("3917".to_string(), scale(4))).unwrap();

        assert!(result.success());
        assert!(!result.steps.is_empty());
        assert_eq!(result.steps.last().unwrap().guess.to_string(), "3917");
    }

    #[test]
    fn solve_records_history() {
        let result = solve_code(SolveConfig::new("8046".to_string(), scale(4))).unwrap();

        for step in &result.steps {
            let (before, after) = step.candidates.unwrap();
            assert!(after <= before);
        }
        assert!(result.narration.last().unwrap().is_terminal());
    }

    #[test]
    fn solve_invalid_secret_returns_error() {
        let result = solve_code(SolveConfig::new("1231".to_string(), scale(4)));
        assert!(matches!(result, Err(ValidationError::DuplicateDigit(_))));
    }

    #[test]
    fn solve_with_turn_limit() {
        let mut config = SolveConfig::new("7654".to_string(), scale(4));
        config.solver = config.solver.with_max_turns(2);

        let result = solve_code(config).unwrap();

        assert!(result.steps.len() <= 2);
        if !result.success() {
            assert_eq!(result.outcome, Outcome::TurnLimitExceeded { limit: 2 });
        }
    }

    #[test]
    fn solve_opening_secret_in_one() {
        let result = solve_code(SolveConfig::new("012".to_string(), scale(3))).unwrap();
        assert_eq!(result.steps.len(), 1);
        assert!(result.success());
    }
}
