//! Benchmark command
//!
//! Plays Autoplay against many secrets and collects turn statistics.

use crate::core::{Code, Scale};
use crate::session::{Mode, Outcome, SolverConfig, SolverSession};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rand::seq::IteratorRandom;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub solved: usize,
    pub total_turns: usize,
    pub average_turns: f64,
    pub min_turns: usize,
    pub max_turns: usize,
    /// Turns needed, for solved games only
    pub distribution: BTreeMap<usize, usize>,
    /// Secrets that were not solved, with how each game ended
    pub failures: Vec<(Code, Outcome)>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Draw `count` distinct secrets (or every code, if fewer exist)
#[must_use]
pub fn random_secrets<R: Rng + ?Sized>(universe: &[Code], count: usize, rng: &mut R) -> Vec<Code> {
    let mut secrets = universe.iter().copied().choose_multiple(rng, count);
    secrets.sort_unstable();
    secrets
}

/// Run Autoplay once per secret
///
/// A progress bar is drawn on stderr when `show_progress` is set.
///
/// # Panics
///
/// Panics if the progress bar template is malformed.
pub fn run_benchmark(
    scale: Scale,
    secrets: &[Code],
    config: SolverConfig,
    show_progress: bool,
) -> BenchmarkResult {
    let pb = if show_progress {
        ProgressBar::new(secrets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("progress template is valid")
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut total_turns = 0;
    let mut min_turns = usize::MAX;
    let mut max_turns = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut failures = Vec::new();

    for (idx, secret) in secrets.iter().enumerate() {
        let text = secret.to_string();
        let mut session = SolverSession::with_config(scale, Mode::Autoplay, Some(&text), config);
        session.run(|| false).for_each(drop);

        match session.outcome() {
            Some(Outcome::Solved { turns, .. }) => {
                total_turns += turns;
                min_turns = min_turns.min(*turns);
                max_turns = max_turns.max(*turns);
                *distribution.entry(*turns).or_insert(0) += 1;
            }
            other => {
                let outcome = other.cloned().unwrap_or(Outcome::Cancelled);
                tracing::warn!(%secret, %outcome, "benchmark game not solved");
                failures.push((*secret, outcome));
            }
        }

        let solved = idx + 1 - failures.len();
        if idx % 10 == 0 && solved > 0 {
            pb.set_message(format!("Avg: {:.2}", total_turns as f64 / solved as f64));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let total_games = secrets.len();
    let solved = total_games - failures.len();

    BenchmarkResult {
        total_games,
        solved,
        total_turns,
        average_turns: if solved > 0 {
            total_turns as f64 / solved as f64
        } else {
            0.0
        },
        min_turns: if solved > 0 { min_turns } else { 0 },
        max_turns,
        distribution,
        failures,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::Universe;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn setup(n: usize) -> (Scale, Universe) {
        let scale = Scale::new(n).unwrap();
        (scale, Universe::generate(scale))
    }

    #[test]
    fn benchmark_runs() {
        let (scale, universe) = setup(4);
        let secrets = random_secrets(universe.as_slice(), 5, &mut StdRng::seed_from_u64(7));

        let result = run_benchmark(scale, &secrets, SolverConfig::default(), false);

        assert_eq!(result.total_games, 5);
        assert_eq!(result.solved, 5);
        assert!(result.failures.is_empty());
        assert!(result.min_turns >= 1);
        assert!(result.max_turns <= 10);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let (scale, universe) = setup(3);
        let secrets = random_secrets(universe.as_slice(), 20, &mut StdRng::seed_from_u64(1));

        let result = run_benchmark(scale, &secrets, SolverConfig::default(), false);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
        assert!(result.average_turns >= result.min_turns as f64);
        assert!(result.average_turns <= result.max_turns as f64);
    }

    #[test]
    fn benchmark_reports_failures() {
        let (scale, universe) = setup(4);
        let secrets = random_secrets(universe.as_slice(), 3, &mut StdRng::seed_from_u64(3))
            .into_iter()
            .filter(|s| s.to_string() != "0123")
            .collect::<Vec<_>>();
        let config = SolverConfig::default().with_max_turns(1);

        let result = run_benchmark(scale, &secrets, config, false);

        assert_eq!(result.solved, 0);
        assert_eq!(result.failures.len(), secrets.len());
        assert!(
            result
                .failures
                .iter()
                .all(|(_, o)| *o == Outcome::TurnLimitExceeded { limit: 1 })
        );
    }

    #[test]
    fn benchmark_empty_secret_list() {
        let (scale, _) = setup(3);
        let result = run_benchmark(scale, &[], SolverConfig::default(), false);

        assert_eq!(result.total_games, 0);
        assert_eq!(result.total_turns, 0);
        assert_eq!(result.min_turns, 0);
    }

    #[test]
    fn random_secrets_are_distinct() {
        let (_, universe) = setup(3);
        let secrets = random_secrets(universe.as_slice(), 50, &mut StdRng::seed_from_u64(9));

        assert_eq!(secrets.len(), 50);
        assert!(secrets.windows(2).all(|w| w[0] < w[1]));

        let all = random_secrets(universe.as_slice(), 10_000, &mut StdRng::seed_from_u64(9));
        assert_eq!(all.len(), universe.len());
    }
}
