//! Session configuration

use crate::solver::ExecutorType;

/// Safety valve on the number of engine turns in one game
///
/// An information-optimal search never needs this many for the supported
/// scales; hitting it is reported as a terminal outcome.
pub const DEFAULT_MAX_TURNS: usize = 10;

/// Knobs for one solver session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Engine turns allowed before giving up (Attack mode is not limited)
    pub max_turns: usize,
    /// Open with `0123…` instead of searching the full universe on turn one
    pub fixed_opening: bool,
    /// Where the guess search runs
    pub executor: ExecutorType,
}

impl SolverConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_turns: DEFAULT_MAX_TURNS,
            fixed_opening: true,
            executor: ExecutorType::default(),
        }
    }

    #[must_use]
    pub const fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }

    #[must_use]
    pub const fn with_fixed_opening(mut self, fixed_opening: bool) -> Self {
        self.fixed_opening = fixed_opening;
        self
    }

    #[must_use]
    pub const fn with_executor(mut self, executor: ExecutorType) -> Self {
        self.executor = executor;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::DirectExecutor;

    #[test]
    fn defaults() {
        let config = SolverConfig::default();
        assert_eq!(config.max_turns, 10);
        assert!(config.fixed_opening);
        assert_eq!(config.executor.name(), "offload");
    }

    #[test]
    fn builder_overrides() {
        let config = SolverConfig::new()
            .with_max_turns(3)
            .with_fixed_opening(false)
            .with_executor(ExecutorType::Direct(DirectExecutor));
        assert_eq!(config.max_turns, 3);
        assert!(!config.fixed_opening);
        assert_eq!(config.executor.name(), "direct");
    }
}
