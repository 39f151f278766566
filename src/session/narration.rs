//! Progress narration

use super::{Outcome, SolverSession};
use std::fmt;
use std::iter::FusedIterator;

/// One human-readable progress message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Narration {
    /// Turn the message belongs to, if any
    pub turn: Option<usize>,
    pub text: String,
    /// Set on the last message of a game
    pub outcome: Option<Outcome>,
}

impl Narration {
    pub(crate) fn info(text: impl Into<String>) -> Self {
        Self {
            turn: None,
            text: text.into(),
            outcome: None,
        }
    }

    pub(crate) fn turn(turn: usize, text: impl Into<String>) -> Self {
        Self {
            turn: Some(turn),
            text: text.into(),
            outcome: None,
        }
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }
}

impl fmt::Display for Narration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Lazy narration stream returned by `SolverSession::run`
///
/// Each `next` advances the session by one observable step. The stream ends
/// when the game is over or when the session needs input from the caller;
/// it never restarts on its own. The stop predicate is consulted between
/// steps and while waiting for a search.
pub struct Narrations<'s, F> {
    pub(super) session: &'s mut SolverSession,
    pub(super) stop: F,
}

impl<F: FnMut() -> bool> Iterator for Narrations<'_, F> {
    type Item = Narration;

    fn next(&mut self) -> Option<Narration> {
        self.session.advance(&mut self.stop)
    }
}

impl<F: FnMut() -> bool> FusedIterator for Narrations<'_, F> {}
