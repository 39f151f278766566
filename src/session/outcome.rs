//! Modes, terminal outcomes and session errors

use crate::core::{Code, FormatError, ValidationError};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Who holds the secret and who guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// The caller guesses; the engine holds the secret and scores
    Attack,
    /// The engine guesses; the caller holds the secret and supplies feedback
    Defense,
    /// The engine plays both sides toward a known secret
    Autoplay,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Attack => "attack",
            Self::Defense => "defense",
            Self::Autoplay => "autoplay",
        })
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "attack" | "atk" => Ok(Self::Attack),
            "defense" | "defence" | "dfs" => Ok(Self::Defense),
            "autoplay" | "auto" => Ok(Self::Autoplay),
            other => Err(format!("Unknown mode: {other} (expected attack, defense or autoplay)")),
        }
    }
}

/// How a game ended
///
/// Every ending is an ordinary value; none of them is an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A guess scored all strikes
    Solved { turns: usize, secret: Code },
    /// No candidate is consistent with the feedback given so far
    Contradiction { turns: usize },
    /// The engine ran out of turns
    TurnLimitExceeded { limit: usize },
    /// The stop predicate fired or the game was stopped by the caller
    Cancelled,
    /// The secret was rejected before the game started
    Invalid(ValidationError),
}

impl Outcome {
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self, Self::Solved { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solved { turns, secret } => write!(f, "solved {secret} in {turns} turns"),
            Self::Contradiction { turns } => write!(f, "contradiction after {turns} turns"),
            Self::TurnLimitExceeded { limit } => write!(f, "turn limit of {limit} exceeded"),
            Self::Cancelled => write!(f, "cancelled"),
            Self::Invalid(err) => write!(f, "invalid secret: {err}"),
        }
    }
}

/// Input the session refused
///
/// The session is left exactly as it was; the caller may retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("{action} not accepted in {mode} mode")]
    WrongMode { action: &'static str, mode: Mode },

    #[error("not waiting for {0} right now")]
    NotAwaitingInput(&'static str),

    #[error("the game is already over")]
    GameOver,
}
