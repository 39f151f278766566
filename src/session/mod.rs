//! Game sessions
//!
//! A `SolverSession` owns everything one game needs (universe, candidates,
//! history) and drives the turn loop as a pull-based stream of narration.

mod config;
mod narration;
mod orchestrator;
mod outcome;

pub use config::{DEFAULT_MAX_TURNS, SolverConfig};
pub use narration::{Narration, Narrations};
pub use orchestrator::{Phase, SolverSession, Turn};
pub use outcome::{Mode, Outcome, SessionError};
