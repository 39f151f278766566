//! Minimax guess selection
//!
//! Picks the probe whose largest feedback group is smallest.

mod calculator;
mod selector;

pub use calculator::{calculate_max_remaining, group_by_feedback};
pub use selector::{Selection, select_best_guess};
