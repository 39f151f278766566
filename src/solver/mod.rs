//! Number baseball solving engine
//!
//! Universe generation, candidate narrowing, minimax guess selection and the
//! execution strategies that run the search.

mod cancel;
mod error;
pub mod executor;
mod filter;
pub mod minimax;
mod universe;

pub use cancel::CancelToken;
pub use error::SearchError;
pub use executor::{DirectExecutor, Executor, ExecutorType, OffloadedExecutor};
pub use filter::filter_candidates;
pub use minimax::{Selection, select_best_guess};
pub use universe::Universe;
