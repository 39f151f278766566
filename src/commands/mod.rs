//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_code};
pub use benchmark::{BenchmarkResult, random_secrets, run_benchmark};
pub use simple::run_simple;
pub use solve::{SolveConfig, SolveResult, solve_code};
