//! Baseball Solver
//!
//! A solver for number baseball (Bulls and Cows with distinct digits) using
//! minimax guess selection over the full code universe.
//!
//! # Quick Start
//!
//! ```rust
//! use baseball_solver::core::{Feedback, Scale, validate_code};
//!
//! let scale = Scale::new(4).unwrap();
//! let guess = validate_code("0123", scale).unwrap();
//! let secret = validate_code("1234", scale).unwrap();
//!
//! let feedback = Feedback::score(&guess, &secret);
//! println!("{feedback}"); // 0S 3B
//! ```

// Core domain types
pub mod core;

// Candidate filtering and guess search
pub mod solver;

// Game sessions and the turn loop
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
