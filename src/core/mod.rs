//! Core domain types for number baseball
//!
//! This module contains the fundamental domain types: the digit alphabet,
//! codes, scales and strike/ball feedback. Everything here is pure and cheap
//! to copy.

mod code;
mod error;
mod feedback;
mod scale;

pub use code::{ALPHABET, Code, validate_code};
pub use error::{FormatError, ValidationError};
pub use feedback::{Feedback, parse_feedback};
pub use scale::Scale;
