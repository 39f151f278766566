//! Input errors surfaced to the caller
//!
//! Both kinds are recoverable: the session stays where it was and the caller
//! may retry with corrected input.

use thiserror::Error;

/// A code or scale that breaks the game rules
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("only digits are allowed (got '{0}')")]
    NonDigit(String),

    #[error("length mismatch: expected {expected} digits, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("digits must not repeat (got '{0}')")]
    DuplicateDigit(String),

    #[error("scale must be between {min} and {max}, got {actual}", min = super::Scale::MIN, max = super::Scale::MAX)]
    ScaleOutOfRange { actual: usize },
}

/// Feedback text that does not look like `3s 2b`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected feedback like '1s 2b', got '{0}'")]
pub struct FormatError(pub String);
