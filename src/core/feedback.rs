//! Strike/ball feedback calculation and parsing
//!
//! A strike is a digit in the right position, a ball is a shared digit in
//! the wrong position. Because codes never repeat a digit, every digit is
//! either absent or present exactly once, so
//! `ball = |common digits| - strike`.

use super::{Code, FormatError};
use regex_lite::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Digit, optional space, `s`, at least one space, digit, optional space, `b`
static FEEDBACK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d)\s*[sS]\s+(\d)\s*[bB]").expect("feedback pattern is a valid regex")
});

/// Feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Feedback {
    pub strike: u8,
    pub ball: u8,
}

impl Feedback {
    /// Create feedback from raw counts
    #[inline]
    #[must_use]
    pub const fn new(strike: u8, ball: u8) -> Self {
        Self { strike, ball }
    }

    /// Score `guess` against `other`
    ///
    /// Both codes must have the same length. The result is symmetric.
    ///
    /// # Examples
    /// ```
    /// use baseball_solver::core::{Feedback, Scale, validate_code};
    ///
    /// let scale = Scale::new(4).unwrap();
    /// let guess = validate_code("0123", scale).unwrap();
    /// let answer = validate_code("1234", scale).unwrap();
    ///
    /// assert_eq!(Feedback::score(&guess, &answer), Feedback::new(0, 3));
    /// ```
    #[inline]
    #[must_use]
    pub fn score(guess: &Code, other: &Code) -> Self {
        debug_assert_eq!(guess.len(), other.len(), "codes must share a scale");

        let strike = guess
            .digits()
            .iter()
            .zip(other.digits())
            .filter(|(g, o)| g == o)
            .count() as u8;
        let common = (guess.mask() & other.mask()).count_ones() as u8;

        Self {
            strike,
            ball: common - strike,
        }
    }

    /// Check whether this feedback means the guess was the secret
    #[inline]
    #[must_use]
    pub const fn is_solved(self, scale_len: usize) -> bool {
        self.strike as usize == scale_len
    }

    /// Dense index for histogram buckets (strike and ball are both below 10)
    #[inline]
    #[must_use]
    pub const fn bucket(self) -> usize {
        self.strike as usize * 10 + self.ball as usize
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}S {}B", self.strike, self.ball)
    }
}

/// Parse feedback typed by a person, such as `3s 2b` or `1S 0B`
///
/// The pattern may appear anywhere in the text and is case-insensitive.
/// The counts are not checked against a scale here: impossible feedback is
/// caught later as a contradiction.
///
/// # Errors
/// Returns `FormatError` when the text does not contain the pattern.
///
/// # Examples
/// ```
/// use baseball_solver::core::{Feedback, parse_feedback};
///
/// assert_eq!(parse_feedback("3s 2b").unwrap(), Feedback::new(3, 2));
/// assert_eq!(parse_feedback("1S   0B").unwrap(), Feedback::new(1, 0));
/// assert!(parse_feedback("3s2b").is_err());
/// ```
pub fn parse_feedback(text: &str) -> Result<Feedback, FormatError> {
    let captures = FEEDBACK_PATTERN
        .captures(text)
        .ok_or_else(|| FormatError(text.to_string()))?;

    let count = |index: usize| {
        captures
            .get(index)
            .and_then(|m| m.as_str().parse::<u8>().ok())
            .ok_or_else(|| FormatError(text.to_string()))
    };

    Ok(Feedback::new(count(1)?, count(2)?))
}
