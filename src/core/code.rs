//! Code representation
//!
//! A Code is an ordered sequence of distinct digits. Digits are stored as
//! values `0..=9` alongside a 10-bit presence mask so that the common-digit
//! count of two codes is a single `popcount`.

use super::{Scale, ValidationError};
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;

/// The fixed digit alphabet, in enumeration order
pub const ALPHABET: &[u8; 10] = b"0123456789";

/// An ordered sequence of up to 9 distinct digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code {
    digits: [u8; Scale::MAX],
    len: u8,
    mask: u16,
}

impl Code {
    /// Build a code from digit values (`0..=9`) that are known to be distinct
    ///
    /// Used by the universe generator, which only produces valid permutations.
    #[must_use]
    pub(crate) fn from_distinct(values: &[u8]) -> Self {
        debug_assert!(values.len() <= Scale::MAX);
        let mut digits = [0u8; Scale::MAX];
        let mut mask = 0u16;
        for (slot, &value) in digits.iter_mut().zip(values) {
            debug_assert!(value < 10);
            debug_assert!(mask & (1 << value) == 0, "repeated digit {value}");
            *slot = value;
            mask |= 1 << value;
        }
        Self {
            digits,
            len: values.len() as u8,
            mask,
        }
    }

    /// The canonical ascending code `0123…` truncated to the scale
    ///
    /// # Examples
    /// ```
    /// use baseball_solver::core::{Code, Scale};
    ///
    /// assert_eq!(Code::opening(Scale::new(4).unwrap()).to_string(), "0123");
    /// ```
    #[must_use]
    pub fn opening(scale: Scale) -> Self {
        let values: Vec<u8> = (0..scale.len() as u8).collect();
        Self::from_distinct(&values)
    }

    /// Draw a uniformly random code of the given scale
    #[must_use]
    pub fn random<R: Rng + ?Sized>(scale: Scale, rng: &mut R) -> Self {
        let mut values: Vec<u8> = (0..10).collect();
        values.shuffle(rng);
        Self::from_distinct(&values[..scale.len()])
    }

    /// Digit values (`0..=9`) in order
    #[inline]
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.digits[..self.len as usize]
    }

    /// Number of digits
    #[inline]
    #[must_use]
    #[allow(clippy::len_without_is_empty)] // Codes are never empty in practice
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Bit `d` is set iff digit `d` occurs in the code
    #[inline]
    #[must_use]
    pub const fn mask(&self) -> u16 {
        self.mask
    }

    /// Check whether a digit value occurs anywhere in the code
    #[inline]
    #[must_use]
    pub const fn contains(&self, digit: u8) -> bool {
        digit < 10 && self.mask & (1 << digit) != 0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &digit in self.digits() {
            write!(f, "{}", ALPHABET[digit as usize] as char)?;
        }
        Ok(())
    }
}

/// Validate user input as a code of the given scale
///
/// Checks run in a fixed order: digits only (empty input counts as
/// non-digit), then exact length, then no repeated digit.
///
/// # Errors
/// Returns the first `ValidationError` encountered.
///
/// # Examples
/// ```
/// use baseball_solver::core::{Scale, ValidationError, validate_code};
///
/// let scale = Scale::new(4).unwrap();
/// assert!(validate_code("4321", scale).is_ok());
/// assert!(matches!(validate_code("12a3", scale), Err(ValidationError::NonDigit(_))));
/// assert!(matches!(validate_code("1123", scale), Err(ValidationError::DuplicateDigit(_))));
/// ```
pub fn validate_code(text: &str, scale: Scale) -> Result<Code, ValidationError> {
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::NonDigit(text.to_string()));
    }

    // All ASCII from here on, so bytes == chars
    if text.len() != scale.len() {
        return Err(ValidationError::WrongLength {
            expected: scale.len(),
            actual: text.len(),
        });
    }

    let values: Vec<u8> = text.bytes().map(|b| b - b'0').collect();
    let mut seen = 0u16;
    for &value in &values {
        if seen & (1 << value) != 0 {
            return Err(ValidationError::DuplicateDigit(text.to_string()));
        }
        seen |= 1 << value;
    }

    Ok(Code::from_distinct(&values))
}
