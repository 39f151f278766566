//! Game scale (code length)

use super::ValidationError;
use std::fmt;

/// Number of digits in every code of a session, always within `3..=9`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Scale(u8);

impl Scale {
    /// Smallest supported code length
    pub const MIN: usize = 3;
    /// Largest supported code length (one digit of the alphabet always stays unused)
    pub const MAX: usize = 9;

    /// Create a scale, rejecting lengths outside `3..=9`
    ///
    /// # Errors
    /// Returns `ValidationError::ScaleOutOfRange` for unsupported lengths.
    ///
    /// # Examples
    /// ```
    /// use baseball_solver::core::Scale;
    ///
    /// assert_eq!(Scale::new(4).unwrap().len(), 4);
    /// assert!(Scale::new(2).is_err());
    /// assert!(Scale::new(10).is_err());
    /// ```
    pub fn new(len: usize) -> Result<Self, ValidationError> {
        if (Self::MIN..=Self::MAX).contains(&len) {
            Ok(Self(len as u8))
        } else {
            Err(ValidationError::ScaleOutOfRange { actual: len })
        }
    }

    /// Code length as `usize`
    #[inline]
    #[must_use]
    #[allow(clippy::len_without_is_empty)] // A scale is never empty
    pub const fn len(self) -> usize {
        self.0 as usize
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self(4)
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
