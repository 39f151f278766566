//! Universe of all codes for a scale
//!
//! Generated once per session and shared read-only afterwards. Cloning a
//! `Universe` only bumps a reference count, so it can be handed to a worker
//! thread without copying millions of codes.

use crate::core::{Code, Scale};
use std::sync::Arc;

/// Every valid code of one scale, in lexicographic alphabet order
#[derive(Debug, Clone)]
pub struct Universe {
    scale: Scale,
    codes: Arc<[Code]>,
}

impl Universe {
    /// Number of codes for a scale: `10! / (10 - n)!`
    ///
    /// # Examples
    /// ```
    /// use baseball_solver::core::Scale;
    /// use baseball_solver::solver::Universe;
    ///
    /// assert_eq!(Universe::size_for(Scale::new(4).unwrap()), 5040);
    /// ```
    #[must_use]
    pub fn size_for(scale: Scale) -> usize {
        (10 - scale.len() + 1..=10).product()
    }

    /// Enumerate all permutations of `n` distinct digits
    #[must_use]
    pub fn generate(scale: Scale) -> Self {
        let mut codes = Vec::with_capacity(Self::size_for(scale));
        let mut prefix = Vec::with_capacity(scale.len());
        extend(&mut codes, &mut prefix, 0, scale.len());

        tracing::debug!(scale = scale.len(), size = codes.len(), "universe generated");

        Self {
            scale,
            codes: codes.into(),
        }
    }

    /// Scale of every code in the universe
    #[inline]
    #[must_use]
    pub const fn scale(&self) -> Scale {
        self.scale
    }

    /// All codes as a slice
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Code] {
        &self.codes
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Code> {
        self.codes.iter()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// Depth-first permutation walk; trying digits in ascending order keeps the
/// output lexicographic
fn extend(out: &mut Vec<Code>, prefix: &mut Vec<u8>, used: u16, len: usize) {
    if prefix.len() == len {
        out.push(Code::from_distinct(prefix));
        return;
    }
    for digit in 0..10u8 {
        if used & (1 << digit) == 0 {
            prefix.push(digit);
            extend(out, prefix, used | (1 << digit), len);
            prefix.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    fn scale(n: usize) -> Scale {
        Scale::new(n).unwrap()
    }

    #[test]
    fn sizes_match_formula() {
        assert_eq!(Universe::size_for(scale(3)), 720);
        assert_eq!(Universe::size_for(scale(4)), 5040);
        assert_eq!(Universe::size_for(scale(5)), 30240);
        assert_eq!(Universe::size_for(scale(9)), 3_628_800);

        assert_eq!(Universe::generate(scale(3)).len(), 720);
        assert_eq!(Universe::generate(scale(4)).len(), 5040);
    }

    #[test]
    fn codes_are_unique_and_valid() {
        let universe = Universe::generate(scale(4));
        let unique: FxHashSet<Code> = universe.iter().copied().collect();
        assert_eq!(unique.len(), universe.len());

        for code in &unique {
            assert_eq!(code.len(), 4);
            assert_eq!(code.mask().count_ones(), 4);
        }
    }

    #[test]
    fn enumeration_is_lexicographic() {
        let universe = Universe::generate(scale(3));
        assert_eq!(universe.as_slice()[0].to_string(), "012");
        assert_eq!(universe.as_slice()[1].to_string(), "013");
        assert_eq!(universe.as_slice()[719].to_string(), "987");

        let texts: Vec<String> = universe.iter().map(ToString::to_string).collect();
        let mut sorted = texts.clone();
        sorted.sort();
        assert_eq!(texts, sorted);
    }

    #[test]
    fn opening_is_first_code() {
        let universe = Universe::generate(scale(5));
        assert_eq!(universe.as_slice()[0], Code::opening(scale(5)));
    }

    #[test]
    fn clone_shares_storage() {
        let universe = Universe::generate(scale(3));
        let copy = universe.clone();
        assert!(std::ptr::eq(universe.as_slice(), copy.as_slice()));
        assert_eq!(copy.scale(), scale(3));
    }
}
