//! Inclusive index windows over a sorted sequence.

use std::fmt;

use floorsearch_common::{Result, error::Error};

/// An inclusive `[lo, hi]` window of indices that a search is allowed to probe.
///
/// A well-formed range satisfies `lo <= hi < len` for the sequence it is used with.
/// The type is `Copy`: search routines narrow their own copy, so a range handed to a
/// search is never modified on the caller's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchRange {
    pub lo: usize,
    pub hi: usize,
}

impl SearchRange {
    /// Creates a range without validating it.
    #[inline]
    pub const fn new(lo: usize, hi: usize) -> SearchRange {
        SearchRange { lo, hi }
    }

    /// The range covering every index of a sequence of length `len`.
    ///
    /// Returns `None` for an empty sequence.
    #[inline]
    pub const fn full(len: usize) -> Option<SearchRange> {
        if len == 0 {
            None
        } else {
            Some(SearchRange::new(0, len - 1))
        }
    }

    /// Creates a range and checks that it is well-formed for a sequence of length `len`.
    pub fn try_within(lo: usize, hi: usize, len: usize) -> Result<SearchRange> {
        let range = SearchRange::new(lo, hi);
        range.verify(len)?;
        Ok(range)
    }

    /// Fails with `InvalidRange` unless `lo <= hi < len`.
    pub fn verify(&self, len: usize) -> Result<()> {
        if self.is_valid_for(len) {
            Ok(())
        } else {
            Err(Error::invalid_range(self.lo, self.hi, len))
        }
    }

    #[inline]
    pub const fn is_valid_for(&self, len: usize) -> bool {
        self.lo <= self.hi && self.hi < len
    }

    /// Number of indices in the range; zero for an inverted range.
    ///
    /// Saturates at `usize::MAX` for `[0, usize::MAX]`, whose true length is not representable.
    #[inline]
    pub const fn len(&self) -> usize {
        if self.lo > self.hi {
            0
        } else {
            (self.hi - self.lo).saturating_add(1)
        }
    }

    /// A well-formed range always holds at least one index, so only inverted ranges are empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.lo > self.hi
    }

    #[inline]
    pub const fn contains(&self, index: usize) -> bool {
        self.lo <= index && index <= self.hi
    }

    /// Returns a copy with the lower bound raised to `lo`.
    #[inline]
    pub const fn with_lo(self, lo: usize) -> SearchRange {
        SearchRange { lo, hi: self.hi }
    }

    /// Returns a copy with the upper bound set to `hi`.
    #[inline]
    pub const fn with_hi(self, hi: usize) -> SearchRange {
        SearchRange { lo: self.lo, hi }
    }

    /// Midpoint rounded up (round-half-up of `(lo + hi) / 2`).
    #[inline]
    pub(crate) const fn upper_mid(&self) -> usize {
        (self.lo + self.hi).div_ceil(2)
    }

    /// Midpoint rounded down.
    #[inline]
    pub(crate) const fn lower_mid(&self) -> usize {
        (self.lo + self.hi) / 2
    }
}

impl fmt::Display for SearchRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}

impl From<std::ops::RangeInclusive<usize>> for SearchRange {
    fn from(range: std::ops::RangeInclusive<usize>) -> Self {
        SearchRange::new(*range.start(), *range.end())
    }
}
