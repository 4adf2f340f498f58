//! Precondition checks backing the checked entry points.
//!
//! Comparability is tested with `partial_cmp` of a value against itself, which fails exactly
//! for values outside the total order (floating-point NaN).

use floorsearch_common::{Result, error::Error};

#[inline]
pub(crate) fn is_comparable<T: PartialOrd>(value: &T) -> bool {
    value.partial_cmp(value).is_some()
}

pub fn verify_non_empty<T>(name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        Err(Error::empty_input(name))
    } else {
        Ok(())
    }
}

/// Fails on the first value that is not comparable with itself.
pub fn verify_comparable<T: PartialOrd>(name: &str, values: &[T]) -> Result<()> {
    match values.iter().position(|v| !is_comparable(v)) {
        Some(position) => Err(Error::incomparable_value(name, position)),
        None => Ok(()),
    }
}

/// Fails on the first incomparable value or the first value that is smaller than its
/// predecessor.
pub fn verify_sorted<T: PartialOrd>(name: &str, values: &[T]) -> Result<()> {
    verify_comparable(name, values)?;
    match values.windows(2).position(|w| w[1] < w[0]) {
        Some(position) => Err(Error::unsorted_input(name, position + 1)),
        None => Ok(()),
    }
}
