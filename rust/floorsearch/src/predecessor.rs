//! Single-query predecessor (floor) search.
//!
//! The search is an iterative bisection with explicit bound narrowing rather than a classic
//! lower/upper-bound search: it probes an index, and either shrinks the upper bound onto it,
//! accepts it (when the query lies between it and its successor), or raises the lower bound
//! onto it. Rounding the midpoint down after shrinking the upper bound, and up after raising
//! the lower bound, guarantees progress even when the bounds are adjacent.
//!
//! # Preconditions
//!
//! The functions in this module do not validate their inputs:
//!
//! - `seq` is sorted in non-decreasing order over the searched range;
//! - the range satisfies `lo <= hi < seq.len()`;
//! - the query is comparable (not a floating-point NaN).
//!
//! Violating these yields an unspecified index, or a panic from slice indexing when the range
//! points outside `seq`. Debug builds assert the range bounds. See [`crate::SortedSeq`] for
//! checked entry points.

use crate::{
    range::SearchRange,
    trace::{NoTrace, SearchTrace, TraceEvent},
};

/// Returns the index of the last element of `seq` that is less than or equal to `value`.
///
/// Among equal elements the last one wins. When `value` is smaller than every element the
/// result is `0`, so callers that must distinguish "no predecessor" compare `seq[result]`
/// against `value` themselves.
///
/// # Panics
///
/// Panics if `seq` is empty.
#[inline]
pub fn predecessor_search<T: PartialOrd>(seq: &[T], value: &T) -> usize {
    assert!(!seq.is_empty(), "predecessor_search: empty sequence");
    predecessor_search_in(seq, value, SearchRange::new(0, seq.len() - 1))
}

/// Returns the largest index `i` in `range` with `seq[i] <= value`, preferring the last of
/// equal elements.
///
/// If `value` is smaller than `seq[range.lo]`, returns `range.lo`.
/// If `value` is greater than or equal to `seq[range.hi]`, returns `range.hi`.
#[inline]
pub fn predecessor_search_in<T: PartialOrd>(seq: &[T], value: &T, range: SearchRange) -> usize {
    predecessor_search_traced(seq, value, range, &mut NoTrace)
}

/// Same as [`predecessor_search_in`], reporting every step to `trace`.
pub fn predecessor_search_traced<T, R>(
    seq: &[T],
    value: &T,
    range: SearchRange,
    trace: &mut R,
) -> usize
where
    T: PartialOrd,
    R: SearchTrace<T> + ?Sized,
{
    debug_assert!(
        range.is_valid_for(seq.len()),
        "search range {range} out of bounds for a sequence of length {}",
        seq.len()
    );

    let mut bounds = range;
    let mut index = bounds.upper_mid();
    trace.event(&TraceEvent::Start {
        range: bounds,
        index,
    });

    loop {
        let current = &seq[index];
        trace.event(&TraceEvent::Probe {
            range: bounds,
            index,
            query: value,
            value: current,
        });

        if value < current {
            if index <= bounds.lo {
                // Below every element of the range: settle on the lower bound.
                break;
            }
            bounds.hi = index;
            index = bounds.lower_mid();
        } else if index >= bounds.hi || value < &seq[index + 1] {
            break;
        } else {
            bounds.lo = index;
            index = bounds.upper_mid();
        }
    }

    trace.event(&TraceEvent::Accept { index });
    index
}
