//! Batch predecessor search with a ratcheting lower bound.
//!
//! The batch driver answers the first and last queries over wide bounds, then answers the
//! interior queries in order, raising the lower bound to each result as it goes. With
//! non-decreasing queries every result is at least the previous one, so the window shrinks
//! with every step. Query order is not verified here: for a query that is smaller than an
//! earlier interior query the true predecessor may already be excluded, and the result is
//! then too large.

use crate::{
    predecessor::predecessor_search_traced,
    range::SearchRange,
    trace::{NoTrace, SearchTrace, TraceEvent},
};

/// Answers every query in `queries` with its predecessor index in `seq`.
///
/// The result holds 0-based indices, one per query, in query order. `seq` must be sorted and
/// non-empty, and `queries` should be non-decreasing (see the module documentation).
/// Empty `queries` produce an empty result.
pub fn batch_predecessor_search<T: PartialOrd>(seq: &[T], queries: &[T]) -> Vec<usize> {
    batch_predecessor_search_traced(seq, queries, &mut NoTrace)
}

/// Same as [`batch_predecessor_search`], reporting every step to `trace`.
pub fn batch_predecessor_search_traced<T, R>(
    seq: &[T],
    queries: &[T],
    trace: &mut R,
) -> Vec<usize>
where
    T: PartialOrd,
    R: SearchTrace<T> + ?Sized,
{
    let mut results = vec![0usize; queries.len()];
    batch_predecessor_search_into(seq, queries, &mut results, trace);
    results
}

/// Writes the predecessor index of `queries[k]` into `results[k]`.
///
/// # Panics
///
/// Panics if `results` and `queries` differ in length, or if `seq` is empty while `queries`
/// is not.
pub fn batch_predecessor_search_into<T, R>(
    seq: &[T],
    queries: &[T],
    results: &mut [usize],
    trace: &mut R,
) where
    T: PartialOrd,
    R: SearchTrace<T> + ?Sized,
{
    assert_eq!(
        queries.len(),
        results.len(),
        "batch_predecessor_search_into: result buffer length mismatch"
    );
    let Some((first_query, rest)) = queries.split_first() else {
        return;
    };
    assert!(
        !seq.is_empty(),
        "batch_predecessor_search_into: empty sequence"
    );
    let last = seq.len() - 1;

    let first = predecessor_search_traced(seq, first_query, SearchRange::new(0, last), trace);
    results[0] = first;

    let Some((last_query, interior)) = rest.split_last() else {
        return;
    };

    let final_index =
        predecessor_search_traced(seq, last_query, SearchRange::new(first, last), trace);
    results[queries.len() - 1] = final_index;

    // Keep at least two indices in the window, without running past the end of `seq`.
    let mut bounds = SearchRange::new(first, final_index.max(first + 1).min(last));
    trace.event(&TraceEvent::BatchBounds { range: bounds });

    for (query, result) in interior.iter().zip(&mut results[1..]) {
        let index = predecessor_search_traced(seq, query, bounds, trace);
        *result = index;
        bounds.lo = index;
        trace.event(&TraceEvent::BatchBounds { range: bounds });
    }
}
