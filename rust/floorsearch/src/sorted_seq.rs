//! Checked predecessor search over a validated sorted sequence.

use std::ops::Deref;

use floorsearch_common::{Result, error::Error, verify_arg};

use crate::{
    batch::batch_predecessor_search_into,
    config::SearchConfig,
    predecessor::predecessor_search_traced,
    range::SearchRange,
    trace::{NoTrace, SearchTrace},
    validate::{is_comparable, verify_comparable, verify_non_empty, verify_sorted},
};

/// A borrowed, non-empty sequence sorted in non-decreasing order.
///
/// Construction through [`SortedSeq::try_new`] verifies the ordering once, so the searches
/// only validate what depends on their own arguments: the search range and the queries.
#[derive(Debug)]
pub struct SortedSeq<'a, T> {
    values: &'a [T],
}

// Manual impls: the view is a shared borrow, so it is `Copy` for any `T`.
impl<T> Clone for SortedSeq<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SortedSeq<'_, T> {}

impl<'a, T: PartialOrd> SortedSeq<'a, T> {
    pub const NAME: &'static str = "sequence";

    /// Wraps `values` after checking that they are non-empty, free of incomparable values
    /// and sorted in non-decreasing order.
    pub fn try_new(values: &'a [T]) -> Result<Self> {
        verify_non_empty(Self::NAME, values)?;
        verify_sorted(Self::NAME, values)?;
        Ok(SortedSeq { values })
    }

    /// Wraps `values` after checking only that they are non-empty.
    ///
    /// The caller vouches for the ordering. Searches over an unsorted sequence return
    /// unspecified indices within bounds; they never panic.
    pub fn new_unchecked(values: &'a [T]) -> Result<Self> {
        verify_non_empty(Self::NAME, values)?;
        Ok(SortedSeq { values })
    }

    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        self.values
    }

    #[inline]
    pub fn full_range(&self) -> SearchRange {
        SearchRange::new(0, self.values.len() - 1)
    }

    /// Index of the last element less than or equal to `value`, searching the whole sequence.
    ///
    /// A `value` below the first element yields `0`; use [`SortedSeq::floor_index`] to tell
    /// that case apart.
    pub fn predecessor(&self, value: &T) -> Result<usize> {
        self.predecessor_in(value, self.full_range())
    }

    /// Index of the last element less than or equal to `value` within `range`.
    pub fn predecessor_in(&self, value: &T, range: SearchRange) -> Result<usize> {
        self.predecessor_traced(value, range, &mut NoTrace)
    }

    pub fn predecessor_traced<R>(
        &self,
        value: &T,
        range: SearchRange,
        trace: &mut R,
    ) -> Result<usize>
    where
        R: SearchTrace<T> + ?Sized,
    {
        range.verify(self.values.len())?;
        if !is_comparable(value) {
            return Err(Error::incomparable_value("value", 0));
        }
        Ok(predecessor_search_traced(self.values, value, range, trace))
    }

    /// Index of the last element less than or equal to `value`, or `None` when every element
    /// is greater than `value`.
    pub fn floor_index(&self, value: &T) -> Result<Option<usize>> {
        let index = self.predecessor(value)?;
        Ok((self.values[index] <= *value).then_some(index))
    }

    /// The last element less than or equal to `value`, if any.
    pub fn floor_value(&self, value: &T) -> Result<Option<&'a T>> {
        let values = self.values;
        Ok(self.floor_index(value)?.map(|i| &values[i]))
    }

    /// Answers a batch of queries with the default configuration.
    pub fn batch(&self, queries: &[T]) -> Result<Vec<usize>> {
        self.batch_with(queries, &SearchConfig::default(), &mut NoTrace)
    }

    /// Answers a batch of queries, returning 0-based indices in query order.
    ///
    /// Queries must be non-empty and comparable. With `config.verify_query_order` they must
    /// also be non-decreasing; otherwise their order is accepted as is, and a query smaller
    /// than an earlier interior query may receive a too-large index.
    pub fn batch_with<R>(
        &self,
        queries: &[T],
        config: &SearchConfig,
        trace: &mut R,
    ) -> Result<Vec<usize>>
    where
        R: SearchTrace<T> + ?Sized,
    {
        let mut results = vec![0usize; queries.len()];
        self.batch_into(queries, &mut results, config, trace)?;
        Ok(results)
    }

    /// Same as [`SortedSeq::batch_with`], writing the indices into a caller-provided buffer
    /// of the same length as `queries`.
    pub fn batch_into<R>(
        &self,
        queries: &[T],
        results: &mut [usize],
        config: &SearchConfig,
        trace: &mut R,
    ) -> Result<()>
    where
        R: SearchTrace<T> + ?Sized,
    {
        const QUERIES: &str = "queries";
        verify_non_empty(QUERIES, queries)?;
        verify_arg!(results, results.len() == queries.len());
        if config.verify_query_order {
            verify_sorted(QUERIES, queries)?;
        } else {
            verify_comparable(QUERIES, queries)?;
        }

        batch_predecessor_search_into(self.values, queries, results, trace);
        Ok(())
    }
}

impl<T> Deref for SortedSeq<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.values
    }
}
