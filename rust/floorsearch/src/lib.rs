//! Predecessor ("floor") search over sorted sequences.
//!
//! Given a sequence sorted in non-decreasing order, a predecessor search finds the index of
//! the last element that is less than or equal to a query value. This crate provides:
//!
//! - **Single queries**: [`predecessor_search`] and [`predecessor_search_in`], restricted to
//!   an inclusive [`SearchRange`]
//! - **Batches**: [`batch_predecessor_search`], which ratchets the lower bound of the search
//!   window from one query to the next
//! - **Checked entry points**: [`SortedSeq`] validates its inputs and reports violations as
//!   [`floorsearch_common::Error`]s
//! - **Host boundary**: [`host`] converts between flat `f64`/`i32` buffers with 1-based
//!   result indices and the 0-based core
//!
//! The unchecked functions are generic over any `T: PartialOrd` and never allocate beyond the
//! result buffer. Progress can be observed through a [`SearchTrace`] sink.

pub mod batch;
pub mod config;
pub mod host;
pub mod predecessor;
pub mod range;
pub mod sorted_seq;
pub mod trace;
pub mod validate;


pub use batch::{
    batch_predecessor_search, batch_predecessor_search_into, batch_predecessor_search_traced,
};
pub use config::{IndexBase, SearchConfig};
pub use predecessor::{predecessor_search, predecessor_search_in, predecessor_search_traced};
pub use range::SearchRange;
pub use sorted_seq::SortedSeq;
pub use trace::{LogTrace, NoTrace, SearchTrace, TraceEvent};
