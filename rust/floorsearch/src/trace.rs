//! Diagnostic observers of search progress.
//!
//! Every search entry point accepts (or defaults to) a [`SearchTrace`] sink. The sink sees
//! the bounds and probed indices as the search narrows, and has no influence on the result.
//! [`NoTrace`] compiles down to nothing; [`LogTrace`] forwards events to the `log` facade
//! under the `floorsearch` target; any `FnMut(&TraceEvent<T>)` closure is accepted as well.

use std::fmt;

use crate::range::SearchRange;

/// A single step of a predecessor search or a batch driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TraceEvent<'a, T> {
    /// A single search is starting with the given bounds and initial probe index.
    Start { range: SearchRange, index: usize },
    /// The element at `index` is about to be compared against `query`.
    Probe {
        range: SearchRange,
        index: usize,
        query: &'a T,
        value: &'a T,
    },
    /// The search settled on `index`.
    Accept { index: usize },
    /// The batch driver switched to new bounds for the following queries.
    BatchBounds { range: SearchRange },
}

impl<T: fmt::Debug> fmt::Display for TraceEvent<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::Start { range, index } => {
                write!(f, "initial bounds: {range}, initial index: {index}")
            }
            TraceEvent::Probe {
                range,
                index,
                query,
                value,
            } => write!(
                f,
                "bounds: {range}, index: {index}, search value: {query:?}, current value: {value:?}"
            ),
            TraceEvent::Accept { index } => write!(f, "accepted index: {index}"),
            TraceEvent::BatchBounds { range } => write!(f, "new bounds: {range}"),
        }
    }
}

/// Receiver of [`TraceEvent`]s.
pub trait SearchTrace<T> {
    fn event(&mut self, event: &TraceEvent<'_, T>);
}

/// The default sink: discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl<T> SearchTrace<T> for NoTrace {
    #[inline(always)]
    fn event(&mut self, _event: &TraceEvent<'_, T>) {}
}

/// Forwards events to `log::trace!` with the `floorsearch` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTrace;

impl LogTrace {
    pub const TARGET: &'static str = "floorsearch";
}

impl<T: fmt::Debug> SearchTrace<T> for LogTrace {
    #[inline]
    fn event(&mut self, event: &TraceEvent<'_, T>) {
        log::trace!(target: LogTrace::TARGET, "{event}");
    }
}

impl<T, F> SearchTrace<T> for F
where
    F: FnMut(&TraceEvent<'_, T>),
{
    #[inline]
    fn event(&mut self, event: &TraceEvent<'_, T>) {
        self(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_display() {
        let range = SearchRange::new(0, 4);
        let e: TraceEvent<'_, f64> = TraceEvent::Start { range, index: 2 };
        assert_eq!(e.to_string(), "initial bounds: [0, 4], initial index: 2");

        let e = TraceEvent::Probe {
            range,
            index: 2,
            query: &3.5f64,
            value: &3.0f64,
        };
        assert_eq!(
            e.to_string(),
            "bounds: [0, 4], index: 2, search value: 3.5, current value: 3.0"
        );

        let e: TraceEvent<'_, i32> = TraceEvent::Accept { index: 7 };
        assert_eq!(e.to_string(), "accepted index: 7");
    }

    #[test]
    fn test_closure_sink() {
        let mut accepted = Vec::new();
        let mut sink = |e: &TraceEvent<'_, i32>| {
            if let TraceEvent::Accept { index } = e {
                accepted.push(*index);
            }
        };
        let events: [TraceEvent<'_, i32>; 3] = [
            TraceEvent::Accept { index: 1 },
            TraceEvent::Start {
                range: SearchRange::new(0, 1),
                index: 1,
            },
            TraceEvent::Accept { index: 3 },
        ];
        for e in &events {
            sink.event(e);
        }
        assert_eq!(accepted, vec![1, 3]);
    }
}
