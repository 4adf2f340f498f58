//! Options for the checked search entry points and the host boundary.

/// Numbering convention of the indices handed back across the host boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexBase {
    Zero,
    /// Host arrays are numbered from 1.
    #[default]
    One,
}

impl IndexBase {
    #[inline]
    pub const fn offset(self) -> usize {
        match self {
            IndexBase::Zero => 0,
            IndexBase::One => 1,
        }
    }
}

/// Configuration of the checked search entry points.
///
/// The defaults verify the sorted sequence, accept queries in any order (matching the
/// unchecked batch driver), and report 1-based indices at the host boundary.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Check that the sorted sequence is non-decreasing and free of NaN before searching.
    pub verify_sequence_order: bool,

    /// Reject query batches that are not non-decreasing. Decreasing queries can produce
    /// results that are too large, since the batch driver ratchets its lower bound.
    pub verify_query_order: bool,

    pub index_base: IndexBase,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            verify_sequence_order: true,
            verify_query_order: false,
            index_base: IndexBase::One,
        }
    }
}

impl SearchConfig {
    /// A configuration that only checks what is needed to avoid panics (non-empty inputs and
    /// comparable queries).
    pub fn unverified() -> Self {
        SearchConfig {
            verify_sequence_order: false,
            ..Default::default()
        }
    }

    pub fn with_sequence_verification(mut self, verify: bool) -> Self {
        self.verify_sequence_order = verify;
        self
    }

    pub fn with_query_verification(mut self, verify: bool) -> Self {
        self.verify_query_order = verify;
        self
    }

    pub fn with_index_base(mut self, base: IndexBase) -> Self {
        self.index_base = base;
        self
    }
}
