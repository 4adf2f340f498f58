//! Command implementations for floorsearch-cmd

pub mod probe;
pub mod search;
