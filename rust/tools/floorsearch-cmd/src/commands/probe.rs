use anyhow::{Context, Result};
use floorsearch::{NoTrace, SearchRange, SearchTrace, SortedSeq};
use serde::Serialize;

use crate::utils::{StderrTrace, read_array, write_json};

/// Outcome of a single predecessor search.
#[derive(Debug, Serialize, PartialEq)]
pub struct ProbeResult {
    /// 0-based index returned by the search.
    pub index: usize,
    /// Element at `index`.
    pub element: f64,
    /// Whether `element` is actually less than or equal to the searched value.
    pub has_predecessor: bool,
}

pub fn run(
    list: String,
    value: f64,
    lo: Option<usize>,
    hi: Option<usize>,
    trace: bool,
    output: Option<String>,
) -> Result<()> {
    let values: Vec<f64> = read_array(&list)?;
    let result = if trace {
        probe(&values, value, lo, hi, &mut StderrTrace)?
    } else {
        probe(&values, value, lo, hi, &mut NoTrace)?
    };
    write_json(&result, output.as_deref())
}

fn probe<R: SearchTrace<f64>>(
    values: &[f64],
    value: f64,
    lo: Option<usize>,
    hi: Option<usize>,
    trace: &mut R,
) -> Result<ProbeResult> {
    let seq = SortedSeq::try_new(values).context("Invalid sorted list")?;
    let full = seq.full_range();
    let range = SearchRange::new(lo.unwrap_or(full.lo), hi.unwrap_or(full.hi));
    let index = seq
        .predecessor_traced(&value, range, trace)
        .with_context(|| format!("Search for {value} in {range} failed"))?;
    let element = seq[index];
    Ok(ProbeResult {
        index,
        element,
        has_predecessor: element <= value,
    })
}
