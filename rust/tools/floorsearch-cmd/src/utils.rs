//! Common utilities for floorsearch-cmd

use anyhow::{Context, Result};
use floorsearch::{SearchTrace, TraceEvent, host::HostElement};
use serde::de::DeserializeOwned;
use std::{fmt, fs, path::Path};

/// Checks if a file exists and is readable
pub fn validate_file_exists(path: &str) -> Result<()> {
    let file_path = Path::new(path);
    if !file_path.exists() {
        anyhow::bail!("File does not exist: {}", path);
    }
    if !file_path.is_file() {
        anyhow::bail!("Path is not a file: {}", path);
    }
    Ok(())
}

/// Reads a JSON array of numbers of the given element kind.
pub fn read_array<T: HostElement + DeserializeOwned>(path: &str) -> Result<Vec<T>> {
    validate_file_exists(path)?;
    let text = fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse {path} as an array of {}", T::KIND))
}

/// Writes `value` as JSON to `output`, or to stdout when no output path is given.
pub fn write_json<V: serde::Serialize>(value: &V, output: Option<&str>) -> Result<()> {
    let json = serde_json::to_string(value)?;
    match output {
        Some(path) => {
            fs::write(path, json + "\n").with_context(|| format!("Failed to write {path}"))
        }
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

/// Trace sink printing every search step to stderr.
pub struct StderrTrace;

impl<T: fmt::Debug> SearchTrace<T> for StderrTrace {
    fn event(&mut self, event: &TraceEvent<'_, T>) {
        eprintln!("{event}");
    }
}
