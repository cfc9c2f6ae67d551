//! Input: loads records as `serde_json::Value`s.
//!
//! Accepted shapes, tried in order:
//!
//! 1. a JSON array: each element is a record,
//! 2. any other single JSON value: one record,
//! 3. JSON Lines: one record per non-blank line, used only when the first
//!    line parses as a record by itself.

use anyhow::{Context, Result};
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Parse `source` into records. Blank input yields no records.
pub fn parse_records(source: &str) -> Result<Vec<Value>> {
    let trimmed = source.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Array(records)) => Ok(records),
        Ok(record) => Ok(vec![record]),
        // JSON Lines only if the first line is a record on its own.
        Err(err) => {
            let first_line = trimmed.lines().next().unwrap_or_default();
            if serde_json::from_str::<Value>(first_line).is_ok() {
                parse_json_lines(trimmed)
            } else {
                Err(anyhow::Error::new(err).context("invalid JSON document"))
            }
        }
    }
}

fn parse_json_lines(source: &str) -> Result<Vec<Value>> {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(n, line)| {
            serde_json::from_str(line).with_context(|| format!("invalid JSON record on line {}", n + 1))
        })
        .collect()
}

/// Read records from `path`, or from stdin when `path` is `None` or `-`.
pub fn load_records(path: Option<&Path>) -> Result<Vec<Value>> {
    let source = match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        _ => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("failed to read records from stdin")?;
            source
        }
    };
    let records = parse_records(&source)?;
    tracing::debug!(records = records.len(), "input: records loaded");
    Ok(records)
}
