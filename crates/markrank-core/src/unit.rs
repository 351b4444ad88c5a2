//! Unit definitions: `<name>,<max score>` per line

use std::io::BufRead;

use serde::Serialize;
use tracing::debug;

use crate::bail_invalid_number;
use crate::config::ParsePolicy;
use crate::error::{MarkrankError, Result};
use crate::text::{is_blank, numbered_lines, parse_number, split_fields};

/// Source name used in diagnostics for the units input
pub const UNITS_SOURCE: &str = "units";

/// A unit and the maximum score available in it
///
/// The position of a unit in the parsed list is the column its scores occupy
/// in every student record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Unit {
    pub name: String,
    pub max_score: f64,
}

impl Unit {
    pub fn new(name: impl Into<String>, max_score: f64) -> Self {
        Self {
            name: name.into(),
            max_score,
        }
    }
}

/// Parse unit definitions in file order
///
/// Lines that are not exactly two non-empty fields are skipped, or rejected
/// under [`ParsePolicy::Strict`]. A max score that is not a number is always
/// an error.
pub fn parse_units<R: BufRead>(reader: R, policy: ParsePolicy) -> Result<Vec<Unit>> {
    let mut units = Vec::new();

    for entry in numbered_lines(reader) {
        let (line_no, line) = entry?;
        let parts = split_fields(&line);

        let filled = parts.iter().filter(|p| !p.is_empty()).count();

        let [name, max] = parts.as_slice() else {
            reject_row(policy, &line, line_no, filled)?;
            continue;
        };

        if filled != 2 {
            reject_row(policy, &line, line_no, filled)?;
            continue;
        }

        let Some(max_score) = parse_number(max) else {
            bail_invalid_number!(UNITS_SOURCE, line_no, max);
        };

        units.push(Unit::new(*name, max_score));
    }

    debug!(units = units.len(), "parse_units");
    Ok(units)
}

fn reject_row(policy: ParsePolicy, line: &str, line_no: usize, found: usize) -> Result<()> {
    if policy.is_strict() && !is_blank(line) {
        return Err(MarkrankError::malformed_row(UNITS_SOURCE, line_no, 2, found));
    }
    debug!(line = line_no, fields = found, "skip_unit_line");
    Ok(())
}
