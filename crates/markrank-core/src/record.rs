//! Student records: `<name>,<score 1>,...,<score N>` per line, normalized against units

use std::io::BufRead;

use serde::Serialize;
use tracing::debug;

use crate::bail_invalid_number;
use crate::config::ParsePolicy;
use crate::error::{MarkrankError, Result};
use crate::text::{is_blank, numbered_lines, parse_number, split_fields};
use crate::unit::Unit;

/// Source name used in diagnostics for the records input
pub const RECORDS_SOURCE: &str = "records";

/// A student's scores, each scaled to a fraction of the unit's max score
///
/// `scores[i]` corresponds to `units[i]`. `None` marks a unit the student did
/// not sit, which is distinct from a score of zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedRecord {
    pub name: String,
    pub scores: Vec<Option<f64>>,
}

impl NormalizedRecord {
    /// Scores the student actually has
    pub fn present_scores(&self) -> impl Iterator<Item = f64> + '_ {
        self.scores.iter().flatten().copied()
    }
}

/// Parse and normalize student records against `units`
///
/// A line is accepted only when it has exactly `units.len() + 1` fields.
/// Other lines are dropped, or rejected under [`ParsePolicy::Strict`].
pub fn parse_records<R: BufRead>(
    reader: R,
    units: &[Unit],
    policy: ParsePolicy,
) -> Result<Vec<NormalizedRecord>> {
    let expected = units.len() + 1;
    let mut records = Vec::new();

    for entry in numbered_lines(reader) {
        let (line_no, line) = entry?;
        let parts = split_fields(&line);

        if parts.len() != expected {
            if policy.is_strict() && !is_blank(&line) {
                return Err(MarkrankError::malformed_row(
                    RECORDS_SOURCE,
                    line_no,
                    expected,
                    parts.len(),
                ));
            }
            debug!(line = line_no, fields = parts.len(), expected, "skip_record_line");
            continue;
        }

        let scores = parts[1..]
            .iter()
            .zip(units)
            .map(|(raw, unit)| normalize(raw, unit, line_no))
            .collect::<Result<Vec<_>>>()?;

        records.push(NormalizedRecord {
            name: parts[0].to_string(),
            scores,
        });
    }

    debug!(records = records.len(), "parse_records");
    Ok(records)
}

fn normalize(raw: &str, unit: &Unit, line_no: usize) -> Result<Option<f64>> {
    if raw.is_empty() {
        return Ok(None);
    }

    let Some(score) = parse_number(raw) else {
        bail_invalid_number!(RECORDS_SOURCE, line_no, raw);
    };

    if unit.max_score == 0.0 {
        return Err(MarkrankError::ZeroMaxScore {
            unit: unit.name.clone(),
            line: line_no,
        });
    }

    Ok(Some(score / unit.max_score))
}
