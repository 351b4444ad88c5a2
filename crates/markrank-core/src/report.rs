//! Ranking and rendering of student means
//!
//! Students are ordered descending by the pair `(mean, name)`: on equal means
//! the lexicographically greater name comes first. Students without scores
//! carry an infinite mean and therefore lead the list.

use std::cmp::Ordering;

use serde::Serialize;

use crate::error::Result;
use crate::format::OutputFormat;
use crate::mean::StudentMean;

/// Sort students best-first; the sort is stable for fully equal pairs
pub fn rank(mut means: Vec<StudentMean>) -> Vec<StudentMean> {
    means.sort_by(|a, b| cmp_mean(b.mean, a.mean).then_with(|| b.name.cmp(&a.name)));
    means
}

/// Numeric ordering that treats `-0.0 == 0.0` and still totally orders NaN
fn cmp_mean(a: f64, b: f64) -> Ordering {
    if a == b {
        Ordering::Equal
    } else {
        a.total_cmp(&b)
    }
}

/// Render a mean with `precision` decimals; non-finite values use `inf`, `-inf`, `nan`
pub fn format_mean(mean: f64, precision: usize) -> String {
    if mean.is_nan() {
        "nan".to_string()
    } else {
        format!("{:.*}", precision, mean)
    }
}

/// A `<name>: <mean>` report line
pub fn format_line(student: &StudentMean, precision: usize) -> String {
    format!("{}: {}", student.name, format_mean(student.mean, precision))
}

/// Escape double quotes for embedding a name in a records line
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

#[derive(Debug, Serialize)]
struct RankedStudent<'a> {
    rank: usize,
    name: &'a str,
    mean: Option<f64>,
    ranked: bool,
}

/// Render already-ranked students in the requested format
///
/// The returned text ends with a newline unless there are no students in
/// human format, in which case it is empty.
pub fn render(ranked: &[StudentMean], format: OutputFormat, precision: usize) -> Result<String> {
    let mut out = String::new();

    match format {
        OutputFormat::Human => {
            for student in ranked {
                out.push_str(&format_line(student, precision));
                out.push('\n');
            }
        }
        OutputFormat::Json => {
            let rows: Vec<RankedStudent> = ranked
                .iter()
                .enumerate()
                .map(|(idx, student)| RankedStudent {
                    rank: idx + 1,
                    name: &student.name,
                    mean: student.mean.is_finite().then_some(student.mean),
                    ranked: student.is_ranked(),
                })
                .collect();
            out.push_str(&serde_json::to_string_pretty(&rows)?);
            out.push('\n');
        }
        OutputFormat::Records => {
            out.push_str(&format!("H markrank=1 students={}\n", ranked.len()));
            for (idx, student) in ranked.iter().enumerate() {
                out.push_str(&format!(
                    "S {} {} \"{}\"\n",
                    idx + 1,
                    format_mean(student.mean, precision),
                    escape_quotes(&student.name)
                ));
            }
        }
    }

    Ok(out)
}
