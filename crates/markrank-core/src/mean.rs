//! Per-student mean of normalized scores

use serde::Serialize;

use crate::record::NormalizedRecord;

/// A student's mean normalized score
///
/// A student with no present scores gets `f64::INFINITY`, which ranks them
/// ahead of every finite mean.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentMean {
    pub name: String,
    pub mean: f64,
}

impl StudentMean {
    pub fn new(name: impl Into<String>, mean: f64) -> Self {
        Self {
            name: name.into(),
            mean,
        }
    }

    /// False for the "no scores" sentinel
    pub fn is_ranked(&self) -> bool {
        self.mean != f64::INFINITY
    }
}

/// Compute one mean per record, preserving order
pub fn compute_means(records: &[NormalizedRecord]) -> Vec<StudentMean> {
    records.iter().map(mean_of).collect()
}

fn mean_of(record: &NormalizedRecord) -> StudentMean {
    let (count, total) = record
        .present_scores()
        .fold((0usize, 0.0f64), |(count, total), score| {
            (count + 1, total + score)
        });

    let mean = if count > 0 {
        total / count as f64
    } else {
        f64::INFINITY
    };

    StudentMean::new(record.name.clone(), mean)
}
