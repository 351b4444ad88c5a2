//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::format::OutputFormat;

/// Decimal places used when rendering a mean
pub const DEFAULT_PRECISION: usize = 3;

/// Ranking configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RankConfig {
    /// Fail on rows with the wrong number of fields instead of dropping them
    #[serde(default)]
    pub strict: bool,

    /// Decimal places for rendered means
    #[serde(default = "default_precision")]
    pub precision: usize,

    /// Report format
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            strict: false,
            precision: DEFAULT_PRECISION,
            format: OutputFormat::default(),
        }
    }
}

fn default_precision() -> usize {
    DEFAULT_PRECISION
}

/// How the parsers treat rows that do not have the expected shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParsePolicy {
    /// Silently drop malformed rows
    #[default]
    Lenient,
    /// Reject malformed rows with an error; blank lines are still skipped
    Strict,
}

impl ParsePolicy {
    pub fn is_strict(self) -> bool {
        matches!(self, ParsePolicy::Strict)
    }
}
