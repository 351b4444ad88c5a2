//! Markrank Core Library
//!
//! Parses unit definitions and student score records, normalizes every score
//! against its unit's maximum, and ranks students by their mean.

pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod mean;
pub mod pipeline;
pub mod record;
pub mod report;
pub mod text;
pub mod unit;

pub use config::{ParsePolicy, RankConfig};
pub use error::{MarkrankError, Result};
pub use format::OutputFormat;
pub use mean::StudentMean;
pub use pipeline::run_pipeline;
pub use record::NormalizedRecord;
pub use unit::Unit;
