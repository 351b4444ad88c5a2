//! CLI argument parsing for markrank
//!
//! Paths not given on the command line are prompted for on stdin.

pub mod parse;

use std::path::PathBuf;

use clap::Parser;

use markrank_core::config::ConfigOverrides;
use markrank_core::OutputFormat;
use parse::parse_output_format;

/// Markrank - rank students by mean normalized score across units
#[derive(Parser, Debug)]
#[command(name = "markrank")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Units file (`<unit>,<max score>` per line); prompted for when omitted
    #[arg(long, short = 'u')]
    pub units: Option<PathBuf>,

    /// Student records file (`<name>,<score>,...` per line); prompted for when omitted
    #[arg(long, short = 'r')]
    pub records: Option<PathBuf>,

    /// Configuration file (overrides the default config location)
    #[arg(long, env = "MARKRANK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Reject rows with the wrong number of fields instead of skipping them
    #[arg(long)]
    pub strict: bool,

    /// Decimal places for rendered means
    #[arg(long)]
    pub precision: Option<usize>,

    /// Output format
    #[arg(long, value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,

    /// Suppress prompts and error messages
    #[arg(long, short)]
    pub quiet: bool,

    /// Log pipeline stages and timings to stderr
    #[arg(long, short)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `debug`, `markrank=trace`)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    /// Flag values that take precedence over the config file
    pub fn config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            strict: self.strict,
            precision: self.precision,
            format: self.format,
        }
    }
}
