//! Command dispatch logic for markrank

use std::io;
use std::time::Instant;

use tracing::debug;

use crate::cli::Cli;
use crate::commands::rank::Driver;
use markrank_core::error::Result;
use markrank_core::RankConfig;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config =
        RankConfig::resolve(cli.config.as_deref())?.with_overrides(cli.config_overrides());
    debug!(
        elapsed = ?start.elapsed(),
        strict = config.strict,
        precision = config.precision,
        format = %config.format,
        "resolve_config"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut driver = Driver::new(stdin.lock(), stdout.lock(), &config, cli.quiet);
    let outcome = driver.run(cli.units.as_deref(), cli.records.as_deref())?;

    debug!(elapsed = ?start.elapsed(), ?outcome, "rank");
    Ok(())
}
