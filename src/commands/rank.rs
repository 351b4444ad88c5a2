//! Ranking driver: obtain both inputs, then parse, average, rank and print
//!
//! States: `Start → UnitsOpened → RecordsOpened → Processed → Done`, with
//! terminal early exits `Start → FailedUnits` and `UnitsOpened → FailedRecords`.
//! A file that cannot be opened produces one diagnostic line and a clean stop;
//! the records path is never asked for when the units file fails to open.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use markrank_core::error::Result;
use markrank_core::report::render;
use markrank_core::{run_pipeline, RankConfig};

use super::prompt::{open_input, path_or_ask, RECORDS_PROMPT, UNITS_PROMPT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Start,
    UnitsOpened,
    RecordsOpened,
    Processed,
    Done,
    FailedUnits,
    FailedRecords,
}

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The report was printed
    Ranked { students: usize },
    /// The units file could not be opened
    UnitsUnavailable(PathBuf),
    /// The records file could not be opened
    RecordsUnavailable(PathBuf),
}

pub struct Driver<'a, R, W> {
    input: R,
    out: W,
    config: &'a RankConfig,
    quiet: bool,
    state: DriverState,
}

impl<'a, R: BufRead, W: Write> Driver<'a, R, W> {
    pub fn new(input: R, out: W, config: &'a RankConfig, quiet: bool) -> Self {
        Self {
            input,
            out,
            config,
            quiet,
            state: DriverState::Start,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    fn transition(&mut self, next: DriverState) {
        debug!(from = ?self.state, to = ?next, "driver_state");
        self.state = next;
    }

    /// Run to a terminal state; `units` and `records` skip their prompts when given
    pub fn run(&mut self, units: Option<&Path>, records: Option<&Path>) -> Result<Outcome> {
        let units_path =
            path_or_ask(units, &mut self.input, &mut self.out, UNITS_PROMPT, self.quiet)?;
        let units_file = match open_input(&units_path) {
            Ok(file) => file,
            Err(e) => {
                debug!(path = %units_path.display(), error = %e, "open_units");
                writeln!(
                    self.out,
                    "Could not open the units file {} for reading",
                    units_path.display()
                )?;
                self.transition(DriverState::FailedUnits);
                return Ok(Outcome::UnitsUnavailable(units_path));
            }
        };
        self.transition(DriverState::UnitsOpened);

        let records_path =
            path_or_ask(records, &mut self.input, &mut self.out, RECORDS_PROMPT, self.quiet)?;
        let records_file = match open_input(&records_path) {
            Ok(file) => file,
            Err(e) => {
                debug!(path = %records_path.display(), error = %e, "open_records");
                writeln!(
                    self.out,
                    "Could not open the students records file {} for reading",
                    records_path.display()
                )?;
                self.transition(DriverState::FailedRecords);
                return Ok(Outcome::RecordsUnavailable(records_path));
            }
        };
        self.transition(DriverState::RecordsOpened);

        let ranked = run_pipeline(units_file, records_file, self.config.parse_policy())?;
        self.transition(DriverState::Processed);

        let report = render(&ranked, self.config.format, self.config.precision)?;
        self.out.write_all(report.as_bytes())?;
        self.out.flush()?;
        self.transition(DriverState::Done);

        Ok(Outcome::Ranked {
            students: ranked.len(),
        })
    }
}
