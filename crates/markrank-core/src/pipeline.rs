//! Units → records → means → ranking, over already-opened inputs

use std::io::BufRead;
use std::time::Instant;

use crate::config::ParsePolicy;
use crate::error::Result;
use crate::mean::{compute_means, StudentMean};
use crate::record::parse_records;
use crate::report::rank;
use crate::trace_time;
use crate::unit::parse_units;

/// Run every stage and return students best-first
pub fn run_pipeline<U: BufRead, R: BufRead>(
    units_input: U,
    records_input: R,
    policy: ParsePolicy,
) -> Result<Vec<StudentMean>> {
    let start = Instant::now();

    let units = parse_units(units_input, policy)?;
    trace_time!(start, "units_parsed", units = units.len());

    let records = parse_records(records_input, &units, policy)?;
    trace_time!(start, "records_parsed", records = records.len());

    let means = compute_means(&records);
    let ranked = rank(means);
    trace_time!(start, "ranked", students = ranked.len());

    Ok(ranked)
}
