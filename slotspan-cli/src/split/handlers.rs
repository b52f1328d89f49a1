use std::io::{self, BufWriter, Write};

use anyhow::Result;
use chrono::TimeDelta;
use clap::ArgMatches;

use slotspan_core::utils::parse_timestamp;
use slotspan_sched::consts::{DEFAULT_GAP_SECONDS, DEFAULT_SLOT_COUNT};
use slotspan_sched::split_range;

pub fn run_split(matches: &ArgMatches) -> Result<()> {
    let start = matches
        .get_one::<String>("start")
        .expect("A window start is required.");

    let end = matches
        .get_one::<String>("end")
        .expect("A window end is required.");

    let count = match matches.get_one::<String>("slots") {
        Some(raw) => raw.parse::<u32>()?,
        None => DEFAULT_SLOT_COUNT,
    };

    let gap_seconds = match matches.get_one::<String>("gap") {
        Some(raw) => raw.parse::<i64>()?,
        None => DEFAULT_GAP_SECONDS,
    };

    // parse at the boundary, compute on typed values
    let start = parse_timestamp(start)?;
    let end = parse_timestamp(end)?;

    let slots = split_range(start, end, count, TimeDelta::seconds(gap_seconds))?;

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    for slot in slots {
        writeln!(writer, "{slot}")?;
    }
    writer.flush()?;

    Ok(())
}
