use std::io::{self, BufWriter, Write};

use anyhow::Result;
use chrono::TimeDelta;
use clap::ArgMatches;

use slotspan_core::TimeSlot;
use slotspan_core::utils::parse_timestamp;
use slotspan_sched::consts::{DEFAULT_GAP_SECONDS, DEFAULT_SLOT_COUNT};
use slotspan_sched::{filter_genuine, pairwise_overlap, split_range};

pub fn run_overlap(matches: &ArgMatches) -> Result<()> {
    let window_a = build_window(matches, "start_a", "end_a", "slots-a", "gap-a")?;
    let window_b = build_window(matches, "start_b", "end_b", "slots-b", "gap-b")?;

    let mut overlaps = pairwise_overlap(&window_a, &window_b);
    if matches.get_flag("genuine") {
        overlaps = filter_genuine(overlaps);
    }

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    for slot in overlaps {
        writeln!(writer, "{slot}")?;
    }
    writer.flush()?;

    Ok(())
}

fn build_window(
    matches: &ArgMatches,
    start_id: &str,
    end_id: &str,
    slots_id: &str,
    gap_id: &str,
) -> Result<Vec<TimeSlot>> {
    let start = matches
        .get_one::<String>(start_id)
        .expect("A window start is required.");

    let end = matches
        .get_one::<String>(end_id)
        .expect("A window end is required.");

    let count = match matches.get_one::<String>(slots_id) {
        Some(raw) => raw.parse::<u32>()?,
        None => DEFAULT_SLOT_COUNT,
    };

    let gap_seconds = match matches.get_one::<String>(gap_id) {
        Some(raw) => raw.parse::<i64>()?,
        None => DEFAULT_GAP_SECONDS,
    };

    let start = parse_timestamp(start)?;
    let end = parse_timestamp(end)?;

    let slots = split_range(start, end, count, TimeDelta::seconds(gap_seconds))?;

    Ok(slots)
}
