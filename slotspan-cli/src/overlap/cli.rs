use clap::{Command, arg};

pub const OVERLAP_CMD: &str = slotspan_sched::consts::OVERLAP_CMD;

pub fn create_overlap_cli() -> Command {
    Command::new(OVERLAP_CMD)
        .author("Databio")
        .about("Find where two time windows coincide, slot by slot")
        .arg_required_else_help(true)
        .arg(arg!(<start_a> "First window start, formatted as YYYY-MM-DD HH:MM:SS"))
        .arg(arg!(<end_a> "First window end"))
        .arg(arg!(<start_b> "Second window start"))
        .arg(arg!(<end_b> "Second window end"))
        .arg(arg!(--"slots-a" <slots> "Number of slots for the first window (default 1)"))
        .arg(
            arg!(--"gap-a" <gap> "Idle seconds between the first window's slots (default 0, may be negative)")
                .allow_negative_numbers(true),
        )
        .arg(arg!(--"slots-b" <slots> "Number of slots for the second window (default 1)"))
        .arg(
            arg!(--"gap-b" <gap> "Idle seconds between the second window's slots (default 0, may be negative)")
                .allow_negative_numbers(true),
        )
        .arg(arg!(--genuine "Keep only overlaps with strictly positive duration"))
}
