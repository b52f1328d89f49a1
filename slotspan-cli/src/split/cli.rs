use clap::{Command, arg};

pub const SPLIT_CMD: &str = slotspan_sched::consts::SPLIT_CMD;

pub fn create_split_cli() -> Command {
    Command::new(SPLIT_CMD)
        .author("Databio")
        .about("Divide a time window into evenly sized, gap-separated slots")
        .arg_required_else_help(true)
        .arg(arg!(<start> "Window start, formatted as YYYY-MM-DD HH:MM:SS"))
        .arg(arg!(<end> "Window end, formatted as YYYY-MM-DD HH:MM:SS"))
        .arg(arg!(-n --slots <slots> "Number of slots to divide the window into (default 1)"))
        .arg(
            arg!(-g --gap <gap> "Idle seconds between consecutive slots (default 0, may be negative)")
                .allow_negative_numbers(true),
        )
}
