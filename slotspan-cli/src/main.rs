mod overlap;
mod split;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "slotspan";
    pub const BIN_NAME: &str = "slotspan";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Databio")
        .about("Divide time windows into evenly sized slots and find where two parties' available windows coincide.")
        .subcommand_required(true)
        .subcommand(split::cli::create_split_cli())
        .subcommand(overlap::cli::create_overlap_cli())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // SPLIT
        //
        Some((split::cli::SPLIT_CMD, matches)) => {
            split::handlers::run_split(matches)?;
        }

        //
        // OVERLAP
        //
        Some((overlap::cli::OVERLAP_CMD, matches)) => {
            overlap::handlers::run_overlap(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
