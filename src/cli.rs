//! CLI interface for Wayfare.
//!
//! Each subcommand is non-interactive: arguments in, itinerary out.
//! Nothing is kept between invocations; `export` replans the trip and
//! applies `--edit` overrides before writing the document.

mod format;
mod trip;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use jiff::civil::Date;

use crate::config::Config;

use trip::EditArg;

/// Wayfare: plan a trip day by day.
#[derive(Debug, Parser)]
#[command(name = "wayfare", after_long_help = WORKFLOW_HELP)]
pub struct Cli {
    /// Log pipeline steps to stderr. `RUST_LOG` takes precedence.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

const WORKFLOW_HELP: &str = r"Workflow: planning a weekend
  1. wayfare destinations
  2. wayfare plan --destination paris --from 2025-04-09 --to 2025-04-10 --travelers 2
  3. wayfare export --destination paris --from 2025-04-09 --to 2025-04-10 --travelers 2 \
       --edit 1:3='Picnic by the Seine' --out paris.txt

Edits address activities as DAY:SLOT, both counted from 1 as printed by `plan`.";

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the destinations a trip can be planned for.
    Destinations,

    /// Generate a day-by-day itinerary and print it.
    Plan {
        #[command(flatten)]
        trip: TripArgs,

        /// Print the itinerary as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Generate an itinerary, apply edits, and write it as a paginated document.
    Export {
        #[command(flatten)]
        trip: TripArgs,

        /// Replace an activity's text: `DAY:SLOT=TEXT`. Repeatable.
        #[arg(long = "edit", value_name = "DAY:SLOT=TEXT")]
        edits: Vec<EditArg>,

        /// Where to write the document. Defaults to the configured output.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

/// Trip parameters shared by `plan` and `export`.
#[derive(Debug, Args)]
pub struct TripArgs {
    /// Destination code or name (see `wayfare destinations`).
    #[arg(long)]
    destination: String,

    /// First day of the trip (YYYY-MM-DD).
    #[arg(long)]
    from: Date,

    /// Last day of the trip (YYYY-MM-DD), inclusive.
    #[arg(long)]
    to: Date,

    /// Number of travelers. Defaults to the configured value.
    #[arg(long)]
    travelers: Option<u32>,
}

/// Run a parsed command line, returning an error message on failure.
pub fn run(cli: Cli, config: &Config) -> Result<(), String> {
    match cli.command {
        Command::Destinations => {
            trip::cmd_destinations();
            Ok(())
        }
        Command::Plan { trip, json } => trip::cmd_plan(config, &trip, json),
        Command::Export { trip, edits, out } => {
            trip::cmd_export(config, &trip, &edits, out.as_deref())
        }
    }
}
