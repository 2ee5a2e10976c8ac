use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use wayfare::cli::{self, Cli};
use wayfare::config::Config;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = cli::run(cli, &config) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Log to stderr so stdout stays clean for itineraries and JSON.
fn init_logging(verbose: bool) {
    let default = if verbose { "wayfare=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
