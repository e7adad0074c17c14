//! gridpath — find the cheapest path across a weighted grid.
//!
//! Usage:
//!   gridpath [--scenario FILE | --grid FILE] [--start ROW,COL] [--goal ROW,COL]
//!            [--format text|json] [--preview N] [-v]
//!
//! Without a file the built-in 6x6 sample board is searched.

mod args;
mod config;
mod render;

use std::io;
use std::time::Instant;

use clap::Parser;
use gridpath_search::find_path;
use tracing_subscriber::EnvFilter;

use args::{Args, Format};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let scenario = config::load_scenario(&args)?;

    let started = Instant::now();
    let result = find_path(&scenario.grid, scenario.start, scenario.goal)?;
    let elapsed = started.elapsed();

    let mut out = io::stdout().lock();
    match args.format {
        Format::Text => render::write_text(&mut out, &scenario, &result, elapsed, args.preview)?,
        Format::Json => render::write_json(&mut out, &scenario, &result, elapsed)?,
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
