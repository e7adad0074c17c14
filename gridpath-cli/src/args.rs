use std::path::PathBuf;

use clap::builder::RangedU64ValueParser;
use clap::{Parser, ValueEnum};
use gridpath_core::Coord;

#[derive(Parser, Debug)]
#[command(name = "gridpath", version)]
#[command(about = "Find the cheapest 4-way path across a weighted grid")]
pub struct Args {
    /// Scenario JSON file holding `grid`, `start` and `goal`.
    #[arg(long, conflicts_with = "grid")]
    pub scenario: Option<PathBuf>,

    /// Grid file. Parsed as JSON when the extension is `.json`, otherwise as
    /// text: whitespace-separated costs, one row per line, `#` for walls.
    /// Without endpoints the search runs corner to corner.
    #[arg(long)]
    pub grid: Option<PathBuf>,

    /// Start cell, overriding the scenario's.
    #[arg(long, value_name = "ROW,COL")]
    pub start: Option<Coord>,

    /// Goal cell, overriding the scenario's.
    #[arg(long, value_name = "ROW,COL")]
    pub goal: Option<Coord>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Coordinates shown at each end of the path in text output.
    #[arg(
        long,
        default_value_t = 5,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub preview: usize,

    /// Log search details to stderr. `RUST_LOG` takes precedence.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}
