//! Resolving the [`Scenario`] to search from command-line arguments.
//!
//! Precedence: `--scenario` file, then `--grid` file (corner to corner),
//! then the built-in sample. `--start` / `--goal` override either.

use std::fs;
use std::path::Path;

use anyhow::Context;
use gridpath_core::{CostGrid, Scenario};

use crate::args::Args;

pub fn load_scenario(args: &Args) -> anyhow::Result<Scenario> {
    let mut scenario = if let Some(path) = &args.scenario {
        let text = read(path)?;
        serde_json::from_str(&text)
            .with_context(|| format!("invalid scenario file {}", path.display()))?
    } else if let Some(path) = &args.grid {
        let text = read(path)?;
        let grid = parse_grid(&text, is_json(path))
            .with_context(|| format!("invalid grid file {}", path.display()))?;
        Scenario::corner_to_corner(grid)
    } else {
        log::debug!("no scenario or grid given, using the sample board");
        Scenario::sample()
    };

    if let Some(start) = args.start {
        scenario.start = start;
    }
    if let Some(goal) = args.goal {
        scenario.goal = goal;
    }

    log::info!(
        "searching a {} grid from {} to {}",
        scenario.grid.bounds(),
        scenario.start,
        scenario.goal
    );
    Ok(scenario)
}

/// Parse grid text as JSON rows (`null` for walls) or the plain text format.
pub fn parse_grid(text: &str, json: bool) -> anyhow::Result<CostGrid> {
    if json {
        Ok(serde_json::from_str(text)?)
    } else {
        Ok(CostGrid::parse(text)?)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn read(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
}
