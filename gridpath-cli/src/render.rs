use std::io::{self, Write};
use std::time::Duration;

use gridpath_core::{Coord, Scenario};
use gridpath_search::SearchResult;
use serde::Serialize;

const RULE: &str = "--------------------------------------------------";

/// Human-readable report: the board, the outcome and an abbreviated path
/// showing `preview` coordinates at each end. A `preview` of 0 prints the
/// whole path.
pub fn write_text<W: Write>(
    out: &mut W,
    scenario: &Scenario,
    result: &SearchResult,
    elapsed: Duration,
    preview: usize,
) -> io::Result<()> {
    writeln!(out, "Weighted grid A* search")?;
    writeln!(out, "Start: {}, Goal: {}", scenario.start, scenario.goal)?;
    writeln!(out, "Tile costs (# = wall):")?;
    writeln!(out)?;
    writeln!(out, "{}", scenario.grid)?;
    writeln!(out, "{RULE}")?;

    let Some(route) = &result.route else {
        writeln!(out, "Goal is unreachable.")?;
        writeln!(out, "Nodes explored: {}", result.stats.nodes_explored)?;
        return Ok(());
    };

    writeln!(out, "Path found.")?;
    writeln!(out, "Total cost:     {}", route.cost())?;
    writeln!(out, "Steps:          {}", route.steps())?;
    writeln!(
        out,
        "Nodes explored: {} ({} expanded)",
        result.stats.nodes_explored, result.stats.nodes_expanded
    )?;
    writeln!(out, "Time taken:     {:.6} s", elapsed.as_secs_f64())?;
    writeln!(out)?;
    writeln!(out, "Path:")?;

    let cells = route.cells();
    if preview == 0 || cells.len() <= preview.saturating_mul(2) {
        writeln!(out, "{}", join(cells))?;
    } else {
        writeln!(
            out,
            "{} ... {}",
            join(route.head(preview)),
            join(route.tail(preview))
        )?;
    }
    Ok(())
}

fn join(cells: &[Coord]) -> String {
    cells
        .iter()
        .map(Coord::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Serialize)]
struct JsonReport<'a> {
    start: Coord,
    goal: Coord,
    found: bool,
    total_cost: u64,
    steps: usize,
    nodes_explored: usize,
    nodes_expanded: usize,
    elapsed_secs: f64,
    path: &'a [Coord],
}

/// Machine-readable report with the full path.
pub fn write_json<W: Write>(
    out: &mut W,
    scenario: &Scenario,
    result: &SearchResult,
    elapsed: Duration,
) -> anyhow::Result<()> {
    let report = JsonReport {
        start: scenario.start,
        goal: scenario.goal,
        found: result.is_found(),
        total_cost: result.total_cost(),
        steps: result.steps(),
        nodes_explored: result.stats.nodes_explored,
        nodes_expanded: result.stats.nodes_expanded,
        elapsed_secs: elapsed.as_secs_f64(),
        path: result.path(),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::CostGrid;
    use gridpath_search::find_path;

    fn text(scenario: &Scenario, preview: usize) -> String {
        let result = find_path(&scenario.grid, scenario.start, scenario.goal).unwrap();
        let mut buf = Vec::new();
        let elapsed = Duration::from_micros(67);
        write_text(&mut buf, scenario, &result, elapsed, preview).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn sample_text_report() {
        let out = text(&Scenario::sample(), 5);
        assert!(out.contains("Start: (0, 0), Goal: (5, 5)"));
        assert!(out.contains("10 10  5  1  1  1"));
        assert!(out.contains("Total cost:     10"));
        assert!(out.contains("Steps:          10"));
        assert!(out.contains("Nodes explored: 23 (22 expanded)"));
        assert!(out.contains("Time taken:     0.000067 s"));
        let path = "(0, 0) (0, 1) (0, 2) (1, 2) (1, 3) ... (2, 4) (2, 5) (3, 5) (4, 5) (5, 5)";
        assert!(out.contains(path), "{out}");
    }

    #[test]
    fn short_paths_are_printed_in_full() {
        let grid = CostGrid::uniform(1, 3, 1).unwrap();
        let out = text(&Scenario::corner_to_corner(grid), 5);
        assert!(out.contains("\n(0, 0) (0, 1) (0, 2)\n"));
        assert!(!out.contains("..."));
    }

    #[test]
    fn zero_preview_prints_the_whole_path() {
        let out = text(&Scenario::sample(), 0);
        assert!(!out.contains("..."), "{out}");
        assert!(out.contains("\n(0, 0) (0, 1) (0, 2) (1, 2) (1, 3) (2, 3) (2, 4)"));
    }

    #[test]
    fn unreachable_report() {
        let grid = CostGrid::parse("1 #\n# 1").unwrap();
        let out = text(&Scenario::corner_to_corner(grid), 5);
        assert!(out.contains("Goal is unreachable."));
        assert!(!out.contains("Total cost"));
    }

    #[test]
    fn json_report() {
        let s = Scenario::sample();
        let result = find_path(&s.grid, s.start, s.goal).unwrap();
        let mut buf = Vec::new();
        write_json(&mut buf, &s, &result, Duration::ZERO).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(v["found"], true);
        assert_eq!(v["total_cost"], 10);
        assert_eq!(v["nodes_explored"], 23);
        assert_eq!(v["path"].as_array().unwrap().len(), 11);
        assert_eq!(v["path"][1]["col"], 1);
        assert_eq!(v["goal"]["row"], 5);
    }
}
