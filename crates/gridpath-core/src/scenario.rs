//! A search problem: a grid plus its two endpoints.

use crate::geom::Coord;
use crate::grid::CostGrid;

/// Costs of the built-in sample board.
///
/// 1 is road, 5 is forest, 10 is swamp.
pub const SAMPLE_COSTS: [[u32; 6]; 6] = [
    [1, 1, 1, 5, 5, 10],
    [1, 5, 1, 1, 5, 10],
    [1, 5, 1, 1, 1, 1],
    [1, 5, 5, 5, 1, 1],
    [1, 1, 1, 1, 1, 1],
    [10, 10, 5, 1, 1, 1],
];

/// A grid together with the start and goal of a search.
///
/// Endpoints are not validated here; the search reports out-of-bounds
/// endpoints as errors.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    pub grid: CostGrid,
    pub start: Coord,
    pub goal: Coord,
}

impl Scenario {
    /// Create a new scenario.
    pub fn new(grid: CostGrid, start: Coord, goal: Coord) -> Self {
        Self { grid, start, goal }
    }

    /// A scenario running from the top-left to the bottom-right corner.
    pub fn corner_to_corner(grid: CostGrid) -> Self {
        let goal = grid.bounds().last().unwrap_or(Coord::ORIGIN);
        Self::new(grid, Coord::ORIGIN, goal)
    }

    /// The 6x6 sample board, from (0, 0) to (5, 5).
    pub fn sample() -> Self {
        let grid = match CostGrid::from_rows(&SAMPLE_COSTS) {
            Ok(g) => g,
            Err(e) => unreachable!("sample grid is valid: {e}"),
        };
        Self::corner_to_corner(grid)
    }
}
