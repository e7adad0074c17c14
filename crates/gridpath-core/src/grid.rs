//! The [`CostGrid`] type — a rectangular map of traversal costs.
//!
//! Each cell is a [`Tile`]: either open ground with a cost of at least 1, or
//! an impassable wall. The cost of a cell is paid when a path steps *onto*
//! it; the starting cell is free.
//!
//! ## Text format
//!
//! ```text
//! ; comment lines and blank lines are ignored
//! 1 1 5 #
//! 1, 10, 1, 1
//! ```
//!
//! One row per line. Cells are separated by whitespace and/or commas. A
//! positive integer is a cost, `#` is a wall. [`CostGrid`]'s `Display`
//! writes this format.

use std::fmt;

use thiserror::Error;

use crate::geom::{Bounds, Coord};

/// A single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    /// Passable ground. The cost must be at least 1.
    Open(u32),
    /// Impassable.
    Wall,
}

impl Tile {
    /// Traversal cost, or `None` for walls.
    #[inline]
    pub const fn cost(self) -> Option<u32> {
        match self {
            Tile::Open(c) => Some(c),
            Tile::Wall => None,
        }
    }
}

impl From<u32> for Tile {
    fn from(cost: u32) -> Self {
        Tile::Open(cost)
    }
}

impl From<Option<u32>> for Tile {
    fn from(cost: Option<u32>) -> Self {
        cost.map_or(Tile::Wall, Tile::Open)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tile::Open(c) => write!(f, "{c}"),
            Tile::Wall => f.write_str("#"),
        }
    }
}

/// Errors that can occur when building or editing a [`CostGrid`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// No rows, or rows without cells.
    #[error("grid has no cells")]
    Empty,
    /// A row's width differs from the first row's.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// An open cell with cost 0.
    #[error("cell {at} has cost 0, costs must be at least 1")]
    ZeroCost { at: Coord },
    /// A text cell that is neither a positive integer nor `#`.
    #[error("invalid cell {token:?} at {at}, expected a positive cost or '#'")]
    InvalidToken { token: String, at: Coord },
    /// An edit addressed a cell outside the grid.
    #[error("{at} is outside the {bounds} grid")]
    OutOfBounds { at: Coord, bounds: Bounds },
}

/// A rectangular grid of [`Tile`]s, stored row-major.
///
/// Construction guarantees at least one cell, equal row widths and open
/// costs of at least 1.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<Option<u32>>>", into = "Vec<Vec<Option<u32>>>")
)]
pub struct CostGrid {
    tiles: Vec<Tile>,
    bounds: Bounds,
}

impl CostGrid {
    /// Build a grid of open cells from rows of costs.
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self, GridError> {
        let rows: Vec<Vec<Tile>> = rows
            .iter()
            .map(|r| r.as_ref().iter().copied().map(Tile::Open).collect())
            .collect();
        Self::from_tiles(&rows)
    }

    /// Build a grid from rows of tiles.
    pub fn from_tiles<R: AsRef<[Tile]>>(rows: &[R]) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        if width == 0 {
            return Err(GridError::Empty);
        }

        let mut tiles = Vec::with_capacity(height * width);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::Ragged {
                    row: r,
                    expected: width,
                    found: row.len(),
                });
            }
            for (c, &tile) in row.iter().enumerate() {
                check_tile(tile, Coord::new(r as i32, c as i32))?;
                tiles.push(tile);
            }
        }

        Ok(Self {
            tiles,
            bounds: Bounds::new(height, width),
        })
    }

    /// A `height` x `width` grid where every cell costs `cost`.
    pub fn uniform(height: usize, width: usize, cost: u32) -> Result<Self, GridError> {
        if height == 0 || width == 0 {
            return Err(GridError::Empty);
        }
        check_tile(Tile::Open(cost), Coord::ORIGIN)?;
        Ok(Self {
            tiles: vec![Tile::Open(cost); height * width],
            bounds: Bounds::new(height, width),
        })
    }

    /// Parse the text format described in the module docs.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let mut rows: Vec<Vec<Tile>> = Vec::new();
        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(';') {
                continue;
            }
            let r = rows.len() as i32;
            let row = line
                .split(|ch: char| ch == ',' || ch.is_whitespace())
                .filter(|tok| !tok.is_empty())
                .enumerate()
                .map(|(c, tok)| parse_tile(tok, Coord::new(r, c as i32)))
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }
        Self::from_tiles(&rows)
    }

    /// The grid's bounds.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.bounds.height
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.bounds.width
    }

    /// The tile at `c`, or `None` if out of bounds.
    #[inline]
    pub fn tile(&self, c: Coord) -> Option<Tile> {
        self.bounds.index(c).map(|i| self.tiles[i])
    }

    /// The cost of stepping onto `c`, or `None` for walls and out-of-bounds
    /// coordinates.
    #[inline]
    pub fn cost(&self, c: Coord) -> Option<u32> {
        self.tile(c).and_then(Tile::cost)
    }

    /// Whether `c` is inside the grid and not a wall.
    #[inline]
    pub fn passable(&self, c: Coord) -> bool {
        self.cost(c).is_some()
    }

    /// Replace the tile at `c`.
    pub fn set(&mut self, c: Coord, tile: Tile) -> Result<(), GridError> {
        let i = self.bounds.index(c).ok_or(GridError::OutOfBounds {
            at: c,
            bounds: self.bounds,
        })?;
        check_tile(tile, c)?;
        self.tiles[i] = tile;
        Ok(())
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> + '_ {
        self.tiles.chunks(self.bounds.width)
    }

    /// Sum of the costs of every cell after the first in `path`.
    ///
    /// Returns `None` if any of those cells is a wall or out of bounds. The
    /// path is not checked for contiguity.
    pub fn path_cost(&self, path: &[Coord]) -> Option<u64> {
        path.iter()
            .skip(1)
            .try_fold(0u64, |acc, &c| Some(acc + u64::from(self.cost(c)?)))
    }
}

fn check_tile(tile: Tile, at: Coord) -> Result<(), GridError> {
    if tile == Tile::Open(0) {
        return Err(GridError::ZeroCost { at });
    }
    Ok(())
}

fn parse_tile(tok: &str, at: Coord) -> Result<Tile, GridError> {
    if tok == "#" {
        return Ok(Tile::Wall);
    }
    tok.parse::<u32>()
        .map(Tile::Open)
        .map_err(|_| GridError::InvalidToken {
            token: tok.to_string(),
            at,
        })
}

impl fmt::Display for CostGrid {
    /// Writes the text format, right-aligning cells to a common width.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cell_width = self
            .tiles
            .iter()
            .map(|t| t.to_string().len())
            .max()
            .unwrap_or(1);
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, tile) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{:>cell_width$}", tile.to_string())?;
            }
        }
        Ok(())
    }
}

impl TryFrom<Vec<Vec<Option<u32>>>> for CostGrid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<Option<u32>>>) -> Result<Self, GridError> {
        let rows: Vec<Vec<Tile>> = rows
            .into_iter()
            .map(|r| r.into_iter().map(Tile::from).collect())
            .collect();
        Self::from_tiles(&rows)
    }
}

impl From<CostGrid> for Vec<Vec<Option<u32>>> {
    fn from(grid: CostGrid) -> Self {
        grid.rows()
            .map(|r| r.iter().map(|t| t.cost()).collect())
            .collect()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn json_uses_null_for_walls() {
        let g = CostGrid::parse("1 #\n2 3").unwrap();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, "[[1,null],[2,3]]");
        let back: CostGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn json_rejects_invalid_grids() {
        assert!(serde_json::from_str::<CostGrid>("[[1,2],[3]]").is_err());
        assert!(serde_json::from_str::<CostGrid>("[[1,0]]").is_err());
        assert!(serde_json::from_str::<CostGrid>("[]").is_err());
    }
}
