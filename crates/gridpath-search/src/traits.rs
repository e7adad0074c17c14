use gridpath_core::{Bounds, Coord, CostGrid};

use crate::distance::manhattan;

/// Minimal pathfinding interface: the searchable area and its connectivity.
pub trait Pather {
    /// The rectangle searched. Endpoints outside it are rejected.
    fn bounds(&self) -> Bounds;

    /// Whether `c` can be entered at all.
    fn passable(&self, c: Coord) -> bool;

    /// Append the passable orthogonal neighbours of `c` into `buf`. The
    /// caller clears `buf` before calling.
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>);
}

/// Pather with weighted (positive-cost) moves.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` onto adjacent `to`. Must be >= 1.
    fn cost(&self, from: Coord, to: Coord) -> u32;
}

/// Full A* pather with an admissible heuristic.
pub trait AstarPather: WeightedPather {
    /// Estimate of the remaining cost from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Coord, to: Coord) -> u32;
}

impl Pather for CostGrid {
    #[inline]
    fn bounds(&self) -> Bounds {
        CostGrid::bounds(self)
    }

    #[inline]
    fn passable(&self, c: Coord) -> bool {
        CostGrid::passable(self, c)
    }

    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
        buf.extend(
            c.neighbors_4()
                .into_iter()
                .filter(|&n| CostGrid::passable(self, n)),
        );
    }
}

impl WeightedPather for CostGrid {
    #[inline]
    fn cost(&self, _from: Coord, to: Coord) -> u32 {
        // Neighbours are always passable, so the fallback is never used.
        CostGrid::cost(self, to).unwrap_or(u32::MAX)
    }
}

impl AstarPather for CostGrid {
    /// Manhattan distance: every step costs at least 1 and moves are
    /// orthogonal.
    #[inline]
    fn estimate(&self, from: Coord, to: Coord) -> u32 {
        manhattan(from, to)
    }
}
