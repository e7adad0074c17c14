//! A* pathfinding on weighted, 4-connected grids.
//!
//! The entry point is [`find_path`], which searches a
//! [`CostGrid`](gridpath_core::CostGrid) for a minimum-cost route between two
//! cells. Entering a cell costs that cell's cost; the start cell is free.
//! The frontier is ordered by `(estimated total, accumulated, coordinate)`,
//! so results are reproducible.
//!
//! Custom cost models can be searched with the generic [`astar`] by
//! implementing the pather traits:
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | bounds, passability, neighbour enumeration |
//! | [`WeightedPather`] : [`Pather`] | move costs (>= 1) |
//! | [`AstarPather`] : [`WeightedPather`] | admissible heuristic |
//!
//! Each search owns its frontier and bookkeeping for the duration of the
//! call; nothing is shared between calls.

mod astar;
mod distance;
mod error;
mod frontier;
mod result;
mod traits;

pub use astar::{astar, find_path};
pub use distance::manhattan;
pub use error::{Endpoint, SearchError};
pub use result::{Route, SearchResult, SearchStats};
pub use traits::{AstarPather, Pather, WeightedPather};
