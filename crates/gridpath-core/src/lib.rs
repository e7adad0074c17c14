//! **gridpath-core** — core types for weighted grid pathfinding.
//!
//! This crate provides the types shared by the search engine and its
//! front-ends: coordinates and bounds, the cost grid with its text format,
//! and the [`Scenario`] describing a single search problem.

pub mod geom;
pub mod grid;
pub mod scenario;

pub use geom::{Bounds, BoundsIter, Coord, ParseCoordError};
pub use grid::{CostGrid, GridError, Tile};
pub use scenario::{SAMPLE_COSTS, Scenario};
