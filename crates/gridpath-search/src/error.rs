use std::fmt;

use gridpath_core::{Bounds, Coord};
use thiserror::Error;

/// Which end of a search a coordinate belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Endpoint::Start => "start",
            Endpoint::Goal => "goal",
        })
    }
}

/// Errors returned by [`astar`](crate::astar) and [`find_path`](crate::find_path).
///
/// An unreachable goal is not an error; see [`SearchResult::route`](crate::SearchResult).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The start or goal lies outside the grid.
    #[error("{endpoint} {at} is outside the {bounds} grid")]
    OutOfBounds {
        endpoint: Endpoint,
        at: Coord,
        bounds: Bounds,
    },
}
