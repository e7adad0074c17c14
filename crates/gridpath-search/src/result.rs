use gridpath_core::Coord;

/// A minimum-cost path from start to goal, both inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Route {
    cells: Vec<Coord>,
    cost: u64,
}

impl Route {
    pub(crate) fn new(cells: Vec<Coord>, cost: u64) -> Self {
        debug_assert!(!cells.is_empty());
        Self { cells, cost }
    }

    /// Every coordinate on the path, start first.
    #[inline]
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Total cost: the sum of the costs of every cell after the start.
    #[inline]
    pub fn cost(&self) -> u64 {
        self.cost
    }

    /// Number of moves (edges) on the path.
    #[inline]
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    /// The first `n` coordinates (fewer if the path is shorter).
    pub fn head(&self, n: usize) -> &[Coord] {
        &self.cells[..n.min(self.cells.len())]
    }

    /// The last `n` coordinates (fewer if the path is shorter).
    pub fn tail(&self, n: usize) -> &[Coord] {
        &self.cells[self.cells.len().saturating_sub(n)..]
    }

    /// Whether consecutive coordinates are all one orthogonal step apart.
    pub fn is_contiguous(&self) -> bool {
        self.cells.windows(2).all(|w| w[0].is_adjacent(w[1]))
    }
}

// A route always holds at least its start cell.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Route {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct RawRoute {
            cells: Vec<Coord>,
            cost: u64,
        }

        let raw = <RawRoute as serde::Deserialize>::deserialize(deserializer)?;
        if raw.cells.is_empty() {
            return Err(serde::de::Error::invalid_length(0, &"at least one cell"));
        }
        Ok(Route::new(raw.cells, raw.cost))
    }
}

/// Work done by one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Entries popped from the frontier, including stale duplicates and the
    /// final goal pop.
    pub nodes_explored: usize,
    /// Pops whose neighbours were relaxed: not stale and not the goal.
    pub nodes_expanded: usize,
}

/// Outcome of a search. `route` is `None` when the goal is unreachable.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub route: Option<Route>,
    pub stats: SearchStats,
}

impl SearchResult {
    /// Whether a path to the goal was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        self.route.is_some()
    }

    /// The path, or an empty slice if the goal is unreachable.
    pub fn path(&self) -> &[Coord] {
        self.route.as_ref().map(Route::cells).unwrap_or_default()
    }

    /// The total cost, or 0 if the goal is unreachable.
    pub fn total_cost(&self) -> u64 {
        self.route.as_ref().map_or(0, Route::cost)
    }

    /// Number of moves on the path, or 0 if the goal is unreachable.
    pub fn steps(&self) -> usize {
        self.route.as_ref().map_or(0, Route::steps)
    }
}
