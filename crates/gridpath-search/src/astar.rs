use gridpath_core::{Bounds, Coord, CostGrid};

use crate::error::{Endpoint, SearchError};
use crate::frontier::Frontier;
use crate::result::{Route, SearchResult, SearchStats};
use crate::traits::AstarPather;

/// Compute a minimum-cost path from `start` to `goal` on `grid` using A*
/// with the Manhattan heuristic.
///
/// Moves are orthogonal and entering a cell costs that cell's cost; the
/// start cell is free. See [`astar`] for the details.
pub fn find_path(grid: &CostGrid, start: Coord, goal: Coord) -> Result<SearchResult, SearchError> {
    astar(grid, start, goal)
}

/// Compute a minimum-cost path from `start` to `goal` using A*.
///
/// Frontier ties on the estimated total are broken by the lower accumulated
/// cost and then by coordinate order, so results are reproducible.
///
/// Returns [`SearchError::OutOfBounds`] if either endpoint lies outside
/// `pather.bounds()`. An unreachable goal, including a start or goal on an
/// impassable cell, yields a result whose `route` is `None`.
pub fn astar<P: AstarPather>(
    pather: &P,
    start: Coord,
    goal: Coord,
) -> Result<SearchResult, SearchError> {
    let bounds = pather.bounds();
    let start_idx = checked_index(bounds, start, Endpoint::Start)?;
    let goal_idx = checked_index(bounds, goal, Endpoint::Goal)?;

    log::debug!("astar: {start} -> {goal} on a {bounds} grid");

    let mut stats = SearchStats::default();
    if !pather.passable(start) || !pather.passable(goal) {
        log::debug!("astar: endpoint is impassable, goal unreachable");
        return Ok(SearchResult { route: None, stats });
    }

    // Best-known accumulated cost and predecessor, indexed by flat index.
    let mut best: Vec<Option<u64>> = vec![None; bounds.len()];
    let mut parent: Vec<Option<usize>> = vec![None; bounds.len()];
    let mut frontier = Frontier::new();

    best[start_idx] = Some(0);
    frontier.push(0, 0, start);

    let mut nbuf: Vec<Coord> = Vec::with_capacity(4);

    while let Some(current) = frontier.pop() {
        stats.nodes_explored += 1;

        let Some(ci) = bounds.index(current.coord) else {
            continue;
        };
        let Some(current_g) = best[ci] else {
            continue;
        };

        // Skip entries superseded by a cheaper route.
        if current.g > current_g {
            log::trace!(
                "astar: stale entry {} (g {} > {})",
                current.coord,
                current.g,
                current_g
            );
            continue;
        }

        if ci == goal_idx {
            break;
        }
        stats.nodes_expanded += 1;

        nbuf.clear();
        pather.neighbors(current.coord, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = bounds.index(np) else {
                continue;
            };
            let tentative = current_g + u64::from(pather.cost(current.coord, np));
            if best[ni].is_some_and(|g| tentative >= g) {
                continue;
            }

            best[ni] = Some(tentative);
            parent[ni] = Some(ci);
            let f = tentative + u64::from(pather.estimate(np, goal));
            frontier.push(f, tentative, np);
        }
    }

    let Some(cost) = best[goal_idx] else {
        log::debug!(
            "astar: goal unreachable after {} pops ({} expanded)",
            stats.nodes_explored,
            stats.nodes_expanded
        );
        return Ok(SearchResult { route: None, stats });
    };

    // Reconstruct path.
    let mut cells = Vec::new();
    let mut ci = Some(goal_idx);
    while let Some(i) = ci {
        cells.push(bounds.coord(i));
        ci = parent[i];
    }
    cells.reverse();

    log::debug!(
        "astar: found path of cost {cost} and {} steps after {} pops ({} expanded)",
        cells.len() - 1,
        stats.nodes_explored,
        stats.nodes_expanded
    );

    Ok(SearchResult {
        route: Some(Route::new(cells, cost)),
        stats,
    })
}

fn checked_index(bounds: Bounds, c: Coord, endpoint: Endpoint) -> Result<usize, SearchError> {
    bounds.index(c).ok_or(SearchError::OutOfBounds {
        endpoint,
        at: c,
        bounds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::{Scenario, Tile};

    fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col)
    }

    #[test]
    fn sample_board() {
        let s = Scenario::sample();
        let res = find_path(&s.grid, s.start, s.goal).unwrap();
        let route = res.route.as_ref().unwrap();

        assert_eq!(route.cost(), 10);
        assert_eq!(route.steps(), 10);
        let head = [c(0, 0), c(0, 1), c(0, 2), c(1, 2), c(1, 3)];
        let tail = [c(2, 4), c(2, 5), c(3, 5), c(4, 5), c(5, 5)];
        assert_eq!(route.head(5), head);
        assert_eq!(route.tail(5), tail);
        assert!(route.is_contiguous());
        assert_eq!(s.grid.path_cost(route.cells()), Some(10));
        assert_eq!(res.stats.nodes_explored, 23);
        assert_eq!(res.stats.nodes_expanded, 22);
    }

    #[test]
    fn sample_board_reversed() {
        let s = Scenario::sample();
        let res = find_path(&s.grid, s.goal, s.start).unwrap();
        assert_eq!(res.total_cost(), 10);
        assert_eq!(res.path().first(), Some(&c(5, 5)));
        assert_eq!(res.path().last(), Some(&c(0, 0)));
        assert_eq!(res.stats.nodes_explored, 23);
    }

    #[test]
    fn start_equals_goal() {
        let s = Scenario::sample();
        for p in s.grid.bounds() {
            let res = find_path(&s.grid, p, p).unwrap();
            assert_eq!(res.path(), &[p]);
            assert_eq!(res.total_cost(), 0);
            assert_eq!(res.steps(), 0);
            assert_eq!(res.stats.nodes_explored, 1);
            assert_eq!(res.stats.nodes_expanded, 0);
        }
    }

    #[test]
    fn single_cell_grid() {
        let g = CostGrid::from_rows(&[[4u32]]).unwrap();
        let res = find_path(&g, c(0, 0), c(0, 0)).unwrap();
        assert_eq!(res.path(), &[c(0, 0)]);
        assert_eq!(res.total_cost(), 0);
    }

    #[test]
    fn straight_corridor() {
        let g = CostGrid::uniform(1, 4, 1).unwrap();
        let res = find_path(&g, c(0, 0), c(0, 3)).unwrap();
        assert_eq!(res.path(), &[c(0, 0), c(0, 1), c(0, 2), c(0, 3)]);
        assert_eq!(res.total_cost(), 3);
        assert_eq!(res.stats.nodes_explored, 4);
        assert_eq!(res.stats.nodes_expanded, 3);
    }

    #[test]
    fn detours_around_expensive_cells() {
        let g = CostGrid::parse("1 9 1\n1 9 1\n1 1 1").unwrap();
        let res = find_path(&g, c(0, 0), c(0, 2)).unwrap();
        assert_eq!(res.total_cost(), 6);
        let path = res.path();
        assert_eq!(path.len(), 7);
        assert_eq!(path[..4], [c(0, 0), c(1, 0), c(2, 0), c(2, 1)]);
        assert_eq!(path[4..], [c(2, 2), c(1, 2), c(0, 2)]);
        assert_eq!(res.stats.nodes_explored, 7);
        assert_eq!(res.stats.nodes_expanded, 6);
    }

    #[test]
    fn walled_off_goal_is_not_found() {
        let g = CostGrid::parse("1 1 1\n1 # #\n1 # 1").unwrap();
        let res = find_path(&g, c(0, 0), c(2, 2)).unwrap();
        assert!(!res.is_found());
        assert!(res.path().is_empty());
        assert_eq!(res.total_cost(), 0);
        // Every reachable cell is popped exactly once.
        assert_eq!(res.stats.nodes_explored, 5);
        assert_eq!(res.stats.nodes_expanded, 5);
    }

    #[test]
    fn wall_endpoints_are_not_found() {
        let mut g = CostGrid::uniform(3, 3, 1).unwrap();
        g.set(c(2, 2), Tile::Wall).unwrap();
        let res = find_path(&g, c(0, 0), c(2, 2)).unwrap();
        assert!(!res.is_found());
        assert_eq!(res.stats, SearchStats::default());

        let res = find_path(&g, c(2, 2), c(0, 0)).unwrap();
        assert!(!res.is_found());
    }

    #[test]
    fn out_of_bounds_endpoints_fail_fast() {
        let g = CostGrid::uniform(2, 3, 1).unwrap();
        assert_eq!(
            find_path(&g, c(2, 0), c(0, 0)),
            Err(SearchError::OutOfBounds {
                endpoint: Endpoint::Start,
                at: c(2, 0),
                bounds: Bounds::new(2, 3),
            })
        );
        assert_eq!(
            find_path(&g, c(0, 0), c(0, -1)),
            Err(SearchError::OutOfBounds {
                endpoint: Endpoint::Goal,
                at: c(0, -1),
                bounds: Bounds::new(2, 3),
            })
        );
        let msg = find_path(&g, c(0, 0), c(5, 5)).unwrap_err().to_string();
        assert_eq!(msg, "goal (5, 5) is outside the 2x3 grid");
    }

    #[test]
    fn stale_frontier_entries_are_skipped() {
        // A cell is pushed twice before either copy is popped; the costlier
        // copy is popped later and skipped.
        let g = CostGrid::parse("9 1 1 9\n2 1 1 5\n5 1 9 5").unwrap();
        let res = find_path(&g, c(0, 0), c(2, 3)).unwrap();
        assert_eq!(res.total_cost(), 13);
        assert_eq!(
            res.path(),
            &[c(0, 0), c(0, 1), c(0, 2), c(1, 2), c(1, 3), c(2, 3)]
        );
        assert_eq!(g.path_cost(res.path()), Some(13));
        assert_eq!(res.stats.nodes_explored, 13);
        assert_eq!(res.stats.nodes_expanded, 11);
    }

    /// Costs depend on direction: moving right is cheap, everything else
    /// is expensive.
    struct Conveyor {
        bounds: Bounds,
    }

    impl crate::Pather for Conveyor {
        fn bounds(&self) -> Bounds {
            self.bounds
        }
        fn passable(&self, c: Coord) -> bool {
            self.bounds.contains(c)
        }
        fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
            buf.extend(c.neighbors_4().into_iter().filter(|&n| self.passable(n)));
        }
    }

    impl crate::WeightedPather for Conveyor {
        fn cost(&self, from: Coord, to: Coord) -> u32 {
            if to.col > from.col { 1 } else { 3 }
        }
    }

    impl AstarPather for Conveyor {
        fn estimate(&self, from: Coord, to: Coord) -> u32 {
            crate::manhattan(from, to)
        }
    }

    #[test]
    fn generic_pather() {
        let p = Conveyor {
            bounds: Bounds::new(2, 4),
        };
        let res = astar(&p, c(1, 0), c(0, 3)).unwrap();
        assert_eq!(res.total_cost(), 6);
        let back = astar(&p, c(0, 3), c(1, 0)).unwrap();
        assert_eq!(back.total_cost(), 12);
    }
}
