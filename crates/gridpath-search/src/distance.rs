use gridpath_core::Coord;

/// Manhattan (L1) distance between two coordinates.
///
/// This is the search heuristic for 4-connected grids. It never exceeds the
/// true remaining cost as long as every step costs at least 1. Inputs are
/// not bounds-checked.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> u32 {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}
