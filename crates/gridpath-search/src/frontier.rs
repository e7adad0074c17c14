use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gridpath_core::Coord;

/// A frontier entry, ordered so that `BinaryHeap` (a max-heap) pops the
/// lowest `(f, g, coord)` tuple first.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Entry {
    /// Estimated total cost: accumulated plus heuristic.
    pub(crate) f: u64,
    /// Accumulated cost when this entry was pushed.
    pub(crate) g: u64,
    pub(crate) coord: Coord,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on every key.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.g.cmp(&self.g))
            .then_with(|| other.coord.cmp(&self.coord))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue of candidate coordinates.
///
/// There is no decrease-key: an improved route to a coordinate is pushed as
/// a new entry and the superseded one is left in place for the caller to
/// discard when it surfaces.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn push(&mut self, f: u64, g: u64, coord: Coord) {
        self.heap.push(Entry { f, g, coord });
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> Option<Entry> {
        self.heap.pop()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
