//! Geometry primitives: [`Coord`] and [`Bounds`].
//!
//! Coordinates are `(row, col)` pairs. Rows grow downwards and columns grow
//! to the right, so row-major order is also reading order.

use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A grid coordinate.
///
/// Components are signed so that neighbour arithmetic may step outside a
/// grid; use [`Bounds::contains`] before indexing. Ordering is row-major.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Top-left corner (0, 0).
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    /// Unit steps in the four orthogonal directions (up, right, down, left).
    pub const CARDINALS: [Coord; 4] = [
        Coord::new(-1, 0),
        Coord::new(0, 1),
        Coord::new(1, 0),
        Coord::new(0, -1),
    ];

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The four orthogonal neighbours (up, right, down, left). Not
    /// bounds-checked.
    #[inline]
    pub fn neighbors_4(self) -> [Coord; 4] {
        Self::CARDINALS.map(|d| self + d)
    }

    /// Whether `other` is exactly one orthogonal step away.
    #[inline]
    pub fn is_adjacent(self, other: Coord) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error returned when parsing a [`Coord`] from a `"row,col"` string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid coordinate {input:?}: expected \"ROW,COL\"")]
pub struct ParseCoordError {
    input: String,
}

impl FromStr for Coord {
    type Err = ParseCoordError;

    /// Parse `"row,col"`. Surrounding parentheses and whitespace are
    /// accepted, so the [`Display`](fmt::Display) form parses back.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCoordError {
            input: s.to_string(),
        };
        let inner = s.trim();
        let inner = inner
            .strip_prefix('(')
            .and_then(|t| t.strip_suffix(')'))
            .unwrap_or(inner);
        let (row, col) = inner.split_once(',').ok_or_else(err)?;
        let row = row.trim().parse().map_err(|_| err())?;
        let col = col.trim().parse().map_err(|_| err())?;
        Ok(Coord::new(row, col))
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// The rectangle `0 <= row < height`, `0 <= col < width`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub height: usize,
    pub width: usize,
}

impl Bounds {
    /// Create new bounds.
    #[inline]
    pub const fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    /// Total number of cells.
    #[inline]
    pub const fn len(self) -> usize {
        self.height * self.width
    }

    /// Whether the bounds contain no cells.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.height == 0 || self.width == 0
    }

    /// Whether `c` lies inside the bounds.
    #[inline]
    pub fn contains(self, c: Coord) -> bool {
        c.row >= 0 && c.col >= 0 && (c.row as usize) < self.height && (c.col as usize) < self.width
    }

    /// Convert a coordinate to a flat row-major index. Returns `None` if out
    /// of bounds.
    #[inline]
    pub fn index(self, c: Coord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.row as usize * self.width + c.col as usize)
    }

    /// Convert a flat index back to a coordinate.
    #[inline]
    pub fn coord(self, idx: usize) -> Coord {
        Coord::new((idx / self.width) as i32, (idx % self.width) as i32)
    }

    /// The bottom-right cell, or `None` for empty bounds.
    #[inline]
    pub fn last(self) -> Option<Coord> {
        if self.is_empty() {
            return None;
        }
        Some(Coord::new(self.height as i32 - 1, self.width as i32 - 1))
    }

    /// Row-major iterator over every coordinate.
    #[inline]
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            next: 0,
        }
    }
}

impl IntoIterator for Bounds {
    type Item = Coord;
    type IntoIter = BoundsIter;
    #[inline]
    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

// ---------------------------------------------------------------------------
// BoundsIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the coordinates in a [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    next: usize,
}

impl Iterator for BoundsIter {
    type Item = Coord;

    #[inline]
    fn next(&mut self) -> Option<Coord> {
        if self.next >= self.bounds.len() {
            return None;
        }
        let c = self.bounds.coord(self.next);
        self.next += 1;
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bounds.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BoundsIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_neighbors_order() {
        let c = Coord::new(2, 3);
        assert_eq!(
            c.neighbors_4(),
            [
                Coord::new(1, 3),
                Coord::new(2, 4),
                Coord::new(3, 3),
                Coord::new(2, 2),
            ]
        );
        for n in c.neighbors_4() {
            assert!(c.is_adjacent(n));
        }
        assert!(!c.is_adjacent(c));
        assert!(!c.is_adjacent(Coord::new(3, 4)));
    }

    #[test]
    fn coord_orders_row_major() {
        let mut v = vec![Coord::new(1, 0), Coord::new(0, 5), Coord::new(0, 1)];
        v.sort();
        assert_eq!(
            v,
            vec![Coord::new(0, 1), Coord::new(0, 5), Coord::new(1, 0)]
        );
    }

    #[test]
    fn coord_parse() {
        assert_eq!("3,4".parse::<Coord>(), Ok(Coord::new(3, 4)));
        assert_eq!(" 5 , 0 ".parse::<Coord>(), Ok(Coord::new(5, 0)));
        assert_eq!("(1, 2)".parse::<Coord>(), Ok(Coord::new(1, 2)));
        let c = Coord::new(7, 8);
        assert_eq!(c.to_string().parse::<Coord>(), Ok(c));
        assert!("3".parse::<Coord>().is_err());
        assert!("a,b".parse::<Coord>().is_err());
        assert!("1,2,3".parse::<Coord>().is_err());
    }

    #[test]
    fn bounds_contains() {
        let b = Bounds::new(3, 4);
        assert!(b.contains(Coord::new(0, 0)));
        assert!(b.contains(Coord::new(2, 3)));
        assert!(!b.contains(Coord::new(3, 0)));
        assert!(!b.contains(Coord::new(0, 4)));
        assert!(!b.contains(Coord::new(-1, 0)));
        assert!(!b.contains(Coord::new(0, -1)));
    }

    #[test]
    fn bounds_index_and_coord() {
        let b = Bounds::new(3, 4);
        assert_eq!(b.index(Coord::new(0, 0)), Some(0));
        assert_eq!(b.index(Coord::new(1, 2)), Some(6));
        assert_eq!(b.index(Coord::new(3, 0)), None);
        assert_eq!(b.coord(6), Coord::new(1, 2));
        assert_eq!(b.coord(11), Coord::new(2, 3));
    }

    #[test]
    fn bounds_iter_is_row_major() {
        let b = Bounds::new(2, 3);
        let it = b.iter();
        assert_eq!(it.len(), 6);
        let v: Vec<_> = it.collect();
        assert_eq!(v[0], Coord::new(0, 0));
        assert_eq!(v[2], Coord::new(0, 2));
        assert_eq!(v[3], Coord::new(1, 0));
        assert_eq!(b.last(), Some(Coord::new(1, 2)));
        assert_eq!(Bounds::new(0, 3).iter().count(), 0);
        assert_eq!(Bounds::new(0, 3).last(), None);
    }
}
