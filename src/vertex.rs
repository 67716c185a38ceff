//! Board coordinates.
//!
//! A [`Vertex`] is a plain `(x, y)` pair with value semantics. `x` grows to
//! the right, `y` grows downward, and `(0, 0)` is the top-left corner.
//! Coordinates are signed so that probes just off the edge, such as
//! `(-1, 0)`, are representable and simply fail
//! [`Board::has_vertex`](crate::board::Board::has_vertex).
//!
//! GTP coordinates (e.g. `"D4"`) count rows from the bottom edge and use the
//! letters `A` to `Z` without `I` for columns.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::COORD_LETTERS;

/// A board intersection.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Vertex {
    pub x: i32,
    pub y: i32,
}

impl Vertex {
    pub const fn new(x: i32, y: i32) -> Self {
        Vertex { x, y }
    }

    /// Packed row-major key of this vertex on a `size`x`size` board, or `None`
    /// when the vertex lies off that board.
    #[inline]
    pub fn index(self, size: usize) -> Option<usize> {
        let (x, y) = (usize::try_from(self.x).ok()?, usize::try_from(self.y).ok()?);
        (x < size && y < size).then(|| y * size + x)
    }

    /// Inverse of [`Vertex::index`].
    #[inline]
    pub(crate) fn from_index(index: usize, size: usize) -> Self {
        Vertex::new((index % size) as i32, (index / size) as i32)
    }

    /// The four orthogonal neighbors (left, right, up, down), unchecked.
    #[inline]
    pub fn adjacent(self) -> [Vertex; 4] {
        let Vertex { x, y } = self;
        [
            Vertex::new(x - 1, y),
            Vertex::new(x + 1, y),
            Vertex::new(x, y - 1),
            Vertex::new(x, y + 1),
        ]
    }

    /// Manhattan distance to `other`.
    pub fn distance(self, other: Vertex) -> u64 {
        u64::from(self.x.abs_diff(other.x)) + u64::from(self.y.abs_diff(other.y))
    }
}

impl From<(i32, i32)> for Vertex {
    fn from((x, y): (i32, i32)) -> Self {
        Vertex::new(x, y)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Parse a GTP coordinate string (e.g. `"D4"`) into a vertex on a
/// `size`x`size` board.
///
/// Returns `None` for malformed input and for coordinates off the board.
/// `"pass"` is not a vertex and also yields `None`.
pub fn parse_coord(s: &str, size: usize) -> Option<Vertex> {
    let s = s.trim();
    let mut chars = s.chars();
    let letter = chars.next()?.to_ascii_uppercase();
    let col = COORD_LETTERS.iter().position(|&c| c as char == letter)?;

    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let row: usize = digits.parse().ok()?;

    if col >= size || row == 0 || row > size {
        return None;
    }
    Some(Vertex::new(col as i32, (size - row) as i32))
}

/// Convert a vertex to a GTP coordinate string (e.g. `"D4"`).
///
/// Returns `None` when the vertex is off the board or its column has no
/// letter.
pub fn str_coord(v: Vertex, size: usize) -> Option<String> {
    v.index(size)?;
    let letter = *COORD_LETTERS.get(v.x as usize)? as char;
    Some(format!("{letter}{}", size - v.y as usize))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_bounds() {
        assert_eq!(Vertex::new(0, 0).index(19), Some(0));
        assert_eq!(Vertex::new(18, 18).index(19), Some(360));
        assert_eq!(Vertex::new(3, 2).index(5), Some(13));
        assert_eq!(Vertex::new(-1, 0).index(19), None);
        assert_eq!(Vertex::new(0, 19).index(19), None);
        assert_eq!(Vertex::new(0, 0).index(0), None);
    }

    #[test]
    fn test_from_index_inverts_index() {
        let v = Vertex::new(4, 7);
        let idx = v.index(9).unwrap();
        assert_eq!(Vertex::from_index(idx, 9), v);
    }

    #[test]
    fn test_adjacent_order() {
        let v = Vertex::new(2, 2);
        assert_eq!(
            v.adjacent(),
            [
                Vertex::new(1, 2),
                Vertex::new(3, 2),
                Vertex::new(2, 1),
                Vertex::new(2, 3),
            ]
        );
    }

    #[test]
    fn test_distance() {
        assert_eq!(Vertex::new(0, 0).distance(Vertex::new(3, 4)), 7);
        assert_eq!(Vertex::new(-2, 5).distance(Vertex::new(2, 5)), 4);
        assert_eq!(Vertex::new(1, 1).distance(Vertex::new(1, 1)), 0);
        let (lo, hi) = (Vertex::new(i32::MIN, i32::MIN), Vertex::new(i32::MAX, i32::MAX));
        assert_eq!(lo.distance(hi), 2 * u64::from(u32::MAX));
    }

    #[test]
    fn test_parse_coord() {
        assert_eq!(parse_coord("A1", 19), Some(Vertex::new(0, 18)));
        assert_eq!(parse_coord("D4", 19), Some(Vertex::new(3, 15)));
        assert_eq!(parse_coord("t19", 19), Some(Vertex::new(18, 0)));
        // J follows H directly
        assert_eq!(parse_coord("J9", 9), Some(Vertex::new(8, 0)));
    }

    #[test]
    fn test_parse_coord_rejects() {
        assert_eq!(parse_coord("", 19), None);
        assert_eq!(parse_coord("pass", 19), None);
        assert_eq!(parse_coord("I5", 19), None);
        assert_eq!(parse_coord("A0", 19), None);
        assert_eq!(parse_coord("A20", 19), None);
        assert_eq!(parse_coord("K5", 9), None);
        assert_eq!(parse_coord("D4x", 19), None);
        assert_eq!(parse_coord("D", 19), None);
    }

    #[test]
    fn test_str_coord() {
        assert_eq!(str_coord(Vertex::new(3, 15), 19).as_deref(), Some("D4"));
        assert_eq!(str_coord(Vertex::new(8, 0), 9).as_deref(), Some("J9"));
        assert_eq!(str_coord(Vertex::new(9, 0), 9), None);
        assert_eq!(str_coord(Vertex::new(25, 0), 30), None);
    }
}
