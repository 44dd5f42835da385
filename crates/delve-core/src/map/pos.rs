//! Grid coordinates.

use serde::{Deserialize, Serialize};

/// A grid-local coordinate. Zero-based; x grows right, y grows up.
///
/// Signed so that neighbor offsets can step off the edge of the grid and
/// be rejected by a bounds check instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position shifted by (dx, dy)
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Manhattan distance: |dx| + |dy|
    pub const fn manhattan_distance(self, other: Self) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Chebyshev distance: max(|dx|, |dy|), the natural metric for
    /// 8-direction movement
    pub const fn chebyshev_distance(self, other: Self) -> i32 {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        if dx > dy { dx } else { dy }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_distance() {
        assert_eq!(Pos::new(0, 0).manhattan_distance(Pos::new(3, 4)), 7);
        assert_eq!(Pos::new(5, 5).manhattan_distance(Pos::new(5, 5)), 0);
        assert_eq!(Pos::new(2, 7).manhattan_distance(Pos::new(-1, 3)), 7);
    }

    #[test]
    fn test_chebyshev_distance() {
        assert_eq!(Pos::new(0, 0).chebyshev_distance(Pos::new(3, 4)), 4);
        assert_eq!(Pos::new(0, 0).chebyshev_distance(Pos::new(4, 3)), 4);
        assert_eq!(Pos::new(1, 1).chebyshev_distance(Pos::new(2, 2)), 1);
    }

    #[test]
    fn test_offset() {
        assert_eq!(Pos::new(4, 4).offset(-1, 1), Pos::new(3, 5));
    }
}
