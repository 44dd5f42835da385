//! Room rectangles placed during generation.

use serde::{Deserialize, Serialize};

use super::Pos;
use crate::rng::DungeonRng;

/// Axis-aligned rectangle of carved floor in grid coordinates.
///
/// Invariant: no two rooms in the same grid's registry overlap. The
/// generator enforces this at placement time; the registry is immutable
/// afterward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// X coordinate of room interior (left edge)
    pub x: usize,
    /// Y coordinate of room interior (bottom edge)
    pub y: usize,
    /// Width of room interior
    pub width: usize,
    /// Height of room interior
    pub height: usize,
}

impl Room {
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if this room overlaps with another (with buffer)
    pub fn overlaps(&self, other: &Room, buffer: usize) -> bool {
        let x1 = self.x.saturating_sub(buffer);
        let y1 = self.y.saturating_sub(buffer);
        let x2 = self.x + self.width + buffer;
        let y2 = self.y + self.height + buffer;

        let ox1 = other.x.saturating_sub(buffer);
        let oy1 = other.y.saturating_sub(buffer);
        let ox2 = other.x + other.width + buffer;
        let oy2 = other.y + other.height + buffer;

        !(x2 <= ox1 || x1 >= ox2 || y2 <= oy1 || y1 >= oy2)
    }

    /// Center of the room, rounded to nearest tile (ties round up)
    pub const fn center(&self) -> Pos {
        Pos::new(
            (self.x + self.width / 2) as i32,
            (self.y + self.height / 2) as i32,
        )
    }

    /// Check if point is inside the room interior
    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Interior area in tiles
    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    /// A uniformly random interior point
    pub fn random_point(&self, rng: &mut DungeonRng) -> Pos {
        let x = self.x + rng.below(self.width as u32) as usize;
        let y = self.y + rng.below(self.height as u32) as usize;
        Pos::new(x as i32, y as i32)
    }
}
