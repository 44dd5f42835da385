//! The tile grid for one dungeon floor.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use serde::{Deserialize, Serialize};

use super::{Occupant, Pos, Room, Tile, TileType};
use crate::rng::DungeonRng;

/// The 2D tile array representing one dungeon floor plus its room
/// registry.
///
/// Created empty by the generator, fully populated by the end of
/// generation, then read-mostly: only occupant/effect/item fields mutate
/// afterward, through the single-writer operations below. Tiles are held
/// by value; indexing is `[x][y]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<Vec<Tile>>,
    rooms: Vec<Room>,
}

impl Grid {
    /// Create a grid with every tile `Empty`
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![vec![Tile::empty(); height]; width],
            rooms: Vec::new(),
        }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Check if position is inside the grid
    pub const fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Get tile at position. Callers must bounds-check first; an
    /// out-of-range index is a programming error, not a runtime
    /// condition.
    pub fn tile(&self, x: usize, y: usize) -> &Tile {
        debug_assert!(x < self.width && y < self.height);
        &self.tiles[x][y]
    }

    /// Get mutable tile at position
    pub fn tile_mut(&mut self, x: usize, y: usize) -> &mut Tile {
        debug_assert!(x < self.width && y < self.height);
        &mut self.tiles[x][y]
    }

    /// Check if position is walkable. False out of bounds.
    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        self.tiles[x as usize][y as usize].is_walkable()
    }

    /// Append a room to the registry.
    ///
    /// Contract: the caller (the generator) guarantees the room does not
    /// overlap any room already registered. No validation happens here.
    pub fn add_room(&mut self, room: Room) {
        self.rooms.push(room);
    }

    /// The room registry, in placement order.
    ///
    /// Returns a copy: the internal registry stays fixed after
    /// generation and cannot be mutated through this call.
    pub fn rooms(&self) -> Vec<Room> {
        self.rooms.clone()
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Center of the first placed room, the canonical spawn room.
    /// Falls back to the grid's geometric center when no rooms exist.
    pub fn spawn_point(&self) -> Pos {
        match self.rooms.first() {
            Some(room) => room.center(),
            None => self.geometric_center(),
        }
    }

    /// Uniformly random unoccupied `Floor` tile.
    ///
    /// Candidates are enumerated before sampling so the call terminates
    /// even on floors with no such tile, in which case the geometric
    /// center is returned.
    pub fn random_floor_position(&self, rng: &mut DungeonRng) -> Pos {
        let mut candidates = Vec::new();
        for x in 0..self.width {
            for y in 0..self.height {
                let tile = &self.tiles[x][y];
                if tile.typ == TileType::Floor && tile.occupant.is_none() {
                    candidates.push(Pos::new(x as i32, y as i32));
                }
            }
        }
        match rng.choose(&candidates) {
            Some(pos) => *pos,
            None => self.geometric_center(),
        }
    }

    const fn geometric_center(&self) -> Pos {
        Pos::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    /// Get occupant at position, if any. None out of bounds.
    pub fn occupant_at(&self, x: i32, y: i32) -> Option<Occupant> {
        if !self.in_bounds(x, y) {
            return None;
        }
        self.tiles[x as usize][y as usize].occupant
    }

    /// Record an entity standing on a tile. The caller (external
    /// movement code) is responsible for only placing occupants on
    /// walkable tiles and for clearing the previous position.
    pub fn set_occupant(&mut self, x: usize, y: usize, occupant: Occupant) {
        self.tile_mut(x, y).occupant = Some(occupant);
    }

    /// Clear the occupant of a tile, returning the previous value
    pub fn clear_occupant(&mut self, x: usize, y: usize) -> Option<Occupant> {
        self.tile_mut(x, y).occupant.take()
    }
}
