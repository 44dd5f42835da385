//! Floor generation.
//!
//! Attempt-based random room placement, L-shaped corridors between
//! consecutive room centers, a stairway in the last room, and scattered
//! effect tiles. Intentionally simple: a rejected room candidate is
//! skipped, never retried, so a floor may end up with fewer rooms than
//! attempted (down to zero, which is degenerate but valid).

#[cfg(not(feature = "std"))]
use crate::compat::*;

use serde::{Deserialize, Serialize};

use super::{EffectId, Grid, Pos, Room, Tile, TileType};
use crate::consts::{
    DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_MAX_ROOM_SIZE, DEFAULT_MIN_ROOM_SIZE,
    DEFAULT_ROOM_ATTEMPTS, EFFECT_SCATTER_ATTEMPT_CAP, MIN_EFFECT_TILES,
};
use crate::rng::DungeonRng;

/// External source of floor-effect descriptors.
///
/// The generator requests one opaque handle per scattered effect tile and
/// never looks inside it. Returning `None` stops the scatter early.
pub trait EffectProvider {
    fn random_effect(&mut self, rng: &mut DungeonRng) -> Option<EffectId>;
}

impl EffectProvider for &[EffectId] {
    fn random_effect(&mut self, rng: &mut DungeonRng) -> Option<EffectId> {
        rng.choose(self).copied()
    }
}

/// Floor generation parameters
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GenConfig {
    pub width: usize,
    pub height: usize,
    /// Room placement attempts; rejected candidates are not retried
    pub room_attempts: usize,
    /// Room side length bounds, inclusive
    pub min_room_size: usize,
    pub max_room_size: usize,
    /// Total rejection-sampling attempts for effect scattering
    pub effect_attempt_cap: usize,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            room_attempts: DEFAULT_ROOM_ATTEMPTS,
            min_room_size: DEFAULT_MIN_ROOM_SIZE,
            max_room_size: DEFAULT_MAX_ROOM_SIZE,
            effect_attempt_cap: EFFECT_SCATTER_ATTEMPT_CAP,
        }
    }
}

/// Generate one complete, connected floor.
///
/// Deterministic: the same seed, config, and provider reproduce the same
/// layout. Never fails; invalid bounds simply yield fewer or zero rooms.
pub fn generate(
    config: &GenConfig,
    rng: &mut DungeonRng,
    effects: &mut impl EffectProvider,
) -> Grid {
    let mut grid = Grid::new(config.width, config.height);

    // Start from solid rock
    for x in 0..config.width {
        for y in 0..config.height {
            *grid.tile_mut(x, y) = Tile::wall();
        }
    }

    let rooms = place_rooms(&mut grid, config, rng);
    carve_corridors(&mut grid, &rooms);
    place_stairs(&mut grid, &rooms);
    scatter_effects(&mut grid, &rooms, config, rng, effects);

    grid
}

/// Attempt-based room placement. Each accepted room is registered and its
/// interior carved to floor.
fn place_rooms(grid: &mut Grid, config: &GenConfig, rng: &mut DungeonRng) -> Vec<Room> {
    let mut rooms: Vec<Room> = Vec::new();

    for _ in 0..config.room_attempts {
        let width = rng.between(config.min_room_size as u32, config.max_room_size as u32) as usize;
        let height = rng.between(config.min_room_size as u32, config.max_room_size as u32) as usize;

        // The room must fit strictly inside the grid with a 1-tile border
        if width == 0 || height == 0 || width + 2 > config.width || height + 2 > config.height {
            continue;
        }
        let x = rng.between(1, (config.width - width - 1) as u32) as usize;
        let y = rng.between(1, (config.height - height - 1) as u32) as usize;

        let room = Room::new(x, y, width, height);

        // Skip on overlap, no retry
        if rooms.iter().any(|r| room.overlaps(r, 0)) {
            continue;
        }

        for rx in room.x..room.x + room.width {
            for ry in room.y..room.y + room.height {
                grid.tile_mut(rx, ry).typ = TileType::Floor;
            }
        }

        grid.add_room(room);
        rooms.push(room);
    }

    rooms
}

/// Connect consecutive rooms with L-shaped corridors between their
/// centers. Placement order forms a simple path, so every room ends up
/// reachable from every other without redundant loops.
fn carve_corridors(grid: &mut Grid, rooms: &[Room]) {
    for pair in rooms.windows(2) {
        carve_corridor(grid, pair[0].center(), pair[1].center());
    }
}

/// Carve an L: along x first to match the target column, then along y.
/// Every visited in-bounds tile becomes floor.
fn carve_corridor(grid: &mut Grid, from: Pos, to: Pos) {
    carve_floor(grid, from);

    let mut x = from.x;
    while x != to.x {
        x += (to.x - x).signum();
        carve_floor(grid, Pos::new(x, from.y));
    }

    let mut y = from.y;
    while y != to.y {
        y += (to.y - y).signum();
        carve_floor(grid, Pos::new(to.x, y));
    }
}

fn carve_floor(grid: &mut Grid, pos: Pos) {
    if grid.in_bounds(pos.x, pos.y) {
        grid.tile_mut(pos.x as usize, pos.y as usize).typ = TileType::Floor;
    }
}

/// Mark the center of the last placed room as the way down
fn place_stairs(grid: &mut Grid, rooms: &[Room]) {
    if let Some(last) = rooms.last() {
        let center = last.center();
        grid.tile_mut(center.x as usize, center.y as usize).typ = TileType::Stairs;
    }
}

/// Scatter `max(MIN_EFFECT_TILES, room count)` effect tiles onto random
/// floor tiles. Rejection sampling, bounded by the configured attempt
/// cap: on exhaustion the floor keeps a partial placement.
fn scatter_effects(
    grid: &mut Grid,
    rooms: &[Room],
    config: &GenConfig,
    rng: &mut DungeonRng,
    effects: &mut impl EffectProvider,
) {
    let target = MIN_EFFECT_TILES.max(rooms.len());
    let mut placed = 0;
    let mut attempts = 0;

    while placed < target && attempts < config.effect_attempt_cap {
        attempts += 1;

        let x = rng.below(config.width as u32) as usize;
        let y = rng.below(config.height as u32) as usize;
        if grid.tile(x, y).typ != TileType::Floor {
            continue;
        }

        let Some(effect) = effects.random_effect(rng) else {
            break;
        };
        let tile = grid.tile_mut(x, y);
        tile.typ = TileType::Effect;
        tile.effect = Some(effect);
        placed += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn effect_pool() -> [EffectId; 3] {
        [EffectId(1), EffectId(2), EffectId(3)]
    }

    fn standard_floor(seed: u64) -> Grid {
        let config = GenConfig {
            width: 40,
            height: 30,
            ..GenConfig::default()
        };
        let mut rng = DungeonRng::new(seed);
        generate(&config, &mut rng, &mut effect_pool().as_slice())
    }

    #[test]
    fn test_generation_is_deterministic() {
        let a = standard_floor(12345);
        let b = standard_floor(12345);

        assert_eq!(a.rooms(), b.rooms());
        for x in 0..a.width() {
            for y in 0..a.height() {
                assert_eq!(a.tile(x, y).typ, b.tile(x, y).typ);
                assert_eq!(a.tile(x, y).effect, b.tile(x, y).effect);
            }
        }
    }

    #[test]
    fn test_rooms_never_overlap() {
        for seed in 0..20 {
            let grid = standard_floor(seed);
            let rooms = grid.rooms();
            for (i, a) in rooms.iter().enumerate() {
                for b in &rooms[i + 1..] {
                    assert!(!a.overlaps(b, 0), "seed {seed}: {a:?} overlaps {b:?}");
                }
            }
        }
    }

    #[test]
    fn test_border_stays_solid() {
        let grid = standard_floor(7);
        let (w, h) = (grid.width(), grid.height());
        for x in 0..w {
            assert_eq!(grid.tile(x, 0).typ, TileType::Wall);
            assert_eq!(grid.tile(x, h - 1).typ, TileType::Wall);
        }
        for y in 0..h {
            assert_eq!(grid.tile(0, y).typ, TileType::Wall);
            assert_eq!(grid.tile(w - 1, y).typ, TileType::Wall);
        }
    }

    #[test]
    fn test_zero_attempts_yields_solid_floor() {
        let config = GenConfig {
            width: 12,
            height: 12,
            room_attempts: 0,
            ..GenConfig::default()
        };
        let mut rng = DungeonRng::new(42);
        let grid = generate(&config, &mut rng, &mut effect_pool().as_slice());

        assert_eq!(grid.room_count(), 0);
        for x in 0..12 {
            for y in 0..12 {
                assert_eq!(grid.tile(x, y).typ, TileType::Wall);
            }
        }
        // Both spawn queries fall back to the geometric center
        assert_eq!(grid.spawn_point(), Pos::new(6, 6));
        assert_eq!(grid.random_floor_position(&mut rng), Pos::new(6, 6));
    }

    #[test]
    fn test_oversized_rooms_never_fit() {
        let config = GenConfig {
            width: 10,
            height: 10,
            min_room_size: 20,
            max_room_size: 30,
            ..GenConfig::default()
        };
        let mut rng = DungeonRng::new(42);
        let grid = generate(&config, &mut rng, &mut effect_pool().as_slice());
        assert_eq!(grid.room_count(), 0);
    }

    #[test]
    fn test_stairs_in_last_room() {
        let grid = standard_floor(99);
        let rooms = grid.rooms();
        assert!(!rooms.is_empty());

        let center = rooms.last().unwrap().center();
        assert_eq!(
            grid.tile(center.x as usize, center.y as usize).typ,
            TileType::Stairs
        );

        // Exactly one stairway on the floor
        let mut stairs = 0;
        for x in 0..grid.width() {
            for y in 0..grid.height() {
                if grid.tile(x, y).typ == TileType::Stairs {
                    stairs += 1;
                }
            }
        }
        assert_eq!(stairs, 1);
    }

    #[test]
    fn test_corridor_is_l_shaped() {
        let mut grid = Grid::new(20, 20);
        for x in 0..20 {
            for y in 0..20 {
                *grid.tile_mut(x, y) = Tile::wall();
            }
        }

        // Centers diagonally offset by (5, 5): x leg first, then y leg
        carve_corridor(&mut grid, Pos::new(3, 3), Pos::new(8, 8));

        for x in 3..=8 {
            assert_eq!(grid.tile(x, 3).typ, TileType::Floor, "x leg at ({x}, 3)");
        }
        for y in 3..=8 {
            assert_eq!(grid.tile(8, y).typ, TileType::Floor, "y leg at (8, {y})");
        }
        // The other elbow stays solid
        assert_eq!(grid.tile(3, 8).typ, TileType::Wall);
        assert_eq!(grid.tile(4, 7).typ, TileType::Wall);
    }

    #[test]
    fn test_effect_tiles_scattered() {
        let grid = standard_floor(3);
        let mut effect_tiles = 0;
        for x in 0..grid.width() {
            for y in 0..grid.height() {
                let tile = grid.tile(x, y);
                if tile.typ == TileType::Effect {
                    assert!(tile.effect.is_some(), "effect tile without descriptor");
                    effect_tiles += 1;
                }
            }
        }
        let target = MIN_EFFECT_TILES.max(grid.room_count());
        assert!(effect_tiles > 0);
        assert!(effect_tiles <= target);
    }

    #[test]
    fn test_empty_effect_pool_places_nothing() {
        let config = GenConfig {
            width: 40,
            height: 30,
            ..GenConfig::default()
        };
        let mut rng = DungeonRng::new(5);
        let grid = generate(&config, &mut rng, &mut (&[] as &[EffectId]));

        for x in 0..grid.width() {
            for y in 0..grid.height() {
                assert_ne!(grid.tile(x, y).typ, TileType::Effect);
            }
        }
    }

    #[test]
    fn test_no_empty_tiles_reachable_from_rooms() {
        // Every carved tile is Floor/Stairs/Effect; Empty never survives
        let grid = standard_floor(11);
        for x in 0..grid.width() {
            for y in 0..grid.height() {
                assert_ne!(grid.tile(x, y).typ, TileType::Empty);
            }
        }
    }
}
