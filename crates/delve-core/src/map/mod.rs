//! Floor map system
//!
//! Contains the tile grid, room registry, and the floor generator.

mod generation;
mod grid;
mod pos;
mod room;
mod tile;

pub use generation::{EffectProvider, GenConfig, generate};
pub use grid::Grid;
pub use pos::Pos;
pub use room::Room;
pub use tile::{EffectId, EntityId, ItemId, Occupant, Tile, TileType};
