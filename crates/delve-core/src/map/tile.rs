//! Tile types and per-cell state.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Handle to an entity in an external entity table. Non-owning: the tile
/// never controls entity lifetime, and clearing it on entity removal is
/// the external movement system's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// Opaque handle to a floor-effect descriptor supplied by an external
/// effect manager. This crate never inspects its contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EffectId(pub u32);

/// Handle to an item in an external item table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u32);

/// Terrain type of a single cell
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum TileType {
    /// Pre-generation default; must not appear in a finished grid except
    /// in unreachable regions
    #[default]
    Empty = 0,
    Wall = 1,
    Floor = 2,
    /// Floor with an attached effect descriptor
    Effect = 3,
    /// Exit to the next floor
    Stairs = 4,
}

impl TileType {
    /// Check if an agent may occupy a tile of this type.
    /// Walkability is purely derived from the type.
    pub const fn is_walkable(&self) -> bool {
        matches!(self, TileType::Floor | TileType::Stairs | TileType::Effect)
    }

    /// Debug glyph for this tile type
    pub const fn symbol(&self) -> char {
        match self {
            TileType::Empty => ' ',
            TileType::Wall => '#',
            TileType::Floor => '.',
            TileType::Effect => '~',
            TileType::Stairs => '>',
        }
    }
}

/// The entity standing on a tile.
///
/// Whether it blocks movement is recorded at placement time, so the
/// pathfinder never calls back into the entity system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupant {
    pub entity: EntityId,
    pub blocks_movement: bool,
}

impl Occupant {
    pub const fn blocking(entity: EntityId) -> Self {
        Self {
            entity,
            blocks_movement: true,
        }
    }

    pub const fn passable(entity: EntityId) -> Self {
        Self {
            entity,
            blocks_movement: false,
        }
    }
}

/// A single map cell
///
/// Invariant: a non-null occupant implies a walkable tile type at the
/// time of occupation. External movement code may violate this only
/// transiently inside its own atomic move operation.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Tile {
    /// Terrain type
    pub typ: TileType,

    /// Entity currently standing here, if any
    pub occupant: Option<Occupant>,

    /// Attached floor-effect descriptor, if any
    pub effect: Option<EffectId>,

    /// Item lying here, if any
    pub item: Option<ItemId>,
}

impl Tile {
    /// Create an empty (pre-generation) tile
    pub const fn empty() -> Self {
        Self {
            typ: TileType::Empty,
            occupant: None,
            effect: None,
            item: None,
        }
    }

    /// Create a wall tile
    pub const fn wall() -> Self {
        Self {
            typ: TileType::Wall,
            occupant: None,
            effect: None,
            item: None,
        }
    }

    /// Create a floor tile
    pub const fn floor() -> Self {
        Self {
            typ: TileType::Floor,
            occupant: None,
            effect: None,
            item: None,
        }
    }

    /// Check if walkable
    pub const fn is_walkable(&self) -> bool {
        self.typ.is_walkable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_walkability_derived_from_type() {
        for typ in TileType::iter() {
            let expected = matches!(typ, TileType::Floor | TileType::Stairs | TileType::Effect);
            assert_eq!(typ.is_walkable(), expected, "{typ}");
        }
    }

    #[test]
    fn test_tile_walkability_matches_type() {
        assert!(Tile::floor().is_walkable());
        assert!(!Tile::wall().is_walkable());
        assert!(!Tile::empty().is_walkable());
    }

    #[test]
    fn test_default_tile_is_empty() {
        let tile = Tile::default();
        assert_eq!(tile.typ, TileType::Empty);
        assert!(tile.occupant.is_none());
        assert!(tile.effect.is_none());
        assert!(tile.item.is_none());
    }

    #[test]
    fn test_occupant_blocking() {
        assert!(Occupant::blocking(EntityId(7)).blocks_movement);
        assert!(!Occupant::passable(EntityId(7)).blocks_movement);
    }

    #[test]
    fn test_symbols_distinct() {
        let symbols: Vec<char> = TileType::iter().map(|t| t.symbol()).collect();
        for (i, a) in symbols.iter().enumerate() {
            for b in &symbols[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
