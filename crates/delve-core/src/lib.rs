//! delve-core: dungeon floor generation and pathfinding
//!
//! This crate contains the grid data structure, the room-and-corridor
//! generator, and the A* pathfinder with no I/O dependencies. It is
//! designed to be pure and testable: generation runs to completion before
//! any consumer reads the grid, and pathfinding is a blocking call that
//! keeps no state between queries.
//!
//! Supports `no_std` environments by disabling the default `std` feature.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

/// Re-exports of alloc types needed when building without std.
/// In std mode, these are provided by the std prelude.
#[cfg(not(feature = "std"))]
pub(crate) mod compat {
    pub use alloc::vec;
    pub use alloc::vec::Vec;
}

pub mod map;
pub mod path;

mod consts;
mod rng;

pub use consts::*;
pub use rng::DungeonRng;
