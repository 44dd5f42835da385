//! Default floor-generation parameters.

/// Default floor dimensions
pub const DEFAULT_GRID_WIDTH: usize = 64;
pub const DEFAULT_GRID_HEIGHT: usize = 64;

/// Room placement attempts per floor (each attempt may be rejected)
pub const DEFAULT_ROOM_ATTEMPTS: usize = 30;

/// Room side length bounds (interior, inclusive)
pub const DEFAULT_MIN_ROOM_SIZE: usize = 4;
pub const DEFAULT_MAX_ROOM_SIZE: usize = 10;

/// Total rejection-sampling attempts when scattering effect tiles.
/// On exhaustion the floor keeps whatever was placed.
pub const EFFECT_SCATTER_ATTEMPT_CAP: usize = 1000;

/// Minimum number of effect tiles scattered per floor
pub const MIN_EFFECT_TILES: usize = 3;
