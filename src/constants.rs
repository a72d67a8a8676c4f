//! Constants for board dimensions and game parameters.
//!
//! These are the canonical values of the game. The engine itself takes its
//! board size and winning value from [`Rules`](crate::engine::Rules), so any
//! of them can be overridden at runtime.

// =============================================================================
// Board Geometry
// =============================================================================

/// Canonical board side length (NxN).
pub const BOARD_SIZE: usize = 4;

/// Smallest board on which the game is still meaningful.
pub const MIN_BOARD_SIZE: usize = 2;

/// Largest supported board. Coordinates are rendered and parsed as small
/// integers, and the engine probes are quadratic in the side length.
pub const MAX_BOARD_SIZE: usize = 16;

// =============================================================================
// Tile Values
// =============================================================================

/// Value of every freshly spawned tile.
pub const SPAWN_VALUE: u32 = 2;

/// Tile value that wins the game.
pub const WINNING_VALUE: u32 = 2048;

/// Number of tiles placed on an empty board when a game starts.
pub const INITIAL_TILES: usize = 2;
