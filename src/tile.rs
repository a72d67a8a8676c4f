//! Tiles and tile identities.
//!
//! A tile's identity is independent of its value: two tiles showing `4` are
//! still different pieces, and the engine relies on that to stop a tile from
//! merging twice in one turn.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::constants::SPAWN_VALUE;

static NEXT_TILE_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque handle identifying one tile for the lifetime of the process.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(u64);

impl TileId {
    /// Allocate a fresh, never reused identity.
    fn next() -> Self {
        TileId(NEXT_TILE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One piece on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    id: TileId,
    value: u32,
}

impl Default for Tile {
    fn default() -> Self {
        Self::new()
    }
}

impl Tile {
    /// A new tile with the spawn value.
    pub fn new() -> Self {
        Self::with_value(SPAWN_VALUE)
    }

    /// A new tile with an explicit value. Mostly useful for setting up boards.
    ///
    /// `value` must be a power of two of at least 2.
    pub fn with_value(value: u32) -> Self {
        debug_assert!(is_tile_value(value), "invalid tile value {value}");
        Self {
            id: TileId::next(),
            value,
        }
    }

    #[inline]
    pub fn id(&self) -> TileId {
        self.id
    }

    #[inline]
    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn set_value(&mut self, value: u32) {
        debug_assert!(is_tile_value(value), "invalid tile value {value}");
        self.value = value;
    }
}

/// Whether `value` can appear on a tile.
pub fn is_tile_value(value: u32) -> bool {
    value >= 2 && value.is_power_of_two()
}
