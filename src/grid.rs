//! The tile store.
//!
//! [`Grid`] only records which tile sits where. It knows nothing about
//! movement or merging; the engine drives it through a
//! [`GameContext`](crate::context::GameContext).

use std::fmt;

use crate::constants::{BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::{GameError, Result};
use crate::location::Location;
use crate::tile::{Tile, TileId};

/// Mapping from board locations to the tiles occupying them.
///
/// Each location holds at most one tile and each tile identity appears at
/// most once.
#[derive(Clone, Debug)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<Tile>>,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            size: BOARD_SIZE,
            cells: vec![None; BOARD_SIZE * BOARD_SIZE],
        }
    }
}

impl Grid {
    /// Create an empty grid of side `size`.
    pub fn new(size: usize) -> Result<Self> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(GameError::InvalidBoardSize(size));
        }
        Ok(Self {
            size,
            cells: vec![None; size * size],
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Location on this grid's board, for callers holding raw coordinates.
    pub fn location(&self, x: i64, y: i64) -> Result<Location> {
        Location::on_board(x, y, self.size)
    }

    fn idx(&self, location: Location) -> Result<usize> {
        if location.x() >= self.size || location.y() >= self.size {
            return Err(GameError::OutOfBounds {
                x: location.x() as i64,
                y: location.y() as i64,
                size: self.size,
            });
        }
        Ok(location.y() * self.size + location.x())
    }

    fn location_of(&self, idx: usize) -> Location {
        // Indices are always below size * size, so this cannot fail.
        Location::on_board((idx % self.size) as i64, (idx / self.size) as i64, self.size)
            .unwrap_or_else(|_| unreachable!("cell index {idx} outside the board"))
    }

    /// The tile at `location`, if any.
    pub fn at(&self, location: Location) -> Result<Option<Tile>> {
        let i = self.idx(location)?;
        Ok(self.cells[i])
    }

    /// Mutable access to the tile at `location`, if any.
    pub fn at_mut(&mut self, location: Location) -> Result<Option<&mut Tile>> {
        let i = self.idx(location)?;
        Ok(self.cells[i].as_mut())
    }

    /// Where the tile with identity `id` currently sits.
    pub fn find(&self, id: TileId) -> Option<Location> {
        self.cells
            .iter()
            .position(|cell| cell.is_some_and(|t| t.id() == id))
            .map(|i| self.location_of(i))
    }

    /// All occupied locations in row-major order.
    pub fn occupied_locations(&self) -> Vec<Location> {
        self.locations_where(|cell| cell.is_some())
    }

    /// All empty locations in row-major order.
    pub fn unoccupied_locations(&self) -> Vec<Location> {
        self.locations_where(|cell| cell.is_none())
    }

    fn locations_where(&self, pred: impl Fn(&Option<Tile>) -> bool) -> Vec<Location> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| pred(*cell))
            .map(|(i, _)| self.location_of(i))
            .collect()
    }

    /// Place `tile` at `location`, returning whatever was there before.
    ///
    /// # Errors
    /// [`GameError::DuplicateTile`] if the same tile already sits elsewhere.
    pub fn put(&mut self, location: Location, tile: Tile) -> Result<Option<Tile>> {
        let i = self.idx(location)?;
        if let Some(existing) = self.find(tile.id()) {
            if existing != location {
                return Err(GameError::DuplicateTile(tile.id()));
            }
        }
        Ok(self.cells[i].replace(tile))
    }

    /// Remove and return the tile at `location`.
    pub fn remove(&mut self, location: Location) -> Result<Option<Tile>> {
        let i = self.idx(location)?;
        Ok(self.cells[i].take())
    }

    /// Remove every tile.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = None);
    }

    /// Number of tiles on the board.
    pub fn len(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Occupied locations with their tiles, in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = (Location, Tile)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| cell.map(|t| (self.location_of(i), t)))
    }

    /// Largest tile value on the board, or 0 if it is empty.
    pub fn max_value(&self) -> u32 {
        self.tiles().map(|(_, t)| t.value()).max().unwrap_or(0)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.max_value().max(1).to_string().len();
        for y in 0..self.size {
            for x in 0..self.size {
                match self.cells[y * self.size + x] {
                    Some(t) => write!(f, "{:>width$} ", t.value())?,
                    None => write!(f, "{:>width$} ", '.')?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
