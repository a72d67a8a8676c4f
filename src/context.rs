//! The capability interface between the turn engine and its host.
//!
//! The engine never touches game state directly. It reads the grid and
//! issues every change (moves, merges, spawns, score, win/loss) through a
//! [`GameContext`], so a presentation layer can observe and animate each
//! step, and tests can record them.

use crate::direction::Direction;
use crate::error::Result;
use crate::grid::Grid;
use crate::location::Location;
use crate::tile::{Tile, TileId};

pub trait GameContext {
    /// Read access to the current board.
    fn grid(&self) -> &Grid;

    /// The current score.
    fn score(&self) -> u64;

    /// Place a newly spawned tile.
    ///
    /// # Errors
    /// Fails if `location` is already occupied.
    fn add_tile(&mut self, tile: Tile, location: Location) -> Result<()>;

    /// Slide `tile` by `steps` cells in `direction`.
    ///
    /// # Errors
    /// Fails if the tile is not on the board or the path runs off it.
    fn move_tile(&mut self, tile: TileId, direction: Direction, steps: usize) -> Result<()>;

    /// Move `mover` `steps` cells in `direction` onto `target`'s cell,
    /// removing `target` and giving `mover` the value `new_value`.
    fn merge_tiles(
        &mut self,
        target: TileId,
        mover: TileId,
        direction: Direction,
        steps: usize,
        new_value: u32,
    ) -> Result<()>;

    /// Add `amount` points and return the new score.
    ///
    /// # Errors
    /// Fails if `amount` is negative or the score would drop below zero.
    fn increment_score_by(&mut self, amount: i64) -> Result<u64>;

    /// Overwrite the score.
    ///
    /// # Errors
    /// Fails if `score` is negative.
    fn set_score(&mut self, score: i64) -> Result<()>;

    /// The player has won. Called at most once per turn.
    fn win_game(&mut self);

    /// The player has lost. Called at most once per turn.
    fn lose_game(&mut self);
}
