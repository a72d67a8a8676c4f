//! Turn resolution.
//!
//! A turn runs in five steps:
//!
//! 1. **Legality** - the move is legal if some tile has an empty or
//!    equal-valued neighbour in the requested direction. Illegal moves
//!    return `Ok(false)` and change nothing.
//! 2. **Sweep** - lines perpendicular to the movement are visited starting
//!    at the wall the tiles slide towards, so a tile never has to look past
//!    one that has not moved yet.
//! 3. **Resolve** - each tile slides until it hits the wall or a tile,
//!    merging with an equal tile that has not already merged this turn.
//! 4. **Spawn** - one new tile appears on a random empty cell.
//! 5. **Terminal check** - win if any tile reached the winning value,
//!    otherwise lose if no direction is playable.
//!
//! The engine keeps no game state between turns; everything lives behind
//! the [`GameContext`].

use std::collections::HashSet;

use log::{debug, info};

use crate::constants::{BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE, WINNING_VALUE};
use crate::context::GameContext;
use crate::direction::Direction;
use crate::error::{GameError, Result};
use crate::grid::Grid;
use crate::location::Location;
use crate::tile::{Tile, TileId};

/// Game parameters.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rules {
    /// Board side length.
    pub size: usize,
    /// Tile value that wins the game.
    pub winning_value: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            size: BOARD_SIZE,
            winning_value: WINNING_VALUE,
        }
    }
}

impl Rules {
    /// Validated rules: `size` in `2..=16`, `winning_value` a power of two >= 4.
    pub fn new(size: usize, winning_value: u32) -> Result<Self> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(GameError::InvalidBoardSize(size));
        }
        if winning_value < 4 || !winning_value.is_power_of_two() {
            return Err(GameError::InvalidWinningValue(winning_value));
        }
        Ok(Self {
            size,
            winning_value,
        })
    }
}

/// Source of randomness for choosing where new tiles spawn.
pub trait SpawnSource {
    /// Pick an index in `0..count`. `count` is never zero.
    fn pick(&mut self, count: usize) -> usize;
}

impl SpawnSource for fastrand::Rng {
    fn pick(&mut self, count: usize) -> usize {
        self.usize(..count)
    }
}

/// The turn-resolution engine.
pub struct TurnEngine<S = fastrand::Rng> {
    rules: Rules,
    spawner: S,
}

impl Default for TurnEngine {
    fn default() -> Self {
        Self::new(Rules::default())
    }
}

impl TurnEngine {
    /// Engine spawning tiles from an entropy-seeded generator.
    pub fn new(rules: Rules) -> Self {
        Self::with_source(rules, fastrand::Rng::new())
    }

    /// Engine with a reproducible spawn sequence.
    pub fn with_seed(rules: Rules, seed: u64) -> Self {
        Self::with_source(rules, fastrand::Rng::with_seed(seed))
    }
}

impl<S: SpawnSource> TurnEngine<S> {
    pub fn with_source(rules: Rules, spawner: S) -> Self {
        Self { rules, spawner }
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// Play one turn in `direction`.
    ///
    /// Returns `Ok(false)` without touching the context if nothing can move
    /// or merge that way, `Ok(true)` once the turn has been applied.
    ///
    /// # Errors
    /// [`GameError::SizeMismatch`] if the context's grid is not the size the
    /// rules ask for, [`GameError::TileOverflow`] if a merge would exceed
    /// `u32`. Anything else comes from the context and indicates a broken
    /// context or a corrupted board, never an illegal move.
    pub fn turn<C: GameContext + ?Sized>(
        &mut self,
        direction: Direction,
        context: &mut C,
    ) -> Result<bool> {
        let size = context.grid().size();
        if size != self.rules.size {
            return Err(GameError::SizeMismatch {
                rules: self.rules.size,
                grid: size,
            });
        }
        if !is_move_possible(direction, context.grid())? {
            debug!("no tile can move {direction}");
            return Ok(false);
        }

        process_tiles(direction, context)?;
        self.spawn_tile(context)?;

        if self.is_game_won(context.grid()) {
            info!("winning value {} reached", self.rules.winning_value);
            context.win_game();
        } else if is_game_lost(context.grid())? {
            info!("no moves left, final score {}", context.score());
            context.lose_game();
        }
        Ok(true)
    }

    /// Place a tile of the spawn value on a random empty cell.
    ///
    /// Returns the chosen location, or `None` if the board is full.
    pub fn spawn_tile<C: GameContext + ?Sized>(&mut self, context: &mut C) -> Result<Option<Location>> {
        let open = context.grid().unoccupied_locations();
        if open.is_empty() {
            return Ok(None);
        }
        // Out-of-range picks wrap instead of panicking.
        let location = open[self.spawner.pick(open.len()) % open.len()];
        let tile = Tile::new();
        debug!("spawning {} at {location}", tile.value());
        context.add_tile(tile, location)?;
        Ok(Some(location))
    }

    /// Whether any tile has reached the winning value.
    pub fn is_game_won(&self, grid: &Grid) -> bool {
        grid.max_value() >= self.rules.winning_value
    }
}

/// Whether some tile can slide or merge in `direction`.
pub fn is_move_possible(direction: Direction, grid: &Grid) -> Result<bool> {
    for (loc, here) in grid.tiles() {
        if let Some(adj) = loc.adjacent(direction) {
            match grid.at(adj)? {
                None => return Ok(true),
                Some(there) if there.value() == here.value() => return Ok(true),
                Some(_) => {}
            }
        }
    }
    Ok(false)
}

/// Whether no direction is playable.
pub fn is_game_lost(grid: &Grid) -> Result<bool> {
    for dir in Direction::ALL {
        if is_move_possible(dir, grid)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Slide and merge every tile, sweeping from the destination wall inwards.
fn process_tiles<C: GameContext + ?Sized>(direction: Direction, context: &mut C) -> Result<()> {
    let size = context.grid().size();
    let sweep = direction.sweep(size);
    let mut merged: HashSet<TileId> = HashSet::new();

    for i in 0..size {
        let line = sweep.line(i);
        let on_line: Vec<Location> = context
            .grid()
            .occupied_locations()
            .into_iter()
            .filter(|loc| loc.coordinate(sweep.axis) == line)
            .collect();
        for loc in on_line {
            resolve(loc, direction, &mut merged, context)?;
        }
    }
    Ok(())
}

/// Move (and possibly merge) the tile at `loc` as far as it can go.
fn resolve<C: GameContext + ?Sized>(
    loc: Location,
    direction: Direction,
    merged: &mut HashSet<TileId>,
    context: &mut C,
) -> Result<()> {
    let grid = context.grid();
    let Some(here) = grid.at(loc)? else {
        return Ok(());
    };

    let mut steps = 0;
    let mut target: Option<Tile> = None;
    let mut dest = loc;
    while let Some(adj) = dest.adjacent(direction) {
        match grid.at(adj)? {
            None => {
                steps += 1;
                dest = adj;
            }
            Some(there) if there.value() == here.value() && !merged.contains(&there.id()) => {
                merged.insert(here.id());
                merged.insert(there.id());
                steps += 1;
                target = Some(there);
                break;
            }
            Some(_) => break,
        }
    }

    match target {
        None if steps == 0 => {}
        None => {
            debug!("{} slides {steps} {direction} from {loc}", here.id());
            context.move_tile(here.id(), direction, steps)?;
        }
        Some(there) => {
            let doubled = here
                .value()
                .checked_mul(2)
                .ok_or(GameError::TileOverflow(here.value()))?;
            debug!(
                "{} slides {steps} {direction} from {loc} and merges into {} ({doubled})",
                here.id(),
                there.id()
            );
            context.merge_tiles(there.id(), here.id(), direction, steps, doubled)?;
            context.increment_score_by(i64::from(doubled))?;
        }
    }
    Ok(())
}
