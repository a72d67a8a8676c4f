//! A headless game host.
//!
//! [`GameState`] is the stock [`GameContext`]: a grid, the score, the best
//! score of the session and the game status. Every change the engine makes
//! is also appended to an event log that a presentation layer can drain to
//! animate the turn.
//!
//! [`Game`] bundles a state with a [`TurnEngine`] and handles starting and
//! restarting games.

use log::info;

use crate::constants::INITIAL_TILES;
use crate::context::GameContext;
use crate::direction::Direction;
use crate::engine::{Rules, SpawnSource, TurnEngine, is_move_possible};
use crate::error::{GameError, Result};
use crate::grid::Grid;
use crate::location::Location;
use crate::tile::{Tile, TileId};

/// Where a game stands.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// One observable consequence of a turn, in the order it happened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnEvent {
    Added {
        tile: TileId,
        location: Location,
        value: u32,
    },
    Moved {
        tile: TileId,
        from: Location,
        to: Location,
    },
    Merged {
        target: TileId,
        mover: TileId,
        from: Location,
        to: Location,
        value: u32,
    },
    Score(u64),
    Won,
    Lost,
}

/// Grid, score and status of one game session.
#[derive(Clone, Debug)]
pub struct GameState {
    grid: Grid,
    score: u64,
    best: u64,
    status: GameStatus,
    events: Vec<TurnEvent>,
}

impl GameState {
    /// A state around an existing grid, with a zero score.
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            score: 0,
            best: 0,
            status: GameStatus::InProgress,
            events: Vec::new(),
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Highest score seen in this session. Survives restarts.
    pub fn best_score(&self) -> u64 {
        self.best
    }

    /// Events recorded since the last drain.
    pub fn events(&self) -> &[TurnEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<TurnEvent> {
        std::mem::take(&mut self.events)
    }

    /// Empty the board and reset score and status. The best score is kept.
    fn reset(&mut self) {
        self.grid.clear();
        self.score = 0;
        self.status = GameStatus::InProgress;
        self.events.clear();
    }

    fn record_score(&mut self, score: u64) {
        self.score = score;
        self.best = self.best.max(score);
        self.events.push(TurnEvent::Score(score));
    }

    fn locate(&self, tile: TileId) -> Result<Location> {
        self.grid.find(tile).ok_or(GameError::TileNotFound(tile))
    }
}

impl GameContext for GameState {
    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn score(&self) -> u64 {
        self.score
    }

    fn add_tile(&mut self, tile: Tile, location: Location) -> Result<()> {
        if self.grid.at(location)?.is_some() {
            return Err(GameError::Occupied(location));
        }
        self.grid.put(location, tile)?;
        self.events.push(TurnEvent::Added {
            tile: tile.id(),
            location,
            value: tile.value(),
        });
        Ok(())
    }

    fn move_tile(&mut self, tile: TileId, direction: Direction, steps: usize) -> Result<()> {
        let from = self.locate(tile)?;
        let to = from
            .offset(direction, steps)
            .ok_or(GameError::MoveOffBoard {
                from,
                direction,
                steps,
            })?;
        if to != from && self.grid.at(to)?.is_some() {
            return Err(GameError::Occupied(to));
        }
        if let Some(moving) = self.grid.remove(from)? {
            self.grid.put(to, moving)?;
        }
        self.events.push(TurnEvent::Moved { tile, from, to });
        Ok(())
    }

    fn merge_tiles(
        &mut self,
        target: TileId,
        mover: TileId,
        direction: Direction,
        steps: usize,
        new_value: u32,
    ) -> Result<()> {
        let at = self.locate(target)?;
        let from = self.locate(mover)?;
        let to = from
            .offset(direction, steps)
            .ok_or(GameError::MoveOffBoard {
                from,
                direction,
                steps,
            })?;
        if to != at {
            return Err(GameError::MergeMismatch {
                target,
                mover,
                location: to,
            });
        }
        self.grid.remove(at)?;
        if let Some(mut moving) = self.grid.remove(from)? {
            moving.set_value(new_value);
            self.grid.put(to, moving)?;
        }
        self.events.push(TurnEvent::Merged {
            target,
            mover,
            from,
            to,
            value: new_value,
        });
        Ok(())
    }

    fn increment_score_by(&mut self, amount: i64) -> Result<u64> {
        if amount < 0 {
            return Err(GameError::NegativeScore(amount));
        }
        let score = self.score.saturating_add(amount as u64);
        self.record_score(score);
        Ok(score)
    }

    fn set_score(&mut self, score: i64) -> Result<()> {
        if score < 0 {
            return Err(GameError::NegativeScore(score));
        }
        self.record_score(score as u64);
        Ok(())
    }

    fn win_game(&mut self) {
        self.status = GameStatus::Won;
        self.events.push(TurnEvent::Won);
    }

    fn lose_game(&mut self) {
        self.status = GameStatus::Lost;
        self.events.push(TurnEvent::Lost);
    }
}

/// A playable game: state plus the engine that advances it.
pub struct Game<S = fastrand::Rng> {
    state: GameState,
    engine: TurnEngine<S>,
}

impl Game {
    /// Start a new game with an entropy-seeded spawn source.
    pub fn new(rules: Rules) -> Result<Self> {
        Self::with_engine(TurnEngine::new(rules))
    }

    /// Start a new game whose spawns are reproducible.
    pub fn with_seed(rules: Rules, seed: u64) -> Result<Self> {
        Self::with_engine(TurnEngine::with_seed(rules, seed))
    }
}

impl<S: SpawnSource> Game<S> {
    /// Start a new game: an empty board plus the initial tiles.
    pub fn with_engine(engine: TurnEngine<S>) -> Result<Self> {
        let grid = Grid::new(engine.rules().size)?;
        let mut game = Self {
            state: GameState::from_grid(grid),
            engine,
        };
        game.restart()?;
        Ok(game)
    }

    /// Resume from an existing board without spawning anything.
    pub fn from_grid(engine: TurnEngine<S>, grid: Grid) -> Self {
        Self {
            state: GameState::from_grid(grid),
            engine,
        }
    }

    /// Clear the board and start over. The best score is kept.
    pub fn restart(&mut self) -> Result<()> {
        self.state.reset();
        for _ in 0..INITIAL_TILES {
            self.engine.spawn_tile(&mut self.state)?;
        }
        info!("new {size}x{size} game", size = self.state.grid.size());
        Ok(())
    }

    /// Play one turn. Returns `Ok(false)` if the move is illegal or the game
    /// is already over.
    pub fn play(&mut self, direction: Direction) -> Result<bool> {
        if self.state.status != GameStatus::InProgress {
            return Ok(false);
        }
        self.engine.turn(direction, &mut self.state)
    }

    /// Directions that would currently change the board.
    pub fn legal_moves(&self) -> Result<Vec<Direction>> {
        let mut moves = Vec::with_capacity(4);
        for dir in Direction::ALL {
            if is_move_possible(dir, &self.state.grid)? {
                moves.push(dir);
            }
        }
        Ok(moves)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn grid(&self) -> &Grid {
        &self.state.grid
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn best_score(&self) -> u64 {
        self.state.best
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn rules(&self) -> Rules {
        self.engine.rules()
    }
}
