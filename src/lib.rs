//! Twenty48-Rust: turn resolution for a sliding-tile merge puzzle.
//!
//! Tiles on a square grid slide in one of four directions; equal tiles that
//! collide merge into one tile of double the value, at most once per turn.
//! After each move a new tile spawns on a random empty cell, and the game is
//! won when a tile reaches the winning value or lost when nothing can move.
//!
//! ## Modules
//!
//! - [`constants`] - Canonical board size and tile values
//! - [`direction`] - Compass directions and axis projection
//! - [`location`] - Validated board coordinates
//! - [`tile`] - Tiles and tile identities
//! - [`grid`] - The tile store
//! - [`context`] - The interface the engine mutates the game through
//! - [`engine`] - Turn resolution
//! - [`game`] - A headless host implementing the context
//! - [`shell`] - Text command loop driving a game
//!
//! ## Example
//!
//! ```
//! use twenty48_rust::context::GameContext;
//! use twenty48_rust::direction::Direction;
//! use twenty48_rust::engine::{Rules, TurnEngine};
//! use twenty48_rust::game::GameState;
//! use twenty48_rust::grid::Grid;
//! use twenty48_rust::location::Location;
//! use twenty48_rust::tile::Tile;
//!
//! let mut grid = Grid::default();
//! grid.put(Location::new(0, 0)?, Tile::with_value(2))?;
//! grid.put(Location::new(1, 0)?, Tile::with_value(2))?;
//! let mut state = GameState::from_grid(grid);
//!
//! let mut engine = TurnEngine::with_seed(Rules::default(), 1);
//! assert!(engine.turn(Direction::East, &mut state)?);
//! assert_eq!(state.grid().at(Location::new(3, 0)?)?.map(|t| t.value()), Some(4));
//! assert_eq!(state.score(), 4);
//! # Ok::<(), twenty48_rust::error::GameError>(())
//! ```

pub mod constants;
pub mod context;
pub mod direction;
pub mod engine;
pub mod error;
pub mod game;
pub mod grid;
pub mod location;
pub mod shell;
pub mod tile;
