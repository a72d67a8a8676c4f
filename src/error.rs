//! Error type shared by the whole crate.

use crate::direction::Direction;
use crate::location::Location;
use crate::tile::TileId;

/// Errors raised by board construction and context operations.
///
/// An illegal move is *not* an error: [`TurnEngine::turn`] reports it by
/// returning `Ok(false)`.
///
/// [`TurnEngine::turn`]: crate::engine::TurnEngine::turn
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("location ({x}, {y}) is outside a {size}x{size} board")]
    OutOfBounds { x: i64, y: i64, size: usize },

    #[error("board size {0} is not supported")]
    InvalidBoardSize(usize),

    #[error("winning value {0} must be a power of two of at least 4")]
    InvalidWinningValue(u32),

    #[error("tile {0} is not on the board")]
    TileNotFound(TileId),

    #[error("tile {0} is already on the board")]
    DuplicateTile(TileId),

    #[error("location {0} is already occupied")]
    Occupied(Location),

    #[error("cannot move {steps} steps {direction} from {from}")]
    MoveOffBoard {
        from: Location,
        direction: Direction,
        steps: usize,
    },

    #[error("tile {mover} would land on {location}, which does not hold tile {target}")]
    MergeMismatch {
        target: TileId,
        mover: TileId,
        location: Location,
    },

    #[error("score would become negative ({0})")]
    NegativeScore(i64),

    #[error("merging two {0} tiles overflows the tile value")]
    TileOverflow(u32),

    #[error("engine plays a {rules}x{rules} board but the grid is {grid}x{grid}")]
    SizeMismatch { rules: usize, grid: usize },
}

pub type Result<T> = std::result::Result<T, GameError>;
