//! Board coordinates.
//!
//! A [`Location`] can only be built for a cell that exists on its board, so
//! every other part of the crate may assume its coordinates are in range.
//! Adjacency queries return `None` instead of stepping off the board.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::constants::BOARD_SIZE;
use crate::direction::{Axis, Direction};
use crate::error::{GameError, Result};

/// An immutable cell coordinate on an NxN board.
///
/// `x` grows to the east and `y` grows to the south. The board size is kept
/// alongside the coordinates for adjacency queries; equality, ordering and
/// hashing only look at `(x, y)`.
#[derive(Copy, Clone, Debug)]
pub struct Location {
    x: usize,
    y: usize,
    size: usize,
}

impl Location {
    /// Create a location on the canonical board.
    pub fn new(x: i64, y: i64) -> Result<Self> {
        Self::on_board(x, y, BOARD_SIZE)
    }

    /// Create a location on a board of side `size`.
    ///
    /// # Errors
    /// [`GameError::OutOfBounds`] if either coordinate is negative or not
    /// less than `size`.
    pub fn on_board(x: i64, y: i64, size: usize) -> Result<Self> {
        let in_range = |c: i64| c >= 0 && (c as u64) < size as u64;
        if !in_range(x) || !in_range(y) {
            return Err(GameError::OutOfBounds { x, y, size });
        }
        Ok(Self {
            x: x as usize,
            y: y as usize,
            size,
        })
    }

    #[inline]
    pub fn x(&self) -> usize {
        self.x
    }

    #[inline]
    pub fn y(&self) -> usize {
        self.y
    }

    /// Side length of the board this location belongs to.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The neighbouring cell in `direction`, or `None` at the board edge.
    pub fn adjacent(&self, direction: Direction) -> Option<Location> {
        let (dx, dy) = direction.delta();
        let x = self.x as i64 + dx as i64;
        let y = self.y as i64 + dy as i64;
        Location::on_board(x, y, self.size).ok()
    }

    pub fn has_adjacent(&self, direction: Direction) -> bool {
        self.adjacent(direction).is_some()
    }

    /// Every neighbouring cell: 2 for corners, 3 for edges, 4 otherwise.
    pub fn all_adjacent(&self) -> Vec<Location> {
        Direction::ALL
            .iter()
            .filter_map(|&dir| self.adjacent(dir))
            .collect()
    }

    /// Walk `steps` cells in `direction`; `None` if the path leaves the board.
    pub fn offset(&self, direction: Direction, steps: usize) -> Option<Location> {
        let mut loc = *self;
        for _ in 0..steps {
            loc = loc.adjacent(direction)?;
        }
        Some(loc)
    }

    /// Coordinate along `axis`.
    pub fn coordinate(&self, axis: Axis) -> usize {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Location {}

impl Hash for Location {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
    }
}

impl PartialOrd for Location {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Row-major order: by `y`, then by `x`.
impl Ord for Location {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
