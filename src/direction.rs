//! Compass directions and their projection onto the board axes.

use std::fmt;
use std::str::FromStr;

/// One of the four directions a turn can be played in.
///
/// `y` grows downwards, so north is `(0, -1)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

/// Board axis a direction moves along.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal movement; tiles change their `x` coordinate.
    X,
    /// Vertical movement; tiles change their `y` coordinate.
    Y,
}

/// A direction projected onto its axis of movement.
///
/// Tiles travel towards `edge`, the coordinate of the wall they slide
/// against, and `sign` is the unit step along `axis`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Sweep {
    pub axis: Axis,
    pub sign: isize,
    pub edge: usize,
}

impl Sweep {
    /// The `i`-th line to resolve, counting inwards from the destination edge.
    pub fn line(&self, i: usize) -> usize {
        (self.edge as isize - self.sign * i as isize) as usize
    }
}

impl Direction {
    /// All directions, in clockwise order starting from north.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Unit vector `(dx, dy)` for this direction.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    /// Project this direction onto its axis for a board of side `size`.
    pub fn sweep(self, size: usize) -> Sweep {
        let (dx, dy) = self.delta();
        let (axis, sign) = match self {
            Direction::East | Direction::West => (Axis::X, dx),
            Direction::North | Direction::South => (Axis::Y, dy),
        };
        let edge = if sign > 0 { size - 1 } else { 0 };
        Sweep { axis, sign, edge }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        };
        f.write_str(name)
    }
}

/// Error returned when a direction name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction: {0}")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Accepts compass names, arrow-key names and their initials.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "north" | "n" | "up" | "u" => Ok(Direction::North),
            "east" | "e" | "right" | "r" => Ok(Direction::East),
            "south" | "s" | "down" | "d" => Ok(Direction::South),
            "west" | "w" | "left" | "l" => Ok(Direction::West),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deltas_are_unit_vectors() {
        for dir in Direction::ALL {
            let (dx, dy) = dir.delta();
            assert_eq!(dx.abs() + dy.abs(), 1, "{dir} is not a unit step");
        }
    }

    #[test]
    fn test_sweep_projection() {
        assert_eq!(
            Direction::East.sweep(4),
            Sweep { axis: Axis::X, sign: 1, edge: 3 }
        );
        assert_eq!(
            Direction::West.sweep(4),
            Sweep { axis: Axis::X, sign: -1, edge: 0 }
        );
        assert_eq!(
            Direction::North.sweep(4),
            Sweep { axis: Axis::Y, sign: -1, edge: 0 }
        );
        assert_eq!(
            Direction::South.sweep(5),
            Sweep { axis: Axis::Y, sign: 1, edge: 4 }
        );
    }

    #[test]
    fn test_sweep_lines_start_at_edge() {
        let east: Vec<usize> = (0..4).map(|i| Direction::East.sweep(4).line(i)).collect();
        assert_eq!(east, vec![3, 2, 1, 0]);
        let north: Vec<usize> = (0..4).map(|i| Direction::North.sweep(4).line(i)).collect();
        assert_eq!(north, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_parse_direction() {
        assert_eq!("north".parse(), Ok(Direction::North));
        assert_eq!("RIGHT".parse(), Ok(Direction::East));
        assert_eq!("s".parse(), Ok(Direction::South));
        assert_eq!("left".parse(), Ok(Direction::West));
        assert!("sideways".parse::<Direction>().is_err());
    }
}
