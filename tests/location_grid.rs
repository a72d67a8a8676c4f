//! Tests for board coordinates and the tile store.

use std::collections::{HashMap, HashSet};

use twenty48_rust::constants::BOARD_SIZE;
use twenty48_rust::direction::Direction;
use twenty48_rust::grid::Grid;
use twenty48_rust::location::Location;
use twenty48_rust::tile::Tile;

const N: i64 = BOARD_SIZE as i64;

fn all_locations() -> Vec<Location> {
    let mut locs = Vec::new();
    for y in 0..N {
        for x in 0..N {
            locs.push(Location::new(x, y).unwrap());
        }
    }
    locs
}

/// Coordinates one step from `(x, y)` in `dir`, computed by hand.
fn shifted(x: i64, y: i64, dir: Direction) -> (i64, i64) {
    match dir {
        Direction::North => (x, y - 1),
        Direction::East => (x + 1, y),
        Direction::South => (x, y + 1),
        Direction::West => (x - 1, y),
    }
}

// =============================================================================
// Location
// =============================================================================

#[test]
fn test_construction_range() {
    let range = 2 * N;
    for x in -range..range {
        for y in -range..range {
            let valid = (0..N).contains(&x) && (0..N).contains(&y);
            assert_eq!(
                Location::new(x, y).is_ok(),
                valid,
                "construction of ({x}, {y})"
            );
        }
    }
}

#[test]
fn test_coordinates() {
    for y in 0..N {
        for x in 0..N {
            let loc = Location::new(x, y).unwrap();
            assert_eq!(loc.x() as i64, x);
            assert_eq!(loc.y() as i64, y);
            assert_eq!(loc.size(), BOARD_SIZE);
        }
    }
    let wide = Location::on_board(5, 0, 6).unwrap();
    assert_eq!(wide.size(), 6);
    assert!(wide.has_adjacent(Direction::West));
    assert!(!wide.has_adjacent(Direction::East));
}

#[test]
fn test_equality() {
    for a in all_locations() {
        assert_eq!(a, a);
        for b in all_locations() {
            assert_eq!(a == b, a.x() == b.x() && a.y() == b.y());
            assert_eq!(a == b, b == a);
        }
    }
}

#[test]
fn test_hash_is_by_coordinates() {
    let set: HashSet<Location> = all_locations()
        .into_iter()
        .chain(all_locations())
        .collect();
    assert_eq!(set.len(), BOARD_SIZE * BOARD_SIZE);
    assert!(set.contains(&Location::new(2, 3).unwrap()));
}

#[test]
fn test_adjacent_matches_manual_shift() {
    for loc in all_locations() {
        for dir in Direction::ALL {
            let (x2, y2) = shifted(loc.x() as i64, loc.y() as i64, dir);
            match loc.adjacent(dir) {
                Some(adj) => {
                    assert_eq!((adj.x() as i64, adj.y() as i64), (x2, y2));
                }
                None => assert!(
                    Location::new(x2, y2).is_err(),
                    "adjacent {dir} of {loc} was None but ({x2}, {y2}) is valid"
                ),
            }
        }
    }
}

#[test]
fn test_has_adjacent_agrees_with_adjacent() {
    for loc in all_locations() {
        for dir in Direction::ALL {
            let (x2, y2) = shifted(loc.x() as i64, loc.y() as i64, dir);
            assert_eq!(loc.has_adjacent(dir), loc.adjacent(dir).is_some());
            assert_eq!(loc.has_adjacent(dir), Location::new(x2, y2).is_ok());
        }
    }
}

#[test]
fn test_all_adjacent() {
    for loc in all_locations() {
        let adj = loc.all_adjacent();
        let expected: Vec<Location> = Direction::ALL
            .iter()
            .filter_map(|&d| loc.adjacent(d))
            .collect();
        assert_eq!(adj, expected);

        let on_x_edge = loc.x() == 0 || loc.x() == BOARD_SIZE - 1;
        let on_y_edge = loc.y() == 0 || loc.y() == BOARD_SIZE - 1;
        let size = match (on_x_edge, on_y_edge) {
            (true, true) => 2,
            (true, false) | (false, true) => 3,
            (false, false) => 4,
        };
        assert_eq!(adj.len(), size, "neighbours of {loc}");
    }
}

// =============================================================================
// Grid
// =============================================================================

#[test]
fn test_put_and_at() {
    let mut grid = Grid::default();

    // Repeat to overwrite every cell a few times.
    for _ in 0..5 {
        let mut expected = HashMap::new();
        for loc in all_locations() {
            let tile = Tile::new();
            expected.insert(loc, tile);
            grid.put(loc, tile).unwrap();
        }
        for (loc, tile) in &expected {
            assert_eq!(grid.at(*loc).unwrap(), Some(*tile));
        }
    }
}

#[test]
fn test_remove() {
    let mut grid = Grid::default();
    let mut expected = HashMap::new();
    for loc in all_locations() {
        let tile = Tile::new();
        expected.insert(loc, tile);
        grid.put(loc, tile).unwrap();
    }
    for (loc, tile) in expected {
        assert_eq!(grid.remove(loc).unwrap(), Some(tile));
        assert_eq!(grid.remove(loc).unwrap(), None);
        assert_eq!(grid.at(loc).unwrap(), None);
    }
    assert!(grid.is_empty());
}

#[test]
fn test_occupied_and_unoccupied_partition_the_board() {
    let mut grid = Grid::default();
    let mut rng = fastrand::Rng::with_seed(2048);
    let board: HashSet<Location> = all_locations().into_iter().collect();

    for _ in 0..200 {
        let loc = all_locations()[rng.usize(..BOARD_SIZE * BOARD_SIZE)];
        if rng.bool() {
            grid.put(loc, Tile::new()).unwrap();
        } else {
            grid.remove(loc).unwrap();
        }

        let occupied: HashSet<Location> = grid.occupied_locations().into_iter().collect();
        let unoccupied: HashSet<Location> = grid.unoccupied_locations().into_iter().collect();
        assert!(occupied.is_disjoint(&unoccupied));
        assert_eq!(&occupied | &unoccupied, board);
        assert_eq!(occupied.len(), grid.len());
    }
}

#[test]
fn test_find_follows_tile_identity() {
    let mut grid = Grid::default();
    let a = Tile::with_value(4);
    let b = Tile::with_value(4);
    let la = Location::new(0, 3).unwrap();
    let lb = Location::new(3, 0).unwrap();
    grid.put(la, a).unwrap();
    grid.put(lb, b).unwrap();

    assert_eq!(grid.find(a.id()), Some(la));
    assert_eq!(grid.find(b.id()), Some(lb));

    let moved = grid.remove(la).unwrap().unwrap();
    let to = Location::new(1, 1).unwrap();
    grid.put(to, moved).unwrap();
    assert_eq!(grid.find(a.id()), Some(to));
}

#[test]
fn test_max_value() {
    let mut grid = Grid::default();
    assert_eq!(grid.max_value(), 0);
    grid.put(Location::new(0, 0).unwrap(), Tile::with_value(8)).unwrap();
    grid.put(Location::new(1, 0).unwrap(), Tile::with_value(64)).unwrap();
    assert_eq!(grid.max_value(), 64);
}
