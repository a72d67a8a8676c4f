//! End-to-end tests of the game host: events, status and restarts.

use twenty48_rust::context::GameContext;
use twenty48_rust::direction::Direction;
use twenty48_rust::engine::{Rules, SpawnSource, TurnEngine};
use twenty48_rust::game::{Game, GameStatus, TurnEvent};
use twenty48_rust::grid::Grid;
use twenty48_rust::location::Location;
use twenty48_rust::tile::Tile;

/// Always spawns on the last empty cell in row-major order.
struct LastFree;

impl SpawnSource for LastFree {
    fn pick(&mut self, count: usize) -> usize {
        count - 1
    }
}

fn loc(x: i64, y: i64) -> Location {
    Location::new(x, y).unwrap()
}

fn game_with(tiles: &[(i64, i64, u32)], rules: Rules) -> Game<LastFree> {
    let mut grid = Grid::new(rules.size).unwrap();
    for &(x, y, v) in tiles {
        grid.put(grid.location(x, y).unwrap(), Tile::with_value(v))
            .unwrap();
    }
    Game::from_grid(TurnEngine::with_source(rules, LastFree), grid)
}

#[test]
fn test_turn_events_in_order() {
    let mut game = game_with(&[(0, 0, 2), (1, 0, 2)], Rules::default());
    let mover = game.grid().at(loc(0, 0)).unwrap().unwrap().id();
    let target = game.grid().at(loc(1, 0)).unwrap().unwrap().id();

    assert!(game.play(Direction::East).unwrap());
    let events = game.state_mut().drain_events();
    let spawned = game.grid().at(loc(3, 3)).unwrap().unwrap().id();
    assert_eq!(
        events,
        vec![
            TurnEvent::Moved {
                tile: target,
                from: loc(1, 0),
                to: loc(3, 0)
            },
            TurnEvent::Merged {
                target,
                mover,
                from: loc(0, 0),
                to: loc(3, 0),
                value: 4
            },
            TurnEvent::Score(4),
            TurnEvent::Added {
                tile: spawned,
                location: loc(3, 3),
                value: 2
            },
        ]
    );
    assert_eq!(game.score(), 4);
    assert_eq!(game.best_score(), 4);
}

#[test]
fn test_illegal_move_records_nothing() {
    let mut game = game_with(&[(0, 0, 2)], Rules::default());
    assert!(!game.play(Direction::West).unwrap());
    assert!(!game.play(Direction::North).unwrap());
    assert!(game.state().events().is_empty());
    assert_eq!(game.grid().len(), 1);
}

#[test]
fn test_win_stops_play() {
    let mut game = game_with(&[(0, 0, 8), (0, 1, 8)], Rules::new(4, 16).unwrap());

    assert!(game.play(Direction::North).unwrap());
    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(game.state().events().last(), Some(&TurnEvent::Won));

    let tiles = game.grid().len();
    assert!(!game.play(Direction::South).unwrap());
    assert_eq!(game.grid().len(), tiles);
}

#[test]
fn test_loss_is_reported() {
    // West slides the top row left and the spawn fills the last gap.
    let rows: [[u32; 4]; 4] = [[0, 4, 8, 16], [2, 4, 8, 4], [4, 2, 4, 2], [2, 4, 2, 4]];
    let mut tiles = Vec::new();
    for (y, row) in rows.iter().enumerate() {
        for (x, &v) in row.iter().enumerate() {
            if v != 0 {
                tiles.push((x as i64, y as i64, v));
            }
        }
    }
    let mut game = game_with(&tiles, Rules::default());

    assert!(game.play(Direction::West).unwrap());
    assert_eq!(game.status(), GameStatus::Lost);
    assert_eq!(game.state().events().last(), Some(&TurnEvent::Lost));
    assert!(game.legal_moves().unwrap().is_empty());
}

#[test]
fn test_restart_after_loss() {
    let mut game = Game::with_seed(Rules::new(2, 2048).unwrap(), 9).unwrap();
    let mut rng = fastrand::Rng::with_seed(9);
    // A 2x2 board runs out of moves quickly.
    for _ in 0..1000 {
        if game.status() != GameStatus::InProgress {
            break;
        }
        let dir = Direction::ALL[rng.usize(..4)];
        game.play(dir).unwrap();
    }
    assert_eq!(game.status(), GameStatus::Lost);
    let best = game.best_score();
    assert_eq!(best, game.score());

    game.restart().unwrap();
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.score(), 0);
    assert_eq!(game.best_score(), best);
    assert_eq!(game.grid().len(), 2);
}

#[test]
fn test_seeded_games_are_reproducible() {
    let play = |seed: u64| {
        let mut game = Game::with_seed(Rules::default(), seed).unwrap();
        for dir in [Direction::North, Direction::East, Direction::South, Direction::West].repeat(10) {
            game.play(dir).unwrap();
        }
        (game.grid().to_string(), game.score())
    };
    assert_eq!(play(17), play(17));
}

#[test]
fn test_set_score_updates_best() {
    let mut game = game_with(&[], Rules::default());
    game.state_mut().set_score(100).unwrap();
    game.state_mut().set_score(10).unwrap();
    assert_eq!(game.score(), 10);
    assert_eq!(game.best_score(), 100);
    assert!(game.state_mut().set_score(-1).is_err());
}
