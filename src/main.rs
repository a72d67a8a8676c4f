//! Twenty48-Rust: play the sliding-tile puzzle from a terminal.
//!
//! ## Usage
//!
//! - `twenty48-rust` - Show a demo
//! - `twenty48-rust play` - Start the text command loop
//! - `twenty48-rust demo` - Play random moves until the game ends

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;

use twenty48_rust::constants::{BOARD_SIZE, WINNING_VALUE};
use twenty48_rust::engine::Rules;
use twenty48_rust::game::Game;
use twenty48_rust::shell::Shell;

/// Twenty48-Rust: a sliding-tile merge puzzle
#[derive(Parser)]
#[command(name = "twenty48-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Board side length
    #[arg(long, global = true, default_value_t = BOARD_SIZE)]
    size: usize,

    /// Tile value that wins the game
    #[arg(long, global = true, default_value_t = WINNING_VALUE)]
    target: u32,

    /// Seed for tile spawns (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the text command loop on stdin/stdout
    Play,
    /// Play random legal moves until the game ends
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let rules = Rules::new(cli.size, cli.target)?;
    let game = match cli.seed {
        Some(seed) => Game::with_seed(rules, seed)?,
        None => Game::new(rules)?,
    };

    match cli.command {
        Some(Commands::Play) => Shell::new(game).run_stdio(),
        Some(Commands::Demo) | None => run_demo(game, cli.seed),
    }
}

fn run_demo(mut game: Game, seed: Option<u64>) -> Result<()> {
    let rules = game.rules();
    println!(
        "Twenty48-Rust: sliding-tile merge puzzle ({size}x{size}, target {target})\n",
        size = rules.size,
        target = rules.winning_value
    );
    println!("{}", game.grid());

    let mut rng = seed.map_or_else(fastrand::Rng::new, |s| fastrand::Rng::with_seed(s ^ 0x2048));
    let mut turns = 0usize;
    loop {
        let moves = game.legal_moves()?;
        if moves.is_empty() || !game.play(moves[rng.usize(..moves.len())])? {
            break;
        }
        game.state_mut().drain_events();
        turns += 1;
    }

    println!("{}", game.grid());
    info!("demo finished after {turns} turns");
    println!(
        "Status: {:?}, score: {}, largest tile: {}",
        game.status(),
        game.score(),
        game.grid().max_value()
    );
    Ok(())
}
