//! Line-oriented text protocol for driving a game.
//!
//! Each request is one line, optionally prefixed by a numeric id. Each
//! response is `=[id] message` on success or `?[id] message` on failure,
//! followed by a blank line.
//!
//! ## Supported Commands
//!
//! - `name` - Return engine name
//! - `version` - Return engine version
//! - `list_commands` - List all supported commands
//! - `known_command <cmd>` - Check if a command is supported
//! - `quit` - Exit the loop
//! - `new` - Start a new game (the best score is kept)
//! - `move <dir>` - Play a turn; `north`, `east`, `south`, `west` (and
//!   `up`, `right`, `down`, `left`) also work as bare commands
//! - `show` - Print the board
//! - `score` - Print score and best score
//! - `status` - Print `playing`, `won` or `lost`
//! - `moves` - List the directions that would change the board
//!
//! ## Example
//!
//! ```ignore
//! use twenty48_rust::engine::Rules;
//! use twenty48_rust::game::Game;
//! use twenty48_rust::shell::Shell;
//! let mut shell = Shell::new(Game::new(Rules::default())?);
//! shell.run_stdio()?;
//! ```

use std::io::{self, BufRead, Write};

use anyhow::Context;
use log::debug;

use crate::direction::Direction;
use crate::engine::SpawnSource;
use crate::game::{Game, GameStatus};

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "known_command",
    "list_commands",
    "move",
    "moves",
    "name",
    "new",
    "quit",
    "score",
    "show",
    "status",
    "version",
];

/// Shell state: the game being played.
pub struct Shell<S = fastrand::Rng> {
    game: Game<S>,
}

impl<S: SpawnSource> Shell<S> {
    pub fn new(game: Game<S>) -> Self {
        Self { game }
    }

    pub fn game(&self) -> &Game<S> {
        &self.game
    }

    /// Run the command loop on stdin and stdout.
    pub fn run_stdio(&mut self) -> anyhow::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run(stdin.lock(), stdout.lock())
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> anyhow::Result<()> {
        for line in input.lines() {
            let line = line.context("failed to read command")?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            let command = parts[0].to_lowercase();
            let args = &parts[1..];
            debug!("command: {command} {args:?}");

            let (success, message) = self.execute(&command, args);
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            writeln!(output, "{prefix}{id_str} {message}\n").context("failed to write response")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }
        (None, trimmed)
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                let known = KNOWN_COMMANDS.contains(&args[0].to_lowercase().as_str())
                    || args[0].parse::<Direction>().is_ok();
                (true, if known { "true" } else { "false" }.to_string())
            }

            "quit" => (true, String::new()),

            "new" => match self.game.restart() {
                Ok(()) => (true, format!("\n{}", self.game.grid())),
                Err(e) => (false, e.to_string()),
            },

            "move" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                match args[0].parse::<Direction>() {
                    Ok(dir) => self.play(dir),
                    Err(e) => (false, e.to_string()),
                }
            }

            "show" => (true, format!("\n{}", self.game.grid())),

            "score" => (
                true,
                format!("{} (best {})", self.game.score(), self.game.best_score()),
            ),

            "status" => (true, status_name(self.game.status()).to_string()),

            "moves" => match self.game.legal_moves() {
                Ok(moves) => (
                    true,
                    moves
                        .iter()
                        .map(Direction::to_string)
                        .collect::<Vec<_>>()
                        .join(" "),
                ),
                Err(e) => (false, e.to_string()),
            },

            _ => match command.parse::<Direction>() {
                Ok(dir) => self.play(dir),
                Err(_) => (false, format!("unknown command: {command}")),
            },
        }
    }

    fn play(&mut self, dir: Direction) -> (bool, String) {
        if self.game.status() != GameStatus::InProgress {
            return (false, format!("game is over ({})", status_name(self.game.status())));
        }
        match self.game.play(dir) {
            Ok(true) => {
                self.game.state_mut().drain_events();
                let mut message = format!("\n{}", self.game.grid());
                match self.game.status() {
                    GameStatus::Won => message.push_str("you win!"),
                    GameStatus::Lost => message.push_str("game over!"),
                    GameStatus::InProgress => {}
                }
                (true, message)
            }
            Ok(false) => (false, format!("cannot move {dir}")),
            Err(e) => (false, e.to_string()),
        }
    }
}

fn status_name(status: GameStatus) -> &'static str {
    match status {
        GameStatus::InProgress => "playing",
        GameStatus::Won => "won",
        GameStatus::Lost => "lost",
    }
}
