//! Play in the terminal, one command per line.
//!
//! `w/a/s/d`, arrow keys (followed by Enter), or `up/down/left/right` move;
//! `r` restarts; `q` quits.
//!
//! Needs the `cli` feature: `cargo run --features cli --bin play`.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::warn;

use rust_2048::{legal_moves, parse_command, Command, Game, GameConfig};

#[derive(Debug, Parser)]
#[command(author, version, about = "Sliding-tile merge puzzle on a 4x4 grid")]
struct Cli {
    /// TOML configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Spawn RNG seed (overrides the config file)
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Chance that a spawned tile is a 4 (overrides the config file)
    #[arg(long, value_name = "P")]
    four_probability: Option<f64>,
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::from_toml_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(p) = cli.four_probability {
        config = config.with_four_probability(p);
    }
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let config = load_config(&cli)?;
    let mut game = Game::new(config)?;

    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    writeln!(out, "{game}")?;
    write!(out, "> ")?;
    out.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::Restart) => {
                game.restart();
                writeln!(out, "{game}")?;
            }
            Some(Command::Move(direction)) => {
                let turn = game.on_direction(direction);
                if turn.moved {
                    writeln!(out, "{game}")?;
                    if turn.game_over {
                        writeln!(out, "Game over! (r to restart, q to quit)")?;
                    }
                } else if game.is_over() {
                    writeln!(out, "Game over! (r to restart, q to quit)")?;
                } else {
                    let hints: Vec<String> = legal_moves(game.board()).iter().map(ToString::to_string).collect();
                    writeln!(out, "{direction} changes nothing; try {}", hints.join(", "))?;
                }
            }
            None if line.trim().is_empty() => {}
            None => {
                warn!("unrecognised input {line:?}");
                writeln!(out, "Unknown command: {:?}", line.trim())?;
            }
        }
        write!(out, "> ")?;
        out.flush()?;
    }

    writeln!(out)?;
    let state = game.state();
    writeln!(
        out,
        "Final score: {} (max tile {}, {} moves)",
        state.score,
        state.board.max_tile(),
        game.moves()
    )?;
    Ok(())
}
