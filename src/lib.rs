//! # rust-2048
//!
//! Engine for the 4x4 sliding-tile merge puzzle.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: `apply_move`, `is_terminal` and `collapse_line`
//!    are functions of their inputs. No globals, no cached flags.
//!
//! 2. **Injected randomness**: tile spawning draws from a `TileRng`, so
//!    tests and replays can force exact outcomes.
//!
//! 3. **No-ops are values**: a move that changes nothing reports
//!    `moved = false`; a spawn on a full board returns `None`. Neither is
//!    an error.
//!
//! ## Quick Start
//!
//! ```
//! use rust_2048::{Direction, Game, GameConfig, InputHandler};
//!
//! let mut game = Game::new(GameConfig::default().with_seed(42)).unwrap();
//!
//! for key in ["ArrowLeft", "w", "d", "S"] {
//!     game.on_key(key);
//! }
//! game.on_direction(Direction::Up);
//!
//! println!("{game}");
//! ```
//!
//! ## Modules
//!
//! - `core`: board, directions, state, RNG, configuration
//! - `rules`: line collapse, whole-board moves, spawning, terminal check
//! - `game`: session controller that owns state and RNG
//! - `input`: key, swipe and terminal-command mapping

pub mod core;
pub mod game;
pub mod input;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardError, ConfigError, Direction, GameConfig, GameRng, GameState, Phase, ScriptedRng, TileRng,
};

pub use crate::rules::{
    apply_move, collapse_line, init_board, is_terminal, legal_moves, spawn_tile, try_collapse_line, MoveResult, Spawn,
};

pub use crate::game::{Game, Turn};

pub use crate::input::{classify_swipe, map_key, parse_command, Command, InputHandler, SwipeTracker};
