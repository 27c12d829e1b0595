//! Core types: board, directions, state, RNG, configuration.
//!
//! Everything here is plain data. The move rules that transform a board
//! live in [`crate::rules`].

pub mod board;
pub mod config;
pub mod rng;
pub mod state;

pub use board::{can_merge, is_valid_tile, Board, BoardError, Direction, Rows, CELLS, MAX_TILE, SIZE};
pub use config::{
    ConfigError, GameConfig, DEFAULT_FOUR_PROBABILITY, DEFAULT_STARTING_TILES, DEFAULT_SWIPE_DEADZONE,
};
pub use rng::{GameRng, ScriptedRng, TileRng};
pub use state::{GameState, Phase};
