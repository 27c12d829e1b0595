//! Game configuration.
//!
//! Front ends configure the engine at startup with a [`GameConfig`]. Every
//! field has a default matching the classic game, so an empty TOML file is
//! a valid configuration:
//!
//! ```toml
//! four_probability = 0.1
//! starting_tiles = 2
//! swipe_deadzone = 30.0
//! seed = 42
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::board::CELLS;

/// Probability that a spawned tile is a 4 rather than a 2.
pub const DEFAULT_FOUR_PROBABILITY: f64 = 0.1;

/// Tiles placed on a fresh board.
pub const DEFAULT_STARTING_TILES: usize = 2;

/// Minimum swipe displacement, on either axis, that counts as a move.
pub const DEFAULT_SWIPE_DEADZONE: f64 = 30.0;

/// Error loading or validating a [`GameConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("four_probability must be within [0, 1], got {0}")]
    FourProbability(f64),
    #[error("starting_tiles must be within 1..=16, got {0}")]
    StartingTiles(usize),
    #[error("swipe_deadzone must be finite and non-negative, got {0}")]
    SwipeDeadzone(f64),
}

/// Engine and input configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Chance that a spawned tile is a 4 (otherwise a 2).
    pub four_probability: f64,

    /// Tiles spawned on a fresh board.
    pub starting_tiles: usize,

    /// Swipe deadzone in input units (pixels for touch).
    pub swipe_deadzone: f64,

    /// Spawn RNG seed. `None` seeds from OS entropy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            four_probability: DEFAULT_FOUR_PROBABILITY,
            starting_tiles: DEFAULT_STARTING_TILES,
            swipe_deadzone: DEFAULT_SWIPE_DEADZONE,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Check every field is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.four_probability) {
            return Err(ConfigError::FourProbability(self.four_probability));
        }
        if !(1..=CELLS).contains(&self.starting_tiles) {
            return Err(ConfigError::StartingTiles(self.starting_tiles));
        }
        if !self.swipe_deadzone.is_finite() || self.swipe_deadzone < 0.0 {
            return Err(ConfigError::SwipeDeadzone(self.swipe_deadzone));
        }
        Ok(())
    }

    /// Use a fixed spawn seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the chance of spawning a 4.
    #[must_use]
    pub fn with_four_probability(mut self, probability: f64) -> Self {
        self.four_probability = probability;
        self
    }

    /// Set the number of tiles on a fresh board.
    #[must_use]
    pub fn with_starting_tiles(mut self, count: usize) -> Self {
        self.starting_tiles = count;
        self
    }

    /// Set the swipe deadzone.
    #[must_use]
    pub fn with_swipe_deadzone(mut self, deadzone: f64) -> Self {
        self.swipe_deadzone = deadzone;
        self
    }
}
