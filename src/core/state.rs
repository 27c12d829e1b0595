//! Game state: the board, the score and the session phase.
//!
//! Board and score are created together on a fresh game and reset
//! together on restart. The phase only moves `Playing -> Over` when a
//! successful move leaves a terminal board, and back only through a reset.

use serde::{Deserialize, Serialize};

use super::board::Board;

/// Session phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Moves are accepted.
    #[default]
    Playing,
    /// The board is terminal; only a restart leaves this phase.
    Over,
}

/// Board plus cumulative score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// Current board.
    pub board: Board,

    /// Sum of all merge values this session.
    pub score: u64,

    /// Playing or over.
    pub phase: Phase,
}

impl GameState {
    /// Start a session on `board` with a zero score.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            board,
            score: 0,
            phase: Phase::Playing,
        }
    }

    /// True once the session reached a terminal board.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::Over
    }
}
