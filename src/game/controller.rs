//! The game controller.

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{Board, ConfigError, Direction, GameConfig, GameRng, GameState, Phase, TileRng};
use crate::input::InputHandler;
use crate::rules::{apply_move, init_board, is_terminal, spawn_tile, Spawn};

/// Outcome of one directional input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// The direction that was requested.
    pub direction: Direction,
    /// True if the board changed (and a tile was spawned).
    pub moved: bool,
    /// Score gained by merges this turn.
    pub score_delta: u64,
    /// Tile spawned after the move, if any.
    pub spawned: Option<Spawn>,
    /// True if the session is over after this turn.
    pub game_over: bool,
}

impl Turn {
    fn unchanged(direction: Direction, game_over: bool) -> Self {
        Self {
            direction,
            moved: false,
            score_delta: 0,
            spawned: None,
            game_over,
        }
    }
}

/// Owns one session's board, score and spawn RNG.
///
/// Each call to [`Game::on_direction`] runs the full pipeline to
/// completion: move, spawn on change, terminal check.
///
/// ## Example
///
/// ```
/// use rust_2048::core::{Direction, GameConfig};
/// use rust_2048::game::Game;
///
/// let mut game = Game::new(GameConfig::default().with_seed(42)).unwrap();
/// assert_eq!(game.board().count_empty(), 14);
/// assert_eq!(game.score(), 0);
///
/// let turn = game.on_direction(Direction::Left);
/// assert!(turn.spawned.is_some() || !turn.moved);
/// ```
#[derive(Clone, Debug)]
pub struct Game<R = GameRng> {
    config: GameConfig,
    state: GameState,
    rng: R,
    moves: u32,
}

impl Game<GameRng> {
    /// Start a game seeded from `config.seed`, or from OS entropy when unset.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        info!("new game with seed {}", rng.seed());
        Self::with_rng(config, rng)
    }
}

impl<R: TileRng> Game<R> {
    /// Start a game drawing spawns from `rng`.
    pub fn with_rng(config: GameConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = init_board(&config, &mut rng);
        Ok(Self {
            config,
            state: GameState::new(board),
            rng,
            moves: 0,
        })
    }

    /// Continue from an existing board with a zero score.
    ///
    /// A terminal board starts in [`Phase::Over`].
    pub fn with_board(config: GameConfig, board: Board, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut state = GameState::new(board);
        if is_terminal(&board) {
            state.phase = Phase::Over;
        }
        Ok(Self {
            config,
            state,
            rng,
            moves: 0,
        })
    }

    /// Apply one directional input.
    ///
    /// A move that changes nothing leaves the board, score and RNG
    /// untouched. Inputs after the game is over are ignored.
    pub fn on_direction(&mut self, direction: Direction) -> Turn {
        if self.state.is_over() {
            trace!("{direction} ignored: game is over");
            return Turn::unchanged(direction, true);
        }

        let result = apply_move(&self.state.board, direction);
        if !result.moved {
            trace!("{direction} changed nothing");
            return Turn::unchanged(direction, false);
        }

        let (board, spawned) = spawn_tile(&result.board, self.config.four_probability, &mut self.rng);
        self.state.board = board;
        self.state.score += result.score_delta;
        self.moves += 1;

        let game_over = is_terminal(&board);
        debug!(
            "move {}: {direction}, +{} (score {}), spawned {spawned:?}",
            self.moves, result.score_delta, self.state.score
        );
        if game_over {
            self.state.phase = Phase::Over;
            info!(
                "game over after {} moves: score {}, max tile {}",
                self.moves,
                self.state.score,
                board.max_tile()
            );
        }

        Turn {
            direction,
            moved: true,
            score_delta: result.score_delta,
            spawned,
            game_over,
        }
    }

    /// Throw away the current session and start a fresh board.
    pub fn restart(&mut self) {
        info!("restart after {} moves with score {}", self.moves, self.state.score);
        let board = init_board(&self.config, &mut self.rng);
        self.state = GameState::new(board);
        self.moves = 0;
    }

    /// Current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.state.score
    }

    /// Playing or over.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// True once no move can change the board.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Board, score and phase together.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Successful moves this session.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Highest tile on the board.
    #[must_use]
    pub fn max_tile(&self) -> u32 {
        self.state.board.max_tile()
    }

    /// The configuration this game was started with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The spawn RNG.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}

impl<R: TileRng> InputHandler for Game<R> {
    fn on_direction(&mut self, direction: Direction) -> Turn {
        Self::on_direction(self, direction)
    }

    fn swipe_deadzone(&self) -> f64 {
        self.config.swipe_deadzone
    }
}

impl<R> fmt::Display for Game<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.state.board)?;
        write!(f, "Score: {}", self.state.score)
    }
}
