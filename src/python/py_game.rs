//! Game and direction bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Direction, GameConfig};
use crate::game::{Game, Turn};
use crate::rules;

/// Python wrapper for Direction.
#[pyclass(name = "Direction")]
#[derive(Clone, Copy, Debug)]
pub struct PyDirection(pub Direction);

#[pymethods]
impl PyDirection {
    #[classattr]
    const UP: PyDirection = PyDirection(Direction::Up);

    #[classattr]
    const DOWN: PyDirection = PyDirection(Direction::Down);

    #[classattr]
    const LEFT: PyDirection = PyDirection(Direction::Left);

    #[classattr]
    const RIGHT: PyDirection = PyDirection(Direction::Right);

    /// Parse a key name ("ArrowUp", "w", ...).
    #[staticmethod]
    fn from_key(key: &str) -> Option<Self> {
        crate::input::map_key(key).map(Self)
    }

    fn __repr__(&self) -> String {
        format!("Direction.{}", self.0.to_string().to_uppercase())
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        match self.0 {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }
}

/// Python wrapper for a game session.
#[pyclass(name = "Game")]
pub struct PyGame {
    inner: Game,
}

#[pymethods]
impl PyGame {
    /// Start a game. `seed=None` seeds from OS entropy.
    #[new]
    #[pyo3(signature = (seed = None, four_probability = 0.1))]
    fn new(seed: Option<u64>, four_probability: f64) -> PyResult<Self> {
        let mut config = GameConfig::default().with_four_probability(four_probability);
        config.seed = seed;
        let inner = Game::new(config).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Apply a direction.
    ///
    /// Returns `(moved, score_delta, game_over)`.
    fn step(&mut self, direction: PyDirection) -> (bool, u64, bool) {
        let Turn {
            moved,
            score_delta,
            game_over,
            ..
        } = self.inner.on_direction(direction.0);
        (moved, score_delta, game_over)
    }

    /// Start over with a fresh board and zero score.
    fn restart(&mut self) {
        self.inner.restart();
    }

    /// Board as four rows of four values.
    #[getter]
    fn board(&self) -> Vec<Vec<u32>> {
        self.inner.board().rows().iter().map(|row| row.to_vec()).collect()
    }

    #[getter]
    fn score(&self) -> u64 {
        self.inner.score()
    }

    #[getter]
    fn moves(&self) -> u32 {
        self.inner.moves()
    }

    fn is_over(&self) -> bool {
        self.inner.is_over()
    }

    fn max_tile(&self) -> u32 {
        self.inner.max_tile()
    }

    /// Directions that would change the board.
    fn legal_moves(&self) -> Vec<PyDirection> {
        rules::legal_moves(self.inner.board()).into_iter().map(PyDirection).collect()
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        let state = self.inner.state();
        format!("Game(score={}, moves={}, phase={:?})", state.score, self.inner.moves(), state.phase)
    }
}

/// Collapse one line toward index 0; returns `(line, score_gained)`.
///
/// Raises `ValueError` for a value that is not 0 or a legal tile.
#[pyfunction]
pub fn collapse_line(line: [u32; 4]) -> PyResult<([u32; 4], u64)> {
    rules::try_collapse_line(line).map_err(|e| PyValueError::new_err(e.to_string()))
}
