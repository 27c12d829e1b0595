//! Python bindings for the rust-2048 engine.
//!
//! # Quick Start
//!
//! ```python
//! import rust_2048 as g
//!
//! game = g.Game(seed=42)
//! moved, gained, over = game.step(g.Direction.LEFT)
//! print(game)
//! print(game.legal_moves())
//! ```

use pyo3::prelude::*;

mod py_game;

pub use py_game::*;

/// rust-2048: sliding-tile merge puzzle engine.
#[pymodule]
fn rust_2048(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyDirection>()?;
    m.add_class::<PyGame>()?;
    m.add_function(wrap_pyfunction!(collapse_line, m)?)?;
    Ok(())
}
