//! Move rules for the grid.
//!
//! - `collapse`: slide-and-merge of one line toward index 0
//! - `engine`: whole-board moves, tile spawning and terminal detection
//!
//! Nothing here holds state; the controller in [`crate::game`] owns the
//! board and score and calls into these functions.

pub mod collapse;
pub mod engine;

pub use collapse::{collapse_line, try_collapse_line};
pub use engine::{apply_move, can_move, init_board, is_terminal, legal_moves, spawn_tile, MoveResult, Spawn};
