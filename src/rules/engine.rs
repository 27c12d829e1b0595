//! Board transitions: moves, spawns and terminal detection.
//!
//! Every function here is pure over its inputs. Randomness only enters
//! through the [`TileRng`] passed to [`spawn_tile`] and [`init_board`].

use serde::{Deserialize, Serialize};

use super::collapse::collapse_line;
use crate::core::{can_merge, Board, Direction, GameConfig, TileRng, SIZE};

/// Outcome of applying a direction to a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveResult {
    /// The board after sliding and merging.
    pub board: Board,
    /// True iff any cell differs from the input board.
    pub moved: bool,
    /// Sum of merged values across all lines.
    pub score_delta: u64,
}

/// A tile placed by [`spawn_tile`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Spawn {
    pub row: usize,
    pub col: usize,
    pub value: u32,
}

/// Place a 2 or 4 in a uniformly chosen empty cell.
///
/// Draws one index (the cell) then one unit float (the value: 4 when the
/// float is at least `1 - four_probability`). A full board is returned
/// unchanged with `None`; that is a no-op, not an error.
pub fn spawn_tile<R: TileRng + ?Sized>(
    board: &Board,
    four_probability: f64,
    rng: &mut R,
) -> (Board, Option<Spawn>) {
    let empty: Vec<(usize, usize)> = board.empty_cells().collect();
    if empty.is_empty() {
        return (*board, None);
    }

    let (row, col) = empty[rng.next_index(empty.len())];
    let value = if rng.next_unit() < 1.0 - four_probability { 2 } else { 4 };

    let mut out = *board;
    out.set(row, col, value);
    (out, Some(Spawn { row, col, value }))
}

/// A fresh board with `config.starting_tiles` spawned tiles.
///
/// Spawns only target empty cells, so the seeded cells are distinct.
pub fn init_board<R: TileRng + ?Sized>(config: &GameConfig, rng: &mut R) -> Board {
    (0..config.starting_tiles).fold(Board::EMPTY, |board, _| {
        spawn_tile(&board, config.four_probability, rng).0
    })
}

/// Collapse every row toward column 0.
fn collapse_rows(board: &Board) -> (Board, u64) {
    let mut out = *board;
    let mut gained = 0;
    for row in 0..SIZE {
        let (line, score) = collapse_line(board.row(row));
        out.set_row(row, line);
        gained += score;
    }
    (out, gained)
}

/// Slide and merge every line in `direction`.
///
/// Each direction is oriented so the collapse runs toward index 0:
/// Right mirrors the rows, Up rotates counter-clockwise and Down rotates
/// clockwise, then the inverse transform restores the orientation.
///
/// ```
/// use rust_2048::core::{Board, Direction};
/// use rust_2048::rules::apply_move;
///
/// let board = Board::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
/// let result = apply_move(&board, Direction::Right);
///
/// assert!(result.moved);
/// assert_eq!(result.board.row(0), [0, 0, 0, 4]);
/// assert_eq!(result.score_delta, 4);
/// ```
#[must_use]
pub fn apply_move(board: &Board, direction: Direction) -> MoveResult {
    let (after, score_delta) = match direction {
        Direction::Left => collapse_rows(board),
        Direction::Right => {
            let (collapsed, score) = collapse_rows(&board.flip_rows());
            (collapsed.flip_rows(), score)
        }
        Direction::Up => {
            let (collapsed, score) = collapse_rows(&board.rotate_ccw());
            (collapsed.rotate_cw(), score)
        }
        Direction::Down => {
            let (collapsed, score) = collapse_rows(&board.rotate_cw());
            (collapsed.rotate_ccw(), score)
        }
    };

    MoveResult {
        board: after,
        moved: after != *board,
        score_delta,
    }
}

/// True iff no move in any direction can change the board.
///
/// The board must be full and have no mergeable equal horizontal or
/// vertical neighbours. Recomputed from the board on every call.
#[must_use]
pub fn is_terminal(board: &Board) -> bool {
    for row in 0..SIZE {
        for col in 0..SIZE {
            let value = board.get(row, col);
            if value == 0 {
                return false;
            }
            if !can_merge(value) {
                continue;
            }
            if col + 1 < SIZE && value == board.get(row, col + 1) {
                return false;
            }
            if row + 1 < SIZE && value == board.get(row + 1, col) {
                return false;
            }
        }
    }
    true
}

/// True if moving in `direction` would change the board.
#[must_use]
pub fn can_move(board: &Board, direction: Direction) -> bool {
    apply_move(board, direction).moved
}

/// Directions that would change the board, in [`Direction::ALL`] order.
#[must_use]
pub fn legal_moves(board: &Board) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&direction| can_move(board, direction))
        .collect()
}
