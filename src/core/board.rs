//! The 4x4 board and move directions.
//!
//! ## Board
//!
//! A fixed 4x4 matrix of tile values. `0` is an empty cell; every other
//! value is a power of two in `2..=MAX_TILE`. The public API only builds boards through
//! [`Board::from_rows`] (validated) or [`Board::EMPTY`]; the engine mutates
//! cells through a crate-private setter.
//!
//! ## Orientation helpers
//!
//! [`Board::rotate_cw`], [`Board::rotate_ccw`], [`Board::flip_rows`] and
//! [`Board::transpose`] let the engine reduce every direction to
//! "collapse toward index 0".

use serde::{Deserialize, Serialize};
use std::fmt;

/// Board edge length.
pub const SIZE: usize = 4;

/// Number of cells on the board.
pub const CELLS: usize = SIZE * SIZE;

/// Largest tile a cell may hold. Two of them never merge, so a merge result
/// always fits in a `u32` and stays a legal tile.
pub const MAX_TILE: u32 = 1 << 30;

/// Raw row-major cell matrix.
pub type Rows = [[u32; SIZE]; SIZE];

/// A direction to slide and merge tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        };
        f.write_str(name)
    }
}

/// Error building a board from untrusted cell values.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A non-zero cell is not a power of two in `2..=MAX_TILE`.
    #[error("invalid tile {value} at row {row}, column {col}: tiles must be 0 or a power of two from 2 to 2^30")]
    InvalidTile { row: usize, col: usize, value: u32 },

    /// Same check for a lone line, by position.
    #[error("invalid tile {value} at index {index}: tiles must be 0 or a power of two from 2 to 2^30")]
    InvalidLine { index: usize, value: u32 },
}

/// Returns true if `value` may occupy a cell.
#[inline]
#[must_use]
pub const fn is_valid_tile(value: u32) -> bool {
    value == 0 || (value >= 2 && value <= MAX_TILE && value.is_power_of_two())
}

/// True if two adjacent tiles of `value` combine.
#[inline]
#[must_use]
pub const fn can_merge(value: u32) -> bool {
    value != 0 && value < MAX_TILE
}

/// A 4x4 board of tile values.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Rows", into = "Rows")]
pub struct Board {
    cells: Rows,
}

impl Board {
    /// A board with every cell empty.
    pub const EMPTY: Board = Board { cells: [[0; SIZE]; SIZE] };

    /// Build a board from row-major values, validating every cell.
    ///
    /// ```
    /// use rust_2048::core::Board;
    ///
    /// let board = Board::from_rows([[2, 0, 0, 0], [0; 4], [0; 4], [0, 0, 0, 4]]).unwrap();
    /// assert_eq!(board.get(3, 3), 4);
    ///
    /// assert!(Board::from_rows([[3, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).is_err());
    /// ```
    pub fn from_rows(rows: Rows) -> Result<Self, BoardError> {
        for (row, line) in rows.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(BoardError::InvalidTile { row, col, value });
                }
            }
        }
        Ok(Self { cells: rows })
    }

    /// Borrow the raw rows.
    #[must_use]
    pub fn rows(&self) -> &Rows {
        &self.cells
    }

    /// Copy of a single row.
    #[must_use]
    pub fn row(&self, row: usize) -> [u32; SIZE] {
        self.cells[row]
    }

    /// Copy of a single column, top to bottom.
    #[must_use]
    pub fn column(&self, col: usize) -> [u32; SIZE] {
        std::array::from_fn(|row| self.cells[row][col])
    }

    /// Value at `(row, col)`; `0` when empty.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row][col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: u32) {
        debug_assert!(is_valid_tile(value), "invalid tile value {value}");
        self.cells[row][col] = value;
    }

    pub(crate) fn set_row(&mut self, row: usize, values: [u32; SIZE]) {
        debug_assert!(values.iter().all(|&v| is_valid_tile(v)), "invalid row {values:?}");
        self.cells[row] = values;
    }

    /// Iterate over empty cell coordinates in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .filter(|(_, value)| **value == 0)
                .map(move |(col, _)| (row, col))
        })
    }

    /// Number of empty cells.
    #[must_use]
    pub fn count_empty(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v == 0).count()
    }

    /// True if no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.count_empty() == 0
    }

    /// Highest tile on the board, `0` for an empty board.
    #[must_use]
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Sum of all tile values.
    #[must_use]
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().flatten().map(|&v| u64::from(v)).sum()
    }

    // === Orientation ===

    /// Rotate 90 degrees clockwise.
    #[must_use]
    pub fn rotate_cw(&self) -> Self {
        let mut out = Self::EMPTY;
        for (row, line) in self.cells.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                out.cells[col][SIZE - 1 - row] = value;
            }
        }
        out
    }

    /// Rotate 90 degrees counter-clockwise.
    #[must_use]
    pub fn rotate_ccw(&self) -> Self {
        let mut out = Self::EMPTY;
        for (row, line) in self.cells.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                out.cells[SIZE - 1 - col][row] = value;
            }
        }
        out
    }

    /// Reverse every row (mirror left to right).
    #[must_use]
    pub fn flip_rows(&self) -> Self {
        let mut out = *self;
        for line in &mut out.cells {
            line.reverse();
        }
        out
    }

    /// Swap rows and columns.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut out = Self::EMPTY;
        for (row, line) in self.cells.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                out.cells[col][row] = value;
            }
        }
        out
    }
}

impl TryFrom<Rows> for Board {
    type Error = BoardError;

    fn try_from(rows: Rows) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Board> for Rows {
    fn from(board: Board) -> Self {
        board.cells
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({:?})", self.cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.max_tile().max(1).to_string().len().max(4);
        let rule = "-".repeat((width + 1) * SIZE + 1);

        writeln!(f, "{rule}")?;
        for line in &self.cells {
            write!(f, "|")?;
            for &value in line {
                if value == 0 {
                    write!(f, "{:>width$}|", "")?;
                } else {
                    write!(f, "{value:>width$}|")?;
                }
            }
            writeln!(f)?;
            writeln!(f, "{rule}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Board {
        Board::from_rows([[2, 4, 8, 16], [0, 0, 0, 0], [0, 0, 0, 0], [32, 0, 0, 64]]).unwrap()
    }

    #[test]
    fn test_from_rows_rejects_bad_tiles() {
        let err = Board::from_rows([[0; 4], [0, 0, 6, 0], [0; 4], [0; 4]]).unwrap_err();
        assert_eq!(err, BoardError::InvalidTile { row: 1, col: 2, value: 6 });

        // 1 is a power of two but not a legal tile
        assert!(Board::from_rows([[1, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).is_err());
    }

    #[test]
    fn test_empty_cells_row_major() {
        let board = Board::from_rows([[2, 0, 2, 2], [2; 4], [2; 4], [2, 2, 2, 0]]).unwrap();
        let empty: Vec<_> = board.empty_cells().collect();
        assert_eq!(empty, vec![(0, 1), (3, 3)]);
        assert_eq!(board.count_empty(), 2);
        assert!(!board.is_full());
    }

    #[test]
    fn test_rotations_are_inverse() {
        let board = sample();
        assert_eq!(board.rotate_cw().rotate_ccw(), board);
        assert_eq!(board.rotate_ccw().rotate_cw(), board);
        assert_eq!(board.rotate_cw().rotate_cw().rotate_cw().rotate_cw(), board);
    }

    #[test]
    fn test_rotate_cw_moves_top_row_to_right_column() {
        let rotated = sample().rotate_cw();
        assert_eq!(rotated.column(3), [2, 4, 8, 16]);
    }

    #[test]
    fn test_rotate_ccw_moves_left_column_to_bottom_row() {
        let rotated = sample().rotate_ccw();
        assert_eq!(rotated.row(3), [2, 0, 0, 32]);
    }

    #[test]
    fn test_flip_and_transpose() {
        let board = sample();
        assert_eq!(board.flip_rows().row(0), [16, 8, 4, 2]);
        assert_eq!(board.flip_rows().flip_rows(), board);
        assert_eq!(board.transpose().row(0), board.column(0));
        assert_eq!(board.transpose().transpose(), board);
    }

    #[test]
    fn test_max_tile_and_sum() {
        let board = sample();
        assert_eq!(board.max_tile(), 64);
        assert_eq!(board.tile_sum(), 2 + 4 + 8 + 16 + 32 + 64);
        assert_eq!(Board::EMPTY.max_tile(), 0);
    }

    #[test]
    fn test_display_blanks_empty_cells() {
        let text = Board::from_rows([[2048, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap().to_string();
        assert!(text.contains("|2048|    |    |    |"));
    }

    #[test]
    fn test_serde_validates() {
        let board = sample();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, "[[2,4,8,16],[0,0,0,0],[0,0,0,0],[32,0,0,64]]");
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);

        assert!(serde_json::from_str::<Board>("[[5,0,0,0],[0,0,0,0],[0,0,0,0],[0,0,0,0]]").is_err());
    }

    #[test]
    fn test_tile_range_is_capped() {
        assert!(is_valid_tile(MAX_TILE));
        assert!(!is_valid_tile(MAX_TILE << 1));

        let err = Board::from_rows([[1 << 31, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap_err();
        assert_eq!(err, BoardError::InvalidTile { row: 0, col: 0, value: 1 << 31 });
        assert!(serde_json::from_str::<Board>("[[2147483648,0,0,0],[0,0,0,0],[0,0,0,0],[0,0,0,0]]").is_err());

        assert!(can_merge(MAX_TILE >> 1));
        assert!(!can_merge(MAX_TILE));
        assert!(!can_merge(0));
    }
}
