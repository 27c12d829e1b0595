//! Slide-and-merge of a single line.

use smallvec::SmallVec;

use crate::core::{can_merge, is_valid_tile, BoardError, SIZE};

/// Collapse one line toward index 0.
///
/// 1. Drop empty cells, keeping order.
/// 2. Scan left to right; an equal adjacent pair becomes one tile of double
///    value and the scan skips past the pair. A merged tile never merges
///    again in the same pass, and a pair of `MAX_TILE`s stays put.
/// 3. Drop the holes left by merges and pad with zeros on the right.
///
/// Returns the new line and the sum of the merged values.
///
/// ```
/// use rust_2048::rules::collapse_line;
///
/// assert_eq!(collapse_line([2, 2, 2, 2]), ([4, 4, 0, 0], 8));
/// assert_eq!(collapse_line([2, 2, 2, 0]), ([4, 2, 0, 0], 4));
/// ```
#[must_use]
pub fn collapse_line(line: [u32; SIZE]) -> ([u32; SIZE], u64) {
    let mut tiles: SmallVec<[u32; SIZE]> = line.iter().copied().filter(|&v| v != 0).collect();
    let mut gained = 0u64;

    let mut i = 0;
    while i + 1 < tiles.len() {
        if tiles[i] == tiles[i + 1] && can_merge(tiles[i]) {
            tiles[i] *= 2;
            tiles[i + 1] = 0;
            gained += u64::from(tiles[i]);
            i += 2;
        } else {
            i += 1;
        }
    }

    let mut out = [0; SIZE];
    for (slot, value) in out.iter_mut().zip(tiles.into_iter().filter(|&v| v != 0)) {
        *slot = value;
    }
    (out, gained)
}

/// [`collapse_line`] for values from outside the crate.
///
/// ```
/// use rust_2048::core::BoardError;
/// use rust_2048::rules::try_collapse_line;
///
/// assert_eq!(try_collapse_line([2, 2, 0, 0]), Ok(([4, 0, 0, 0], 4)));
/// assert_eq!(try_collapse_line([3, 3, 0, 0]), Err(BoardError::InvalidLine { index: 0, value: 3 }));
/// ```
pub fn try_collapse_line(line: [u32; SIZE]) -> Result<([u32; SIZE], u64), BoardError> {
    if let Some((index, &value)) = line.iter().enumerate().find(|&(_, &v)| !is_valid_tile(v)) {
        return Err(BoardError::InvalidLine { index, value });
    }
    Ok(collapse_line(line))
}
