//! Property tests over arbitrary well-formed boards.

use proptest::prelude::*;

use rust_2048::core::{Board, Direction, GameRng, MAX_TILE};
use rust_2048::rules::{apply_move, collapse_line, is_terminal, legal_moves, spawn_tile};

/// Mostly everyday tiles, with the rest of the legal range mixed in.
fn tile() -> impl Strategy<Value = u32> {
    prop_oneof![
        6 => Just(0u32),
        8 => (1u32..=11).prop_map(|exp| 1 << exp),
        1 => (12u32..=30).prop_map(|exp| 1 << exp),
        1 => Just(MAX_TILE),
    ]
}

/// Only the top of the range, so equal pairs at the cap are common.
fn high_tile() -> impl Strategy<Value = u32> {
    prop_oneof![
        1 => Just(0u32),
        3 => (28u32..=30).prop_map(|exp| 1 << exp),
    ]
}

fn line() -> impl Strategy<Value = [u32; 4]> {
    prop::array::uniform4(tile())
}

fn board_of(cell: impl Strategy<Value = u32>) -> impl Strategy<Value = Board> {
    prop::array::uniform4(prop::array::uniform4(cell)).prop_map(|rows| Board::from_rows(rows).unwrap())
}

fn board() -> impl Strategy<Value = Board> {
    board_of(tile())
}

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

proptest! {
    #[test]
    fn collapse_keeps_sum_and_packs_left(input in line()) {
        let (out, gained) = collapse_line(input);

        let sum_in: u64 = input.iter().map(|&v| u64::from(v)).sum();
        let sum_out: u64 = out.iter().map(|&v| u64::from(v)).sum();
        prop_assert_eq!(sum_in, sum_out);

        // No zero before a tile
        let first_zero = out.iter().position(|&v| v == 0).unwrap_or(4);
        prop_assert!(out[first_zero..].iter().all(|&v| v == 0));

        // Each merge removes one tile and scores the merged value
        let tiles_in = input.iter().filter(|&&v| v != 0).count();
        let tiles_out = out.iter().filter(|&&v| v != 0).count();
        prop_assert!(tiles_out <= tiles_in);
        prop_assert_eq!(gained == 0, tiles_in == tiles_out);
    }

    #[test]
    fn moved_matches_structural_change(b in board(), dir in direction()) {
        let result = apply_move(&b, dir);
        prop_assert_eq!(result.moved, result.board != b);
        prop_assert_eq!(b.tile_sum(), result.board.tile_sum());
        if !result.moved {
            prop_assert_eq!(result.score_delta, 0);
        }
    }

    #[test]
    fn high_tiles_stay_legal(b in board_of(high_tile()), dir in direction()) {
        let result = apply_move(&b, dir);

        prop_assert_eq!(b.tile_sum(), result.board.tile_sum());
        prop_assert!(result.board.max_tile() <= MAX_TILE);
        prop_assert!(Board::from_rows(*result.board.rows()).is_ok());
        prop_assert_eq!(is_terminal(&b), legal_moves(&b).is_empty());
    }

    #[test]
    fn repeated_move_only_merges(b in board(), dir in direction()) {
        let first = apply_move(&b, dir);
        let second = apply_move(&first.board, dir);

        // A second move in the same direction can only merge pairs the
        // first one created, never slide into gaps.
        if second.moved {
            prop_assert!(second.score_delta > 0);
        }
        if first.score_delta == 0 {
            prop_assert!(!second.moved);
        }
    }

    #[test]
    fn directions_reduce_to_left(b in board()) {
        let left = |board: &Board| apply_move(board, Direction::Left);

        let right = apply_move(&b, Direction::Right);
        let mirrored = left(&b.flip_rows());
        prop_assert_eq!(right.board, mirrored.board.flip_rows());
        prop_assert_eq!(right.score_delta, mirrored.score_delta);

        let up = apply_move(&b, Direction::Up);
        let transposed = left(&b.transpose());
        prop_assert_eq!(up.board, transposed.board.transpose());
        prop_assert_eq!(up.score_delta, transposed.score_delta);

        let down = apply_move(&b, Direction::Down);
        let transposed_mirrored = left(&b.transpose().flip_rows());
        prop_assert_eq!(down.board, transposed_mirrored.board.flip_rows().transpose());
        prop_assert_eq!(down.score_delta, transposed_mirrored.score_delta);
    }

    #[test]
    fn board_with_empty_cell_is_not_terminal(b in board()) {
        if b.count_empty() > 0 {
            prop_assert!(!is_terminal(&b));
        }
    }

    #[test]
    fn terminal_means_no_legal_moves(b in board()) {
        prop_assert_eq!(is_terminal(&b), legal_moves(&b).is_empty());
    }

    #[test]
    fn spawn_fills_exactly_one_empty_cell(b in board(), seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let (after, spawned) = spawn_tile(&b, 0.1, &mut rng);

        match spawned {
            None => {
                prop_assert!(b.is_full());
                prop_assert_eq!(after, b);
            }
            Some(spawn) => {
                prop_assert_eq!(b.get(spawn.row, spawn.col), 0);
                prop_assert!(spawn.value == 2 || spawn.value == 4);
                prop_assert_eq!(after.get(spawn.row, spawn.col), spawn.value);
                prop_assert_eq!(after.count_empty() + 1, b.count_empty());
                prop_assert_eq!(after.tile_sum(), b.tile_sum() + u64::from(spawn.value));
            }
        }
    }
}
