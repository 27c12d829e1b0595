use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use rust_2048::core::{Board, Direction, GameConfig, GameRng};
use rust_2048::rules::{apply_move, collapse_line, init_board, is_terminal, spawn_tile};

fn corpus() -> Vec<Board> {
    let mut rng = GameRng::new(42);
    let config = GameConfig::default();
    let mut boards = vec![Board::EMPTY];
    let mut b = init_board(&config, &mut rng);
    boards.push(b);
    // Derive a variety of densities deterministically
    for i in 0..40 {
        let result = apply_move(&b, Direction::ALL[i % 4]);
        if result.moved {
            b = spawn_tile(&result.board, config.four_probability, &mut rng).0;
        }
        boards.push(b);
    }
    boards
}

fn bench_collapse(c: &mut Criterion) {
    let lines = [[2, 2, 2, 2], [2, 0, 2, 0], [4, 8, 16, 32], [0, 0, 0, 2], [8, 8, 4, 4]];
    c.bench_function("collapse_line", |bch| {
        bch.iter(|| {
            let mut acc = 0u64;
            for &line in &lines {
                acc ^= collapse_line(black_box(line)).1;
            }
            black_box(acc)
        })
    });
}

fn bench_moves(c: &mut Criterion) {
    let boards = corpus();
    for direction in Direction::ALL {
        let name = format!("apply_move/{}", direction.to_string().to_lowercase());
        c.bench_function(&name, |bch| {
            bch.iter(|| {
                let mut acc = 0u64;
                for bd in &boards {
                    acc ^= apply_move(black_box(bd), direction).score_delta;
                }
                black_box(acc)
            })
        });
    }
}

fn bench_terminal(c: &mut Criterion) {
    let boards = corpus();
    c.bench_function("is_terminal", |bch| {
        bch.iter(|| boards.iter().filter(|bd| is_terminal(black_box(bd))).count())
    });
}

criterion_group!(benches, bench_collapse, bench_moves, bench_terminal);
criterion_main!(benches);
