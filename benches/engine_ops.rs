use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use std::hint::black_box;
use twenty48::engine::{Direction, GameState, Grid};

fn corpus() -> Vec<GameState> {
    let mut game = GameState::with_seed(4, 4, 42);
    game.add_tile();
    game.add_tile();
    let mut states = vec![game.clone()];
    // Derive a variety of densities deterministically
    let seq = [Direction::Left, Direction::Up, Direction::Right, Direction::Down];
    for i in 0..20 {
        game.make_move(seq[i % seq.len()]);
        states.push(game.clone());
    }
    states
}

fn grids() -> Vec<Grid> {
    corpus().iter().map(|g| g.board()).collect()
}

fn bench_grid_ops(c: &mut Criterion) {
    c.bench_function("grid/rotate_ccw", |bch| {
        bch.iter_batched(
            grids,
            |mut boards| {
                for b in &mut boards {
                    b.rotate_ccw();
                }
                black_box(boards)
            },
            BatchSize::SmallInput,
        )
    });
    c.bench_function("grid/slide_down", |bch| {
        bch.iter_batched(
            grids,
            |mut boards| {
                let mut points = 0;
                for b in &mut boards {
                    points += b.slide_down().points;
                }
                black_box(points)
            },
            BatchSize::SmallInput,
        )
    });
    c.bench_function("grid/can_slide_down", |bch| {
        let boards = grids();
        bch.iter(|| {
            let mut hits = 0u32;
            for b in &boards {
                hits += b.can_slide_down() as u32;
            }
            black_box(hits)
        })
    });
}

fn bench_state_ops(c: &mut Criterion) {
    c.bench_function("state/add_tile", |bch| {
        bch.iter_batched(
            || GameState::with_seed(4, 4, 7),
            |mut game| {
                for _ in 0..16 {
                    game.add_tile();
                }
                black_box(game.board())
            },
            BatchSize::SmallInput,
        )
    });
    c.bench_function("state/make_move", |bch| {
        bch.iter_batched(
            || {
                let mut game = GameState::with_seed(4, 4, 9);
                game.add_tile();
                game.add_tile();
                game
            },
            |mut game| {
                let seq = [Direction::Left, Direction::Down, Direction::Right, Direction::Up];
                for i in 0..64 {
                    game.make_move(seq[i % seq.len()]);
                }
                black_box(game.score())
            },
            BatchSize::SmallInput,
        )
    });
    c.bench_function("state/is_game_over", |bch| {
        let states = corpus();
        bch.iter(|| {
            let mut overs = 0u32;
            for g in &states {
                overs += g.is_game_over() as u32;
            }
            black_box(overs)
        })
    });
}

criterion_group!(engine_ops, bench_grid_ops, bench_state_ops);
criterion_main!(engine_ops);
