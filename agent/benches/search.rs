use std::time::Duration;

use cachex_agent::Board;
use cachex_types::{Coord, Player};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn midgame_board() -> Board {
    let mut board = Board::new(7);
    let placements = [
        (0, 0, Player::Red),
        (3, 3, Player::Blue),
        (1, 0, Player::Red),
        (3, 4, Player::Blue),
        (2, 1, Player::Red),
        (4, 2, Player::Blue),
        (3, 1, Player::Red),
        (2, 4, Player::Blue),
    ];
    for (r, q, side) in placements {
        board.place(Coord::new(r, q), side);
    }
    board
}

pub fn criterion_benchmark(criterion: &mut Criterion) {
    let template = midgame_board();
    criterion.bench_function("best_move", |b| {
        b.iter(|| {
            let mut board = template.clone();
            black_box(board.best_move(Player::Red));
        });
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(50).warm_up_time(Duration::from_secs(5));
    targets = criterion_benchmark
}
criterion_main!(benches);
