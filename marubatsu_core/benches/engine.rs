//! `engine` の性能計測（着手適用、勝敗判定）。

use core::hint::black_box;
use criterion::BatchSize;
use criterion::Criterion;
use marubatsu_core::engine;

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// 走査順AIと交互に `plies` 手進めた盤面を返す。
fn board_after_plies(plies: u8) -> engine::Board {
    let mut game = engine::Match::new(marubatsu_core::ai::Kind::Sequential);
    let human_moves = [(1_u8, 1_u8), (0, 1), (2, 1), (1, 2), (2, 2)];
    let mut played = u8::MIN;

    for (x, y) in human_moves {
        if played >= plies || game.status().is_finished() {
            break;
        }
        if game.put(x, y) {
            played = played.saturating_add(1);
        }

        if played >= plies || game.status().is_finished() {
            break;
        }
        if game.select_move() {
            played = played.saturating_add(1);
        }
    }

    *game.board()
}

/// `Board::outcome` を計測する。
fn bench_outcome(criterion: &mut Criterion) {
    let empty = engine::Board::new();
    let midgame = board_after_plies(4);

    criterion.bench_function("engine/outcome_empty", |bench| {
        bench.iter(|| black_box(empty.outcome()));
    });
    criterion.bench_function("engine/outcome_midgame", |bench| {
        bench.iter(|| black_box(midgame.outcome()));
    });
}

/// `Board::put` を計測する。
fn bench_put(criterion: &mut Criterion) {
    criterion.bench_function("engine/put_center", |bench| {
        bench.iter_batched(
            engine::Board::new,
            |mut board| black_box(board.put(1, 1)),
            BatchSize::SmallInput,
        );
    });
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();

    bench_outcome(&mut criterion);
    bench_put(&mut criterion);

    criterion.final_summary();
}
