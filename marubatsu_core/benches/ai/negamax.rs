//! `ai::negamax` の性能計測（1手選択、枝刈りなしの基準値）。

use core::hint::black_box;
use criterion::BatchSize;
use criterion::Criterion;
use marubatsu_core::ai;
use marubatsu_core::ai::types::Strategy as _;
use marubatsu_core::engine;

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// 先手が中央へ打っただけの序盤の盤面を返す。
fn opening_board() -> engine::Board {
    let mut board = engine::Board::new();
    let _placed = board.put(1, 1);
    board
}

/// `negamax::Agent::think` を計測する。
fn bench_think(criterion: &mut Criterion) {
    criterion.bench_function("ai/negamax_think_empty", |bench| {
        bench.iter_batched(
            engine::Board::new,
            |mut board| {
                let mut agent = ai::negamax::Agent::new();
                black_box(agent.think(&mut board))
            },
            BatchSize::SmallInput,
        );
    });

    criterion.bench_function("ai/negamax_think_opening", |bench| {
        bench.iter_batched(
            opening_board,
            |mut board| {
                let mut agent = ai::negamax::Agent::new();
                black_box(agent.think(&mut board))
            },
            BatchSize::SmallInput,
        );
    });
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();

    bench_think(&mut criterion);

    criterion.final_summary();
}
